#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::config::TuningConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{ConfigError, ThrowRejected};
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{ActorId, AimRotation, FlightPath, SimTime};

    // ---- Config ----

    #[test]
    fn test_default_config_matches_constants() {
        let config = TuningConfig::default();
        assert_eq!(config.flight.outward_distance, DEFAULT_OUTWARD_DISTANCE);
        assert_eq!(config.flight.curve_radius, DEFAULT_CURVE_RADIUS);
        assert_eq!(config.flight.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(config.flight.total_flight_time, DEFAULT_TOTAL_FLIGHT_TIME);
        assert_eq!(config.scoring.score_award, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "flight": { "curve_radius": 450.0 }, "scoring": { "score_award": 250 } }"#;
        let config = TuningConfig::from_json_str(json).unwrap();
        assert_eq!(config.flight.curve_radius, 450.0);
        assert_eq!(config.flight.outward_distance, DEFAULT_OUTWARD_DISTANCE);
        assert_eq!(config.scoring.score_award, 250);
        assert_eq!(config.round.duration_secs, DEFAULT_ROUND_DURATION);
        assert!(config.spawner.enabled);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = TuningConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TuningConfig::default());
    }

    #[test]
    fn test_invalid_flight_time_rejected() {
        let json = r#"{ "flight": { "total_flight_time": 0.0 } }"#;
        match TuningConfig::from_json_str(json) {
            Err(ConfigError::Invalid { field, .. }) => {
                assert_eq!(field, "flight.total_flight_time")
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_count_range_enforced() {
        for count in [0, MAX_SAMPLE_COUNT + 1] {
            let json = format!(r#"{{ "flight": {{ "sample_count": {count} }} }}"#);
            match TuningConfig::from_json_str(&json) {
                Err(ConfigError::Invalid { field, .. }) => {
                    assert_eq!(field, "flight.sample_count")
                }
                other => panic!("expected Invalid for {count}, got {other:?}"),
            }
        }
        let json = format!(r#"{{ "flight": {{ "sample_count": {MAX_SAMPLE_COUNT} }} }}"#);
        assert!(TuningConfig::from_json_str(&json).is_ok());
        assert!(TuningConfig::from_json_str(r#"{ "flight": { "sample_count": 1 } }"#).is_ok());
    }

    #[test]
    fn test_inverted_spawn_radius_rejected() {
        let json = r#"{ "spawner": { "min_radius": 900.0, "max_radius": 200.0 } }"#;
        assert!(matches!(
            TuningConfig::from_json_str(json),
            Err(ConfigError::Invalid {
                field: "spawner.min_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            TuningConfig::from_json_str("{ flight: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::path::Path::new("/nonexistent/boomerang/tuning.json");
        assert!(matches!(
            TuningConfig::load(path),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_target_category_configurable() {
        let json = r#"{ "spawner": { "target_category": "WorldStatic" } }"#;
        let config = TuningConfig::from_json_str(json).unwrap();
        assert_eq!(config.spawner.target_category, SurfaceCategory::WorldStatic);
    }

    // ---- Types ----

    #[test]
    fn test_flight_path_flyable_needs_two_points() {
        assert!(!FlightPath::empty().is_flyable());
        assert!(!FlightPath::new(vec![DVec3::ZERO]).is_flyable());
        let path = FlightPath::new(vec![DVec3::ZERO, DVec3::X]);
        assert!(path.is_flyable());
        assert_eq!(path.first(), Some(DVec3::ZERO));
        assert_eq!(path.last(), Some(DVec3::X));
    }

    #[test]
    fn test_aim_forward_zero_rotation_is_x() {
        let f = AimRotation::default().forward();
        assert!((f - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_aim_forward_is_unit_length() {
        for (yaw, pitch) in [(0.0, 45.0), (90.0, -30.0), (217.0, 89.0), (-45.0, 0.0)] {
            let f = AimRotation::new(yaw, pitch).forward();
            assert!((f.length() - 1.0).abs() < 1e-12, "yaw={yaw} pitch={pitch}");
        }
        let up = AimRotation::new(0.0, 90.0).forward();
        assert!((up - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);

        time.advance_by(0.5);
        assert_eq!(time.tick, TICK_RATE as u64 + 1);
        assert!((time.elapsed_secs - 1.5).abs() < 1e-9);
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Turn { degrees: 12.5 },
            PlayerCommand::LookUp { degrees: -3.0 },
            PlayerCommand::Throw,
            PlayerCommand::ThrowDirect {
                direction: DVec3::new(1.0, 0.0, 0.5),
            },
            PlayerCommand::StartRound,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
        let json = serde_json::to_string(&PlayerCommand::Throw).unwrap();
        assert_eq!(json, r#"{"type":"Throw"}"#);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::BoomerangTerminated {
                boomerang: ActorId(7),
                thrower: Some(ActorId(1)),
                cause: TerminationCause::PathComplete,
            },
            GameEvent::ThrowRejected {
                thrower: ActorId(1),
                reason: ThrowRejected::AlreadyActive,
            },
            GameEvent::TargetDestroyed {
                target: ActorId(9),
                thrower: None,
                points: 100,
            },
            GameEvent::BoomerangSettling {
                boomerang: ActorId(7),
                location: DVec3::new(1.0, 2.0, 3.0),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Lobby\""));
    }

    #[test]
    fn test_throw_rejected_messages() {
        assert_eq!(
            ThrowRejected::AlreadyActive.to_string(),
            "thrower already has a boomerang in flight"
        );
        assert_eq!(
            ThrowRejected::Unflyable.to_string(),
            "trajectory has fewer than two waypoints"
        );
    }
}
