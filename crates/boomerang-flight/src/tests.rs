#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::DVec3;

    use boomerang_core::components::FlightState;
    use boomerang_core::constants::*;
    use boomerang_core::enums::{FlightMode, SurfaceCategory, TerminationCause};
    use boomerang_core::types::{ActorId, FlightPath};

    use crate::classify::{classify, Contact, SweepHit};
    use crate::fsm::*;
    use crate::trajectory::{generate, AimBasis, TrajectoryParams};

    const GRACE: f64 = DEFAULT_SETTLING_GRACE_PERIOD;

    fn hit(actor: u64, category: SurfaceCategory, is_target: bool) -> SweepHit {
        SweepHit {
            actor: ActorId(actor),
            category,
            is_target,
            time_of_impact: 0.5,
            location: DVec3::new(1.0, 2.0, 3.0),
            normal: DVec3::Z,
        }
    }

    fn straight_flight() -> FlightState {
        let path = FlightPath::new(vec![DVec3::ZERO, DVec3::new(100.0, 0.0, 0.0), DVec3::ZERO]);
        launch(path, 1.0).unwrap()
    }

    // ---- Classification ----

    #[test]
    fn test_no_hit_is_no_contact() {
        assert_eq!(classify(None, &HashSet::new()), Contact::NoContact);
    }

    #[test]
    fn test_static_geometry_blocks() {
        let h = hit(3, SurfaceCategory::WorldStatic, false);
        assert_eq!(
            classify(Some(&h), &HashSet::new()),
            Contact::Blocking {
                actor: ActorId(3),
                location: h.location,
                normal: DVec3::Z,
            }
        );
    }

    #[test]
    fn test_target_passes_through_whatever_category() {
        for category in [
            SurfaceCategory::WorldDynamic,
            SurfaceCategory::WorldStatic,
            SurfaceCategory::Pawn,
        ] {
            let h = hit(9, category, true);
            assert_eq!(
                classify(Some(&h), &HashSet::new()),
                Contact::PassThrough { target: ActorId(9) },
                "category {category:?}"
            );
        }
    }

    #[test]
    fn test_non_target_dynamic_blocks() {
        let h = hit(4, SurfaceCategory::WorldDynamic, false);
        assert!(matches!(
            classify(Some(&h), &HashSet::new()),
            Contact::Blocking { .. }
        ));
    }

    #[test]
    fn test_ignored_actor_is_no_contact() {
        let ignore: HashSet<ActorId> = [ActorId(9), ActorId(3)].into_iter().collect();
        assert_eq!(
            classify(Some(&hit(9, SurfaceCategory::WorldDynamic, true)), &ignore),
            Contact::NoContact
        );
        assert_eq!(
            classify(Some(&hit(3, SurfaceCategory::WorldStatic, false)), &ignore),
            Contact::NoContact
        );
    }

    // ---- Launch ----

    #[test]
    fn test_launch_rejects_short_paths() {
        assert!(launch(FlightPath::empty(), 2.5).is_none());
        assert!(launch(FlightPath::new(vec![DVec3::ZERO]), 2.5).is_none());
    }

    #[test]
    fn test_launch_starts_following_path() {
        let state = straight_flight();
        assert_eq!(state.mode, FlightMode::FollowingPath);
        assert_eq!(state.elapsed_secs, 0.0);
        assert!(state.ignore.is_empty());
        assert!(state.termination.is_none());
    }

    #[test]
    fn test_unguided_launch_is_physics_driven() {
        let mut state = launch_unguided();
        assert_eq!(state.mode, FlightMode::PhysicsDriven);
        assert_eq!(begin_tick(&mut state, DT), TickPlan::Passive);
        assert_eq!(display_progress(&state), 0.0);
    }

    // ---- Path following ----

    #[test]
    fn test_first_tick_advances_before_sampling() {
        let mut state = straight_flight();
        match begin_tick(&mut state, 0.25) {
            TickPlan::Sweep { desired, alpha } => {
                assert!((alpha - 0.25).abs() < 1e-12);
                assert!((desired.x - 50.0).abs() < 1e-9);
            }
            other => panic!("expected sweep, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_path_completes_at_alpha_one() {
        let mut state = straight_flight();
        for _ in 0..3 {
            let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 0.25) else {
                panic!("expected sweep");
            };
            let out = resolve_sweep(&mut state, desired, alpha, Contact::NoContact, GRACE).unwrap();
            assert!(out.transition.is_none());
        }
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 0.25) else {
            panic!("expected sweep");
        };
        let out = resolve_sweep(&mut state, desired, alpha, Contact::NoContact, GRACE).unwrap();
        assert_eq!(
            out.transition,
            Some(Transition::Terminated(TerminationCause::PathComplete))
        );
        assert_eq!(out.position, DVec3::ZERO);
        assert_eq!(state.mode, FlightMode::Terminated);
        assert_eq!(state.termination, Some(TerminationCause::PathComplete));
    }

    #[test]
    fn test_blocking_enters_settling_at_contact() {
        let mut state = straight_flight();
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 0.1) else {
            panic!("expected sweep");
        };
        let contact = Contact::Blocking {
            actor: ActorId(1),
            location: DVec3::new(7.0, 0.0, 0.0),
            normal: DVec3::NEG_X,
        };
        let out = resolve_sweep(&mut state, desired, alpha, contact, GRACE).unwrap();
        assert_eq!(out.position, DVec3::new(7.0, 0.0, 0.0));
        assert_eq!(
            out.transition,
            Some(Transition::Settling {
                location: DVec3::new(7.0, 0.0, 0.0)
            })
        );
        assert_eq!(state.mode, FlightMode::Settling);
        assert_eq!(state.grace_remaining_secs, GRACE);
    }

    #[test]
    fn test_blocking_on_final_frame_settles() {
        let mut state = straight_flight();
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 5.0) else {
            panic!("expected sweep");
        };
        assert_eq!(alpha, 1.0);
        let contact = Contact::Blocking {
            actor: ActorId(1),
            location: DVec3::ONE,
            normal: DVec3::Z,
        };
        resolve_sweep(&mut state, desired, alpha, contact, GRACE).unwrap();
        assert_eq!(state.mode, FlightMode::Settling);
    }

    #[test]
    fn test_pass_through_keeps_flying_and_ignores_target() {
        let mut state = straight_flight();
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 0.2) else {
            panic!("expected sweep");
        };
        let contact = Contact::PassThrough { target: ActorId(42) };
        let out = resolve_sweep(&mut state, desired, alpha, contact, GRACE).unwrap();
        assert_eq!(out.destroyed_target, Some(ActorId(42)));
        assert_eq!(out.position, desired);
        assert_eq!(state.mode, FlightMode::FollowingPath);
        assert!(state.ignore.contains(&ActorId(42)));

        // The same target is invisible on later sweeps.
        let again = classify(
            Some(&hit(42, SurfaceCategory::WorldDynamic, true)),
            &state.ignore,
        );
        assert_eq!(again, Contact::NoContact);
    }

    #[test]
    fn test_pass_through_on_final_frame_still_completes() {
        let mut state = straight_flight();
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, 1.0) else {
            panic!("expected sweep");
        };
        let out = resolve_sweep(
            &mut state,
            desired,
            alpha,
            Contact::PassThrough { target: ActorId(5) },
            GRACE,
        )
        .unwrap();
        assert_eq!(out.destroyed_target, Some(ActorId(5)));
        assert_eq!(
            out.transition,
            Some(Transition::Terminated(TerminationCause::PathComplete))
        );
    }

    #[test]
    fn test_zero_duration_completes_first_tick() {
        let path = FlightPath::new(vec![DVec3::ZERO, DVec3::X]);
        let mut state = launch(path, 0.0).unwrap();
        let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, DT) else {
            panic!("expected sweep");
        };
        assert_eq!(alpha, 1.0);
        assert_eq!(desired, DVec3::X);
        let out = resolve_sweep(&mut state, desired, alpha, Contact::NoContact, GRACE).unwrap();
        assert_eq!(
            out.transition,
            Some(Transition::Terminated(TerminationCause::PathComplete))
        );
    }

    // ---- Settling ----

    #[test]
    fn test_settling_times_out_after_grace() {
        let mut state = straight_flight();
        state.mode = FlightMode::Settling;
        state.grace_remaining_secs = 1.0;
        assert_eq!(begin_tick(&mut state, 0.5), TickPlan::Passive);
        assert_eq!(begin_tick(&mut state, 0.4), TickPlan::Passive);
        assert_eq!(
            begin_tick(&mut state, 0.2),
            TickPlan::Terminate(TerminationCause::SettleTimeout)
        );
        assert_eq!(state.mode, FlightMode::Terminated);
        assert_eq!(state.termination, Some(TerminationCause::SettleTimeout));
    }

    #[test]
    fn test_zero_grace_terminates_next_tick() {
        let mut state = straight_flight();
        state.mode = FlightMode::Settling;
        state.grace_remaining_secs = 0.0;
        assert_eq!(
            begin_tick(&mut state, DT),
            TickPlan::Terminate(TerminationCause::SettleTimeout)
        );
    }

    #[test]
    fn test_settling_ignores_path_sweeps() {
        let mut state = straight_flight();
        state.mode = FlightMode::Settling;
        assert!(resolve_sweep(&mut state, DVec3::ONE, 0.5, Contact::NoContact, GRACE).is_none());
    }

    // ---- Passive contact ----

    #[test]
    fn test_physics_driven_blocking_settles() {
        let mut state = launch_unguided();
        let contact = Contact::Blocking {
            actor: ActorId(1),
            location: DVec3::new(0.0, 0.0, 12.0),
            normal: DVec3::Z,
        };
        let out = resolve_passive(&mut state, contact, GRACE).unwrap();
        assert!(out.blocked);
        assert_eq!(
            out.transition,
            Some(Transition::Settling {
                location: DVec3::new(0.0, 0.0, 12.0)
            })
        );
        assert_eq!(state.mode, FlightMode::Settling);
    }

    #[test]
    fn test_settling_blocking_does_not_restart_grace() {
        let mut state = launch_unguided();
        state.mode = FlightMode::Settling;
        state.grace_remaining_secs = 0.7;
        let contact = Contact::Blocking {
            actor: ActorId(1),
            location: DVec3::ZERO,
            normal: DVec3::Z,
        };
        let out = resolve_passive(&mut state, contact, GRACE).unwrap();
        assert!(out.blocked);
        assert!(out.transition.is_none());
        assert_eq!(state.grace_remaining_secs, 0.7);
    }

    #[test]
    fn test_passive_pass_through_destroys_target() {
        let mut state = launch_unguided();
        let out =
            resolve_passive(&mut state, Contact::PassThrough { target: ActorId(8) }, GRACE).unwrap();
        assert_eq!(out.destroyed_target, Some(ActorId(8)));
        assert!(!out.blocked);
        assert_eq!(state.mode, FlightMode::PhysicsDriven);
    }

    #[test]
    fn test_path_following_ignores_passive_contact() {
        let mut state = straight_flight();
        assert!(resolve_passive(&mut state, Contact::NoContact, GRACE).is_none());
    }

    // ---- Terminated is absorbing ----

    #[test]
    fn test_terminate_only_once() {
        let mut state = straight_flight();
        assert!(terminate(&mut state, TerminationCause::External));
        assert!(!terminate(&mut state, TerminationCause::PathComplete));
        assert_eq!(state.termination, Some(TerminationCause::External));
    }

    #[test]
    fn test_terminated_ignores_everything() {
        let mut state = straight_flight();
        terminate(&mut state, TerminationCause::OutOfBounds);
        let elapsed = state.elapsed_secs;

        assert_eq!(begin_tick(&mut state, DT), TickPlan::Idle);
        assert_eq!(state.elapsed_secs, elapsed);
        assert!(resolve_sweep(&mut state, DVec3::ONE, 1.0, Contact::NoContact, GRACE).is_none());
        let blocking = Contact::Blocking {
            actor: ActorId(1),
            location: DVec3::ZERO,
            normal: DVec3::Z,
        };
        assert!(resolve_passive(&mut state, blocking, GRACE).is_none());
        assert_eq!(state.mode, FlightMode::Terminated);
        assert!(state.ignore.is_empty());
    }

    // ---- Spin ----

    #[test]
    fn test_spin_wraps_and_stops_when_grounded() {
        let yaw = advance_spin(350.0, DEFAULT_SPIN_RATE_DEG, 0.05);
        assert!((yaw - 26.0).abs() < 1e-9);
        assert!(spins(FlightMode::FollowingPath));
        assert!(spins(FlightMode::PhysicsDriven));
        assert!(!spins(FlightMode::Settling));
        assert!(!spins(FlightMode::Terminated));
    }

    // ---- Full flight over a generated path ----

    #[test]
    fn test_generated_flight_returns_to_origin() {
        let origin = DVec3::new(0.0, 0.0, 96.0);
        let params = TrajectoryParams {
            outward_distance: DEFAULT_OUTWARD_DISTANCE,
            curve_radius: DEFAULT_CURVE_RADIUS,
            sample_count: DEFAULT_SAMPLE_COUNT,
        };
        let path = generate(origin, &AimBasis::from_forward(DVec3::X), &params);
        let mut state = launch(path, DEFAULT_TOTAL_FLIGHT_TIME).unwrap();

        let mut ticks = 0;
        let mut last = origin;
        let mut farthest: f64 = 0.0;
        loop {
            ticks += 1;
            let TickPlan::Sweep { desired, alpha } = begin_tick(&mut state, DT) else {
                panic!("expected sweep on tick {ticks}");
            };
            let out = resolve_sweep(&mut state, desired, alpha, Contact::NoContact, GRACE).unwrap();
            last = out.position;
            farthest = farthest.max((last - origin).length());
            if out.transition.is_some() {
                break;
            }
            assert!(ticks < 1000, "flight never completed");
        }
        // 2.5 s at 60 Hz, give or take float accumulation.
        assert!((150..=151).contains(&ticks), "ticks = {ticks}");
        assert!((last - origin).length() < 1e-6);
        assert!(farthest > 990.0);
    }
}
