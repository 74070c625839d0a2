//! Game loop thread: runs the simulation engine and publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive over an `mpsc` channel. Snapshots go out over a
//! bounded channel and are also stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use boomerang_core::constants::TICK_RATE;
use boomerang_core::state::GameStateSnapshot;
use boomerang_sim::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Snapshots the host may fall behind by before the loop waits for it.
const SNAPSHOT_BACKLOG: usize = 64;

/// How the loop is paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One tick per `TICK_DURATION` of wall-clock time.
    RealTime,
    /// Tick as fast as the host consumes snapshots.
    Unpaced,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig, pacing: Pacing) -> std::io::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::sync_channel::<GameStateSnapshot>(SNAPSHOT_BACKLOG);
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let thread = std::thread::Builder::new()
        .name("boomerang-game-loop".into())
        .spawn(move || {
            run_game_loop(config, pacing, command_rx, snapshot_tx, &shared);
        })?;

    Ok(LoopHandle {
        command_tx,
        snapshot_rx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown, or until either channel disconnects.
fn run_game_loop(
    config: SimConfig,
    pacing: Pacing,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::SyncSender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!(seed = config.seed, ?pacing, "game loop started");
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Publish to the host
        if snapshot_tx.send(snapshot).is_err() {
            debug!("snapshot receiver dropped");
            return;
        }

        // 5. Sleep until next tick
        if pacing == Pacing::RealTime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boomerang_core::commands::PlayerCommand;
    use boomerang_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRound))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Throw))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartRound)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Throw)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_applies_commands_and_shuts_down() {
        let handle = spawn_game_loop(SimConfig::default(), Pacing::Unpaced).unwrap();
        assert!(handle.send(PlayerCommand::StartRound));

        let mut active = false;
        for _ in 0..200 {
            let snap = handle.snapshot_rx.recv().unwrap();
            if snap.phase == GamePhase::Active {
                active = true;
                break;
            }
        }
        assert!(active, "round never started");

        let last = handle.shutdown().unwrap();
        assert_eq!(last.phase, GamePhase::Active);
        assert!(last.time.tick >= 1);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartRound);
        engine.queue_command(PlayerCommand::Throw);

        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
