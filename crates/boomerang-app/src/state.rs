//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use boomerang_core::commands::PlayerCommand;
use boomerang_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handles the host keeps on a running game loop.
pub struct LoopHandle {
    /// Forwards commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Every snapshot the loop produces, in tick order.
    pub snapshot_rx: mpsc::Receiver<GameStateSnapshot>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: SharedSnapshot,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward a player command. Returns `false` once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Stop the loop and wait for the thread to finish. Returns the last
    /// snapshot it produced.
    pub fn shutdown(self) -> Option<GameStateSnapshot> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        // Unblocks a loop waiting on a full snapshot channel.
        drop(self.snapshot_rx);
        let _ = self.thread.join();
        self.latest_snapshot.lock().ok().and_then(|mut lock| lock.take())
    }
}
