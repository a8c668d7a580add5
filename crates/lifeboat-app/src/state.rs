//! Application state shared between the presenter and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use lifeboat_core::commands::PlayerCommand;
use lifeboat_core::state::EncounterSnapshot;

/// Commands sent from the presenter to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the encounter controller.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The game loop thread owns the controller. Everything it exposes goes
/// through the channel (inbound) or the snapshot slot (outbound).
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Snapshots the presenter has not consumed yet, merged into one.
    pub latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns `false` if no loop is
    /// listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Take everything the loop produced since the last call.
    pub fn take_snapshot(&self) -> Option<EncounterSnapshot> {
        self.latest_snapshot.lock().ok()?.take()
    }
}
