//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `command_tx` is `None` until the simulation starts
/// - `latest_snapshot` and `pending_events` are shared with the game loop thread
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Combat events from every frame since the host last took them.
    pub pending_events: Arc<Mutex<Vec<CombatEvent>>>,
    /// Handle of the running game loop, joined on shutdown.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            pending_events: Arc::new(Mutex::new(Vec::new())),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop has been started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }
}
