//! Host-facing handlers.
//!
//! These bridge a host (the scripted driver, or any embedder speaking JSON)
//! to the game loop thread via channels.

use std::fmt;

use tracing::info;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::game_loop::{self, LoopOutputs};
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug)]
pub enum HostError {
    AlreadyRunning,
    NotStarted,
    /// The game loop thread has exited.
    ChannelClosed,
    LockPoisoned,
    Spawn(std::io::Error),
    MalformedCommand(serde_json::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "simulation already running"),
            Self::NotStarted => write!(f, "simulation not started"),
            Self::ChannelClosed => write!(f, "game loop is no longer receiving commands"),
            Self::LockPoisoned => write!(f, "shared state lock poisoned"),
            Self::Spawn(e) => write!(f, "failed to spawn game loop: {e}"),
            Self::MalformedCommand(e) => write!(f, "malformed command: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::MalformedCommand(e) => Some(e),
            _ => None,
        }
    }
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: &AppConfig) -> Result<(), HostError> {
    let mut handle_lock = state.loop_handle.lock().map_err(|_| HostError::LockPoisoned)?;
    if handle_lock.is_some() {
        return Err(HostError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        config.sim_config(),
        config.frame_duration(),
        LoopOutputs {
            latest_snapshot: state.latest_snapshot.clone(),
            pending_events: state.pending_events.clone(),
        },
    )
    .map_err(HostError::Spawn)?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;
    *tx_lock = Some(cmd_tx);
    *handle_lock = Some(handle);

    info!(
        width = config.viewport.width,
        height = config.viewport.height,
        frame_rate = config.frame_rate,
        "simulation started"
    );
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| HostError::ChannelClosed),
        None => Err(HostError::NotStarted),
    }
}

/// Parse a JSON-encoded command (`{"type": "KeyDown", "key": "w"}`) and send it.
pub fn send_command_json(state: &AppState, json: &str) -> Result<(), HostError> {
    let command: PlayerCommand = serde_json::from_str(json).map_err(HostError::MalformedCommand)?;
    send_command(state, command)
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, HostError> {
    let lock = state.latest_snapshot.lock().map_err(|_| HostError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Take every combat event produced since the last call, oldest first.
///
/// Unlike the snapshot, which only carries the latest frame's events, this
/// sees events from frames the host never polled.
pub fn take_events(state: &AppState) -> Result<Vec<CombatEvent>, HostError> {
    let mut lock = state.pending_events.lock().map_err(|_| HostError::LockPoisoned)?;
    Ok(std::mem::take(&mut *lock))
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), HostError> {
    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| HostError::LockPoisoned)?
        .take()
        .ok_or(HostError::NotStarted)?;

    if let Some(tx) = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?.take() {
        // A closed channel means the loop already stopped.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    handle.join().map_err(|_| HostError::ChannelClosed)?;
    info!("simulation stopped");
    Ok(())
}
