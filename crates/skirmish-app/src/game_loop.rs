//! Game loop thread. Runs the simulation engine at the configured frame rate,
//! stores the latest snapshot for polling, and queues every frame's combat
//! events until the host takes them.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive over an `mpsc` channel and are queued into the engine;
//! each frame passes the wall-clock time since the loop started, so the
//! engine's frame clock derives the step delta the way a browser frame
//! callback would.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skirmish_core::events::CombatEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Oldest events are dropped past this many untaken events.
pub const MAX_PENDING_EVENTS: usize = 4096;

/// Where the game loop publishes its output.
#[derive(Clone, Default)]
pub struct LoopOutputs {
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub pending_events: Arc<Mutex<Vec<CombatEvent>>>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    frame_duration: Duration,
    outputs: LoopOutputs,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(config, frame_duration, cmd_rx, &outputs);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    frame_duration: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    outputs: &LoopOutputs,
) {
    let mut engine = SimulationEngine::new(config);
    let started = Instant::now();
    let mut next_frame_time = started;
    info!(?frame_duration, "game loop started");

    loop {
        // 1. Drain all pending commands
        if drain_commands(&cmd_rx, &mut engine) {
            info!(frames = engine.time().frame, "game loop stopped");
            return;
        }

        // 2. Run one frame at the current wall-clock time
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.frame(now_ms);

        // 3. Queue this frame's events, then store the snapshot for polling
        if !snapshot.events.is_empty() {
            if let Ok(mut pending) = outputs.pending_events.lock() {
                push_events(&mut pending, &snapshot.events);
            }
        }
        if let Ok(mut lock) = outputs.latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; the engine's clock absorbs the gap in one step
            debug!(behind = ?(now - next_frame_time), "frame pacing reset");
            next_frame_time = now;
        }
    }
}

/// Append `events`, keeping at most `MAX_PENDING_EVENTS`.
fn push_events(pending: &mut Vec<CombatEvent>, events: &[CombatEvent]) {
    pending.extend_from_slice(events);
    if pending.len() > MAX_PENDING_EVENTS {
        let overflow = pending.len() - MAX_PENDING_EVENTS;
        pending.drain(..overflow);
        debug!(dropped = overflow, "pending combat events overflowed");
    }
}

/// Move every pending command into the engine queue. Returns true when the
/// loop should stop.
fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return true,
            Err(mpsc::TryRecvError::Empty) => return false,
            Err(mpsc::TryRecvError::Disconnected) => return true,
        }
    }
}
