//! Simulation engine, the core of the sandbox.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of session
//! state, processes queued player commands, runs all systems in a fixed
//! order, and produces `GameStateSnapshot`s. Completely headless, so a
//! session can be driven step by step in tests.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::{debug, info, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::RecoilState;
use skirmish_core::constants::{INITIAL_AIM, PLAYER_START, TARGET_START};
use skirmish_core::enums::{SessionPhase, WeaponType};
use skirmish_core::errors::CommandError;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::{Position, SimTime, Vector2, Viewport};

use crate::clock::FrameClock;
use crate::input::InputState;
use crate::systems;
use crate::systems::snapshot::SnapshotInput;
use crate::weapon::{StepContext, WeaponController};
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Initial playable area. The host may resize it later.
    pub viewport: Viewport,
    /// Top-left corner of the player at session start.
    pub player_start: Position,
    /// Top-left corner of the target. The target never moves.
    pub target_start: Position,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            player_start: Position::new(PLAYER_START.0, PLAYER_START.1),
            target_start: Position::new(TARGET_START.0, TARGET_START.1),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    player: Entity,
    target: Entity,
    time: SimTime,
    phase: SessionPhase,
    viewport: Viewport,
    clock: FrameClock,
    input: InputState,
    aim_direction: Vector2,
    recoil: Option<RecoilState>,
    controller: Option<WeaponController>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<CombatEvent>,
}

impl SimulationEngine {
    /// Create a new engine in the weapon-select phase.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world, config.player_start);
        let target = world_setup::spawn_target(&mut world, config.target_start);

        Self {
            world,
            player,
            target,
            time: SimTime::default(),
            phase: SessionPhase::default(),
            viewport: config.viewport,
            clock: FrameClock::new(),
            input: InputState::new(),
            aim_direction: Vector2::new(INITIAL_AIM.0, INITIAL_AIM.1),
            recoil: None,
            controller: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Host frame callback. The frame clock turns `timestamp_ms` into the
    /// step delta; the first frame after weapon selection only sets the
    /// baseline.
    pub fn frame(&mut self, timestamp_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Playing {
            if let Some(dt) = self.clock.advance(timestamp_ms) {
                self.advance(dt);
            }
        }

        self.snapshot()
    }

    /// Advance the simulation by an explicit `dt_ms` and return the snapshot.
    pub fn tick(&mut self, dt_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Playing {
            self.advance(dt_ms);
        }

        self.snapshot()
    }

    /// Apply one command immediately, bypassing the queue.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::SelectWeapon { weapon } => self.select_weapon(weapon),
            PlayerCommand::KeyDown { key } => {
                if key.is_empty() {
                    return Err(CommandError::EmptyKey);
                }
                self.input.press(&key);
                Ok(())
            }
            PlayerCommand::KeyUp { key } => {
                if key.is_empty() {
                    return Err(CommandError::EmptyKey);
                }
                self.input.release(&key);
                Ok(())
            }
            PlayerCommand::PointerMoved { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(CommandError::NonFinitePointer { x, y });
                }
                self.input.set_pointer(Vector2::new(x, y));
                Ok(())
            }
            PlayerCommand::Trigger => {
                self.trigger();
                Ok(())
            }
            PlayerCommand::ResizeViewport { width, height } => {
                let valid = |v: f64| v.is_finite() && v > 0.0;
                if !valid(width) || !valid(height) {
                    return Err(CommandError::InvalidViewport { width, height });
                }
                self.viewport = Viewport::new(width, height);
                debug!(width, height, "viewport resized");
                Ok(())
            }
        }
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The chosen weapon, once selected.
    pub fn weapon_type(&self) -> Option<WeaponType> {
        self.controller.as_ref().map(|c| c.weapon_type())
    }

    pub fn aim_direction(&self) -> Vector2 {
        self.aim_direction
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.controller.as_ref().map_or(0.0, |c| c.cooldown_ms())
    }

    pub fn recoil(&self) -> Option<&RecoilState> {
        self.recoil.as_ref()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn target_entity(&self) -> Entity {
        self.target
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Install a recoil directly (for tests that isolate movement).
    #[cfg(test)]
    pub fn set_recoil(&mut self, recoil: Option<RecoilState>) {
        self.recoil = recoil;
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(e) = self.handle_command(command) {
                warn!(error = %e, "command rejected");
            }
        }
    }

    fn select_weapon(&mut self, weapon: WeaponType) -> Result<(), CommandError> {
        if let Some(controller) = &self.controller {
            return Err(CommandError::WeaponAlreadySelected {
                current: controller.weapon_type(),
            });
        }
        self.controller = Some(WeaponController::new(weapon));
        self.phase = SessionPhase::Playing;
        self.clock.reset();
        info!(?weapon, "weapon selected; session playing");
        Ok(())
    }

    fn trigger(&mut self) {
        if self.phase != SessionPhase::Playing {
            debug!("trigger ignored before weapon selection");
            return;
        }
        let Ok(origin) = self.world.get::<&Position>(self.player).map(|p| p.center()) else {
            return;
        };
        if let Some(controller) = self.controller.as_mut() {
            controller.trigger(
                &mut self.world,
                origin,
                self.aim_direction,
                &mut self.recoil,
                &mut self.events,
            );
        }
    }

    /// Run one step: movement → aim → weapon system → cooldown.
    fn advance(&mut self, dt_ms: f64) {
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        // 1. Player movement (recoil, keys, clamping)
        systems::movement::run(
            &mut self.world,
            self.player,
            &self.input,
            &mut self.recoil,
            controller.weapon_type(),
            self.viewport,
            dt,
        );
        // 2. Aim from the updated position
        systems::aim::run(
            &self.world,
            self.player,
            self.input.pointer_position(),
            &mut self.aim_direction,
        );
        // 3. Active weapon system
        controller.advance(
            StepContext {
                world: &mut self.world,
                player: self.player,
                target: self.target,
                viewport: self.viewport,
                despawn_buffer: &mut self.despawn_buffer,
                events: &mut self.events,
            },
            dt,
        );
        // 4. Cooldown
        controller.tick_cooldown(dt);

        self.time.advance(dt);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInput {
                time: self.time,
                phase: self.phase,
                viewport: self.viewport,
                player: self.player,
                target: self.target,
                aim_direction: self.aim_direction,
                controller: self.controller.as_ref(),
                recoil: self.recoil.as_ref(),
                events: std::mem::take(&mut self.events),
            },
        )
    }
}
