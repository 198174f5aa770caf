//! Game state snapshot: the complete visible state sent to the presentation layer each step.

use serde::{Deserialize, Serialize};

use crate::enums::{SessionPhase, WeaponType};
use crate::events::CombatEvent;
use crate::types::{Health, Position, SimTime, Vector2, Viewport};

/// Complete read-only state handed to the presentation layer after each step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub viewport: Viewport,
    pub player: PlayerView,
    pub target: TargetView,
    pub projectiles: Vec<ProjectileView>,
    /// Milliseconds before another trigger is accepted.
    pub cooldown_remaining_ms: f64,
    pub events: Vec<CombatEvent>,
}

/// The controllable entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: Health,
    /// Unit vector from the player center toward the pointer.
    pub aim_direction: Vector2,
    /// `None` until the weapon has been chosen.
    pub weapon: Option<WeaponType>,
    pub melee: Option<MeleeView>,
    /// Whether a recoil impulse is still being applied.
    pub recoiling: bool,
}

/// An active melee swing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MeleeView {
    pub progress: f64,
    pub remaining_ms: f64,
    /// Weapon tip displacement along the aim direction (pixels).
    pub swing_offset: f64,
}

/// The stationary entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub position: Position,
    pub health: Health,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    /// Projectile center (pixels).
    pub position: Vector2,
    /// Unit travel direction.
    pub direction: Vector2,
}
