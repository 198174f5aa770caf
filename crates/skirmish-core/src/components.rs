//! ECS components for hecs entities, plus the per-session attack state
//! the engine owns directly.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Vector2;

/// Marks the user-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks the stationary entity being attacked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// A live ranged projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique per session, assigned in spawn order.
    pub id: u32,
    /// Projectile center (pixels).
    pub position: Vector2,
    /// Unit travel direction. Speed is applied during integration.
    pub direction: Vector2,
}

/// Active knockback on the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoilState {
    /// Aim direction at trigger time scaled by RECOIL_FORCE.
    pub impulse: Vector2,
    /// Milliseconds until the recoil is spent.
    pub remaining_ms: f64,
}

/// An in-progress melee swing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeAttackState {
    /// Milliseconds left in the swing. May dip below zero on the final step.
    pub remaining_ms: f64,
    /// 0 at start, 1 at the end of the swing.
    pub progress: f64,
}
