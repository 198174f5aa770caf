//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon behavior chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Fires projectiles; recoil kicks the shooter backward.
    Ranged,
    /// Swings in place; recoil lunges the attacker forward.
    Melee,
}

impl WeaponType {
    /// Sign applied to the recoil impulse when displacing the player.
    pub fn recoil_sign(self) -> f64 {
        match self {
            WeaponType::Ranged => -1.0,
            WeaponType::Melee => 1.0,
        }
    }
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the weapon choice. Nothing moves.
    #[default]
    WeaponSelect,
    /// Simulation running. Terminal for the session.
    Playing,
}
