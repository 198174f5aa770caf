//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;

/// Something that happened during the last step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A trigger passed the cooldown check.
    AttackTriggered { weapon: WeaponType },
    /// A projectile struck the target and was removed.
    ProjectileHit {
        projectile_id: u32,
        damage: f64,
        target_health: f64,
    },
    /// A projectile left the viewport and was removed.
    ProjectileExpired { projectile_id: u32 },
    /// A melee swing began.
    MeleeStarted,
    /// A melee swing dealt damage this step.
    MeleeContact { damage: f64, target_health: f64 },
    /// The melee swing ended.
    MeleeFinished,
    /// Target health reached zero.
    TargetDefeated,
}
