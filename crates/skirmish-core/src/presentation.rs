//! Pure functions the presentation layer uses to turn snapshot values
//! into visual transforms. Nothing here feeds back into the simulation.

use crate::constants::*;
use crate::enums::WeaponType;
use crate::kinematics;
use crate::types::{Health, Vector2};

/// Length and width of the weapon sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDimensions {
    pub length: f64,
    pub width: f64,
}

pub fn weapon_dimensions(weapon: WeaponType) -> WeaponDimensions {
    match weapon {
        WeaponType::Melee => WeaponDimensions {
            length: MELEE_WEAPON_LENGTH,
            width: MELEE_WEAPON_WIDTH,
        },
        WeaponType::Ranged => WeaponDimensions {
            length: RANGED_WEAPON_LENGTH,
            width: RANGED_WEAPON_WIDTH,
        },
    }
}

/// Triangular swing envelope: 0 → MELEE_SWING_DISTANCE over the first half
/// of the swing, back to 0 over the second half.
pub fn swing_offset(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    let envelope = if progress <= 0.5 {
        progress * 2.0
    } else {
        (1.0 - progress) * 2.0
    };
    MELEE_SWING_DISTANCE * envelope
}

/// Swing displacement as a vector along the aim direction.
pub fn swing_offset_vector(aim_direction: Vector2, progress: f64) -> Vector2 {
    aim_direction * swing_offset(progress)
}

/// Where the weapon sprite starts: on the entity rim, along the aim, pushed
/// out by the current swing.
pub fn weapon_origin(center: Vector2, aim_direction: Vector2, swing_progress: Option<f64>) -> Vector2 {
    let rim = center + aim_direction * (ENTITY_SIZE / 2.0);
    match swing_progress {
        Some(progress) => rim + swing_offset_vector(aim_direction, progress),
        None => rim,
    }
}

/// Width of the health bar drawn above an entity.
pub fn health_bar_width(health: &Health) -> f64 {
    ENTITY_SIZE * health.fraction()
}

/// Sprite rotation for a projectile or weapon (radians).
pub fn rotation(direction: Vector2) -> f64 {
    kinematics::heading(direction)
}

/// Cooldown label in seconds with one decimal, or `None` when ready.
pub fn cooldown_label(cooldown_remaining_ms: f64) -> Option<String> {
    if cooldown_remaining_ms > 0.0 {
        Some(format!("{:.1}s", cooldown_remaining_ms / 1000.0))
    } else {
        None
    }
}
