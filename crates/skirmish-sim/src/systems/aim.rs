//! Aim direction: unit vector from the player's center to the pointer.

use hecs::World;

use skirmish_core::kinematics;
use skirmish_core::types::{Position, Vector2};

/// Recompute `aim_direction` from the player's current position.
///
/// When the pointer sits exactly on the player center the previous
/// direction is kept.
pub fn run(world: &World, player: hecs::Entity, pointer: Vector2, aim_direction: &mut Vector2) {
    let Ok(position) = world.get::<&Position>(player) else {
        return;
    };
    if let Some(direction) = kinematics::normalize(pointer - position.center()) {
        *aim_direction = direction;
    }
}
