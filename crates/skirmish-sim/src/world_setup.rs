//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use skirmish_core::components::{Player, Target};
use skirmish_core::types::{Health, Position};

/// Spawn the controllable entity with full health.
pub fn spawn_player(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Player, position, Health::full()))
}

/// Spawn the stationary target with full health.
pub fn spawn_target(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Target, position, Health::full()))
}
