//! Snapshot system: reads the ECS world and engine state into a GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use skirmish_core::components::{Projectile, RecoilState};
use skirmish_core::enums::SessionPhase;
use skirmish_core::events::CombatEvent;
use skirmish_core::presentation;
use skirmish_core::state::*;
use skirmish_core::types::{Health, Position, SimTime, Vector2, Viewport};

use crate::weapon::WeaponController;

/// Everything the snapshot needs besides the world.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub viewport: Viewport,
    pub player: hecs::Entity,
    pub target: hecs::Entity,
    pub aim_direction: Vector2,
    pub controller: Option<&'a WeaponController>,
    pub recoil: Option<&'a RecoilState>,
    pub events: Vec<CombatEvent>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, input: SnapshotInput<'_>) -> GameStateSnapshot {
    let (player_position, player_health) = read_entity(world, input.player);
    let (target_position, target_health) = read_entity(world, input.target);

    let melee = input
        .controller
        .and_then(|controller| controller.swing())
        .map(|swing| MeleeView {
            progress: swing.progress,
            remaining_ms: swing.remaining_ms,
            swing_offset: presentation::swing_offset(swing.progress),
        });

    GameStateSnapshot {
        time: input.time,
        phase: input.phase,
        viewport: input.viewport,
        player: PlayerView {
            position: player_position,
            health: player_health,
            aim_direction: input.aim_direction,
            weapon: input.controller.map(|controller| controller.weapon_type()),
            melee,
            recoiling: input.recoil.is_some(),
        },
        target: TargetView {
            position: target_position,
            health: target_health,
        },
        projectiles: build_projectiles(world),
        cooldown_remaining_ms: input
            .controller
            .map(|controller| controller.cooldown_ms())
            .unwrap_or(0.0),
        events: input.events,
    }
}

fn read_entity(world: &World, entity: hecs::Entity) -> (Position, Health) {
    let position = world
        .get::<&Position>(entity)
        .map(|p| *p)
        .unwrap_or_default();
    let health = world
        .get::<&Health>(entity)
        .map(|h| *h)
        .unwrap_or_default();
    (position, health)
}

/// Live projectiles in spawn order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<&Projectile>()
        .iter()
        .map(|(_, projectile)| ProjectileView {
            id: projectile.id,
            position: projectile.position,
            direction: projectile.direction,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
