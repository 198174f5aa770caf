//! Projectile system: spawn, integrate, cull out-of-bounds, resolve hits.

use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::Projectile;
use skirmish_core::constants::{BULLET_DAMAGE, BULLET_LENGTH, BULLET_SPEED};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{Position, Vector2, Viewport};

use crate::collision::{self, Circle};
use crate::systems::damage;

/// Spawn a projectile at `origin` travelling along the unit `direction`.
pub fn spawn(world: &mut World, origin: Vector2, direction: Vector2, id: u32) -> Entity {
    world.spawn((Projectile {
        id,
        position: origin,
        direction,
    },))
}

/// Advance every projectile by `dt`, then remove those that left the
/// viewport or struck the target. Each hit damages the target independently.
pub fn run(
    world: &mut World,
    target: Entity,
    viewport: Viewport,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    despawn_buffer.clear();

    let target_circle = world
        .get::<&Position>(target)
        .ok()
        .map(|position| Circle::of_entity(*position));

    let mut hits: Vec<u32> = Vec::new();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.position += projectile.direction * BULLET_SPEED * dt;

        if !viewport.contains_with_margin(projectile.position, BULLET_LENGTH) {
            despawn_buffer.push(entity);
            events.push(CombatEvent::ProjectileExpired {
                projectile_id: projectile.id,
            });
            continue;
        }

        if let Some(circle) = &target_circle {
            if collision::point_in_circle(projectile.position, circle) {
                despawn_buffer.push(entity);
                hits.push(projectile.id);
            }
        }
    }

    for projectile_id in hits {
        // A spent target still absorbs the projectile, silently.
        let outcome = damage::apply(world, target, BULLET_DAMAGE, events);
        if let Some((applied, remaining)) = outcome.filter(|(applied, _)| *applied > 0.0) {
            debug!(projectile_id, damage = applied, target_health = remaining, "projectile hit");
            events.push(CombatEvent::ProjectileHit {
                projectile_id,
                damage: applied,
                target_health: remaining,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Number of live projectiles.
pub fn count(world: &World) -> usize {
    world.query::<&Projectile>().iter().count()
}
