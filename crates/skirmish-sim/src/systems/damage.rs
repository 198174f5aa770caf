//! Damage application against the target's Health component.

use hecs::World;
use tracing::info;

use skirmish_core::events::CombatEvent;
use skirmish_core::types::Health;

/// Apply `amount` to `entity`'s health, flooring at zero.
///
/// Returns `(applied, remaining)` or `None` when the entity has no health.
/// Emits `TargetDefeated` on the step health first reaches zero.
pub fn apply(
    world: &mut World,
    entity: hecs::Entity,
    amount: f64,
    events: &mut Vec<CombatEvent>,
) -> Option<(f64, f64)> {
    let mut health = world.get::<&mut Health>(entity).ok()?;
    let was_alive = !health.is_depleted();
    let applied = health.apply_damage(amount);

    if was_alive && health.is_depleted() {
        info!("target defeated");
        events.push(CombatEvent::TargetDefeated);
    }

    Some((applied, health.current))
}
