//! Melee system: a timed swing that damages the target continuously while
//! it stays within reach.

use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::MeleeAttackState;
use skirmish_core::constants::{MELEE_ATTACK_DURATION, MELEE_DAMAGE_RATE, MELEE_REACH};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::Position;

use crate::collision;
use crate::systems::damage;

/// A fresh swing.
pub fn start() -> MeleeAttackState {
    MeleeAttackState {
        remaining_ms: MELEE_ATTACK_DURATION,
        progress: 0.0,
    }
}

/// Advance the active swing by `dt`.
///
/// A swing whose time ran out on the previous step is cleared here.
/// Otherwise progress moves forward and, if the target is in reach,
/// `MELEE_DAMAGE_RATE * dt` damage is applied.
pub fn run(
    world: &mut World,
    swing: &mut Option<MeleeAttackState>,
    player: Entity,
    target: Entity,
    dt: f64,
    events: &mut Vec<CombatEvent>,
) {
    let Some(state) = swing.as_mut() else {
        return;
    };

    if state.remaining_ms <= 0.0 {
        *swing = None;
        events.push(CombatEvent::MeleeFinished);
        return;
    }

    state.remaining_ms -= dt;
    state.progress = 1.0 - state.remaining_ms / MELEE_ATTACK_DURATION;

    let positions = (
        world.get::<&Position>(player).ok().map(|p| *p),
        world.get::<&Position>(target).ok().map(|p| *p),
    );
    let (Some(player_pos), Some(target_pos)) = positions else {
        return;
    };

    if collision::within_reach(player_pos, target_pos, MELEE_REACH) {
        let amount = MELEE_DAMAGE_RATE * dt;
        let outcome = damage::apply(world, target, amount, events);
        if let Some((applied, remaining)) = outcome.filter(|(applied, _)| *applied > 0.0) {
            debug!(damage = applied, target_health = remaining, "melee contact");
            events.push(CombatEvent::MeleeContact {
                damage: applied,
                target_health: remaining,
            });
        }
    }
}
