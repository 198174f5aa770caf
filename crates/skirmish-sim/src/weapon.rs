//! Weapon controller: owns the chosen weapon, enforces the shared cooldown,
//! and dispatches triggers to the projectile or melee system.

use hecs::World;
use tracing::debug;

use skirmish_core::components::{MeleeAttackState, RecoilState};
use skirmish_core::constants::COOLDOWN_DURATION;
use skirmish_core::enums::WeaponType;
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{Vector2, Viewport};

use crate::recoil;
use crate::systems::{melee, projectiles};

/// Per-weapon state. Projectiles themselves live in the ECS world.
#[derive(Debug, Clone, PartialEq)]
pub enum Weapon {
    Ranged { next_projectile_id: u32 },
    Melee { swing: Option<MeleeAttackState> },
}

impl Weapon {
    pub fn new(weapon_type: WeaponType) -> Self {
        match weapon_type {
            WeaponType::Ranged => Weapon::Ranged {
                next_projectile_id: 0,
            },
            WeaponType::Melee => Weapon::Melee { swing: None },
        }
    }

    pub fn weapon_type(&self) -> WeaponType {
        match self {
            Weapon::Ranged { .. } => WeaponType::Ranged,
            Weapon::Melee { .. } => WeaponType::Melee,
        }
    }
}

/// What the weapon system needs to know about the world for one step.
pub struct StepContext<'a> {
    pub world: &'a mut World,
    pub player: hecs::Entity,
    pub target: hecs::Entity,
    pub viewport: Viewport,
    pub despawn_buffer: &'a mut Vec<hecs::Entity>,
    pub events: &'a mut Vec<CombatEvent>,
}

#[derive(Debug, Clone)]
pub struct WeaponController {
    weapon: Weapon,
    cooldown_ms: f64,
}

impl WeaponController {
    pub fn new(weapon_type: WeaponType) -> Self {
        Self {
            weapon: Weapon::new(weapon_type),
            cooldown_ms: 0.0,
        }
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon.weapon_type()
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    /// The active melee swing, if any.
    pub fn swing(&self) -> Option<&MeleeAttackState> {
        match &self.weapon {
            Weapon::Melee { swing } => swing.as_ref(),
            Weapon::Ranged { .. } => None,
        }
    }

    /// Attempt an attack from `origin` along `aim_direction`.
    ///
    /// Does nothing while the cooldown is running. On success spawns the
    /// projectile or starts the swing, installs a fresh recoil, and restarts
    /// the cooldown. Returns whether the attack went off.
    pub fn trigger(
        &mut self,
        world: &mut World,
        origin: Vector2,
        aim_direction: Vector2,
        recoil_state: &mut Option<RecoilState>,
        events: &mut Vec<CombatEvent>,
    ) -> bool {
        if self.cooldown_ms > 0.0 {
            debug!(cooldown_ms = self.cooldown_ms, "trigger ignored during cooldown");
            return false;
        }

        events.push(CombatEvent::AttackTriggered {
            weapon: self.weapon_type(),
        });

        match &mut self.weapon {
            Weapon::Ranged { next_projectile_id } => {
                projectiles::spawn(world, origin, aim_direction, *next_projectile_id);
                *next_projectile_id = next_projectile_id.wrapping_add(1);
            }
            Weapon::Melee { swing } => {
                *swing = Some(melee::start());
                events.push(CombatEvent::MeleeStarted);
            }
        }

        *recoil_state = Some(recoil::from_aim(aim_direction));
        self.cooldown_ms = COOLDOWN_DURATION;
        true
    }

    /// Advance the active weapon system by `dt`.
    pub fn advance(&mut self, ctx: StepContext<'_>, dt: f64) {
        match &mut self.weapon {
            Weapon::Ranged { .. } => {
                projectiles::run(
                    ctx.world,
                    ctx.target,
                    ctx.viewport,
                    dt,
                    ctx.despawn_buffer,
                    ctx.events,
                );
            }
            Weapon::Melee { swing } => {
                melee::run(ctx.world, swing, ctx.player, ctx.target, dt, ctx.events);
            }
        }
    }

    /// Count the cooldown down by `dt`, flooring at zero.
    pub fn tick_cooldown(&mut self, dt: f64) {
        if self.cooldown_ms > 0.0 {
            self.cooldown_ms = (self.cooldown_ms - dt).max(0.0);
        }
    }
}
