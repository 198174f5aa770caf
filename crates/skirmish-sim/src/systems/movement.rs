//! Player movement: recoil displacement, WASD movement with recoil speed
//! modulation, then clamping to the viewport.

use hecs::World;

use skirmish_core::components::RecoilState;
use skirmish_core::constants::{ENTITY_SIZE, PLAYER_SPEED};
use skirmish_core::enums::WeaponType;
use skirmish_core::kinematics;
use skirmish_core::types::{Position, Viewport};

use crate::input::InputState;
use crate::recoil;

/// Update the player's position for one step of `dt` milliseconds.
///
/// The speed modulation uses the recoil as it stood at the start of the
/// step, so the step that spends the recoil still feels it.
pub fn run(
    world: &mut World,
    player: hecs::Entity,
    input: &InputState,
    recoil_state: &mut Option<RecoilState>,
    weapon: WeaponType,
    viewport: Viewport,
    dt: f64,
) {
    let Ok(mut position) = world.get::<&mut Position>(player) else {
        return;
    };

    let recoil_at_start = *recoil_state;
    let mut corner = position.to_vec2();

    // 1. Recoil displacement and decay
    if let Some(active) = recoil_at_start {
        corner += recoil::displacement(&active, weapon, dt);
        *recoil_state = recoil::decay(active, dt);
    }

    // 2. Requested direction
    let direction = kinematics::normalize_or_zero(input.movement_axis());

    // 3-4. Modulated speed and displacement
    let speed = PLAYER_SPEED * recoil::speed_factor(recoil_at_start.as_ref(), direction);
    corner += direction * speed * dt;

    // 5. Bounds
    *position = Position::from(viewport.clamp_box(corner, ENTITY_SIZE));
}
