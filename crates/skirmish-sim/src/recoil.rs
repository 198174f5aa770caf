//! Recoil model: a knockback impulse spread linearly over RECOIL_DURATION,
//! plus the movement-speed modulation it causes.

use skirmish_core::components::RecoilState;
use skirmish_core::constants::*;
use skirmish_core::enums::WeaponType;
use skirmish_core::kinematics;
use skirmish_core::types::Vector2;

/// Fresh recoil for an attack fired along `aim_direction`.
pub fn from_aim(aim_direction: Vector2) -> RecoilState {
    RecoilState {
        impulse: aim_direction * RECOIL_FORCE,
        remaining_ms: RECOIL_DURATION,
    }
}

/// Displacement applied this step by an active recoil.
///
/// The per-step share is `dt / RECOIL_DURATION` of the impulse regardless of
/// how much time is left, so the final step can slightly overshoot.
pub fn displacement(recoil: &RecoilState, weapon: WeaponType, dt: f64) -> Vector2 {
    recoil.impulse * weapon.recoil_sign() * (dt / RECOIL_DURATION)
}

/// Consume `dt` of recoil time. Returns `None` once the recoil is spent.
pub fn decay(recoil: RecoilState, dt: f64) -> Option<RecoilState> {
    let remaining_ms = (recoil.remaining_ms - dt).max(0.0);
    if remaining_ms > 0.0 {
        Some(RecoilState {
            remaining_ms,
            ..recoil
        })
    } else {
        None
    }
}

/// Movement speed multiplier for a unit `direction` under `recoil`.
///
/// Moving with the impulse (cosine > 0.5) is faster, against it (< -0.5)
/// slower. No recoil or no movement leaves the speed unchanged.
pub fn speed_factor(recoil: Option<&RecoilState>, direction: Vector2) -> f64 {
    let Some(recoil) = recoil else {
        return 1.0;
    };
    if recoil.remaining_ms <= 0.0 || direction == Vector2::ZERO {
        return 1.0;
    }
    let cosine = kinematics::alignment_cosine(direction, recoil.impulse);
    if cosine > RECOIL_ALIGNED_COSINE {
        RECOIL_ALIGNED_SPEED_FACTOR
    } else if cosine < -RECOIL_ALIGNED_COSINE {
        RECOIL_OPPOSED_SPEED_FACTOR
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_aim_scales_impulse() {
        let recoil = from_aim(Vector2::new(0.0, 1.0));
        assert_eq!(recoil.impulse, Vector2::new(0.0, RECOIL_FORCE));
        assert_eq!(recoil.remaining_ms, RECOIL_DURATION);
    }

    #[test]
    fn test_displacement_sign_by_weapon() {
        let recoil = from_aim(Vector2::new(1.0, 0.0));
        let ranged = displacement(&recoil, WeaponType::Ranged, 20.0);
        let melee = displacement(&recoil, WeaponType::Melee, 20.0);
        assert!((ranged.x + 0.5).abs() < 1e-12, "ranged kicks back, got {ranged}");
        assert!((melee.x - 0.5).abs() < 1e-12, "melee lunges forward, got {melee}");
    }

    #[test]
    fn test_full_recoil_moves_by_force() {
        let mut recoil = Some(from_aim(Vector2::new(1.0, 0.0)));
        let mut total = Vector2::ZERO;
        while let Some(r) = recoil {
            total += displacement(&r, WeaponType::Melee, 10.0);
            recoil = decay(r, 10.0);
        }
        assert!((total.x - RECOIL_FORCE).abs() < 1e-9);
    }

    #[test]
    fn test_decay_clears_at_zero() {
        let recoil = from_aim(Vector2::new(1.0, 0.0));
        let recoil = decay(recoil, 150.0).unwrap();
        assert!((recoil.remaining_ms - 50.0).abs() < 1e-12);
        assert!(decay(recoil, 80.0).is_none());
    }

    #[test]
    fn test_speed_factor() {
        let recoil = RecoilState {
            impulse: Vector2::new(-RECOIL_FORCE, 0.0),
            remaining_ms: 100.0,
        };
        let left = Vector2::new(-1.0, 0.0);
        let right = Vector2::new(1.0, 0.0);
        let up = Vector2::new(0.0, -1.0);
        assert_eq!(speed_factor(Some(&recoil), left), 1.5);
        assert_eq!(speed_factor(Some(&recoil), right), 0.5);
        assert_eq!(speed_factor(Some(&recoil), up), 1.0);
        assert_eq!(speed_factor(None, left), 1.0);
        assert_eq!(speed_factor(Some(&recoil), Vector2::ZERO), 1.0);
    }

    #[test]
    fn test_speed_factor_diagonal() {
        // cos(45°) ≈ 0.707 > 0.5
        let recoil = from_aim(Vector2::new(1.0, 0.0));
        let diagonal = Vector2::new(1.0, 1.0).normalize();
        assert_eq!(speed_factor(Some(&recoil), diagonal), 1.5);
    }
}
