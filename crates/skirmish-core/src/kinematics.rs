//! Vector helpers shared by every physics system.
//!
//! Thin wrappers over glam that make the degenerate (zero-length) cases
//! explicit so no NaN reaches a position or velocity.

use crate::types::Vector2;

/// Unit vector in the direction of `v`, or `None` when `v` has no direction.
pub fn normalize(v: Vector2) -> Option<Vector2> {
    v.try_normalize()
}

/// Unit vector in the direction of `v`, or zero when `v` has no direction.
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    v.normalize_or_zero()
}

pub fn distance(a: Vector2, b: Vector2) -> f64 {
    a.distance(b)
}

pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.dot(b)
}

/// Cosine of the angle between a unit `direction` and an arbitrary `reference`.
///
/// Returns 0 when `reference` has zero length.
pub fn alignment_cosine(direction: Vector2, reference: Vector2) -> f64 {
    let magnitude = reference.length();
    if magnitude > 0.0 && magnitude.is_finite() {
        dot(direction, reference) / magnitude
    } else {
        0.0
    }
}

/// Screen-space heading of a direction in radians (atan2(y, x)).
pub fn heading(direction: Vector2) -> f64 {
    direction.y.atan2(direction.x)
}
