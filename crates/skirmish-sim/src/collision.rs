//! Circle overlap tests against an entity's bounding circle.

use skirmish_core::constants::ENTITY_SIZE;
use skirmish_core::kinematics;
use skirmish_core::types::{Position, Vector2};

/// Bounding circle of an ENTITY_SIZE box: centered in the box, radius size/2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

impl Circle {
    pub fn of_entity(position: Position) -> Self {
        Self {
            center: position.center(),
            radius: ENTITY_SIZE / 2.0,
        }
    }
}

/// Whether `point` lies strictly inside `circle`.
pub fn point_in_circle(point: Vector2, circle: &Circle) -> bool {
    kinematics::distance(point, circle.center) < circle.radius
}

/// Whether two circles overlap (touching does not count).
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    kinematics::distance(a.center, b.center) < a.radius + b.radius
}

/// Whether two entities' centers are closer than `reach`.
pub fn within_reach(a: Position, b: Position, reach: f64) -> bool {
    kinematics::distance(a.center(), b.center()) < reach
}
