//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{ENTITY_SIZE, MAX_HEALTH};

/// 2D vector in viewport space (pixels, +x right, +y down).
pub type Vector2 = glam::DVec2;

/// Top-left corner of an entity's bounding box (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Current and maximum health of a combat entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Bounds of the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated steps.
    pub frame: u64,
    /// Simulated milliseconds since the session started playing.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Center of an ENTITY_SIZE box anchored at this corner.
    pub fn center(self) -> Vector2 {
        self.to_vec2() + Vector2::splat(ENTITY_SIZE / 2.0)
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Health {
    pub fn full() -> Self {
        Self {
            current: MAX_HEALTH,
            max: MAX_HEALTH,
        }
    }

    /// Subtract damage, flooring at zero. Returns the damage actually applied.
    /// Negative or non-finite amounts are ignored.
    pub fn apply_damage(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.current;
        self.current = (self.current - amount).max(0.0);
        before - self.current
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Fraction of max health remaining, in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a box of side `size` so it stays fully inside the viewport.
    /// A viewport smaller than the box pins it to the origin.
    pub fn clamp_box(&self, corner: Vector2, size: f64) -> Vector2 {
        let max_x = (self.width - size).max(0.0);
        let max_y = (self.height - size).max(0.0);
        Vector2::new(corner.x.clamp(0.0, max_x), corner.y.clamp(0.0, max_y))
    }

    /// Whether a point lies within the viewport grown by `margin` on every side.
    pub fn contains_with_margin(&self, point: Vector2, margin: f64) -> bool {
        point.x + margin > 0.0
            && point.x - margin < self.width
            && point.y + margin > 0.0
            && point.y - margin < self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_VIEWPORT_WIDTH,
            crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

impl SimTime {
    /// Advance by one step of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += dt_ms;
    }
}
