//! Frame clock: turns host frame timestamps into step deltas.

/// Derives elapsed milliseconds between successive frame callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp. The first call only sets the baseline and
    /// returns `None`; later calls return the non-negative delta.
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<f64> {
        if !timestamp_ms.is_finite() {
            return None;
        }
        let delta = self
            .previous_ms
            .map(|previous| (timestamp_ms - previous).max(0.0));
        self.previous_ms = Some(match self.previous_ms {
            Some(previous) => previous.max(timestamp_ms),
            None => timestamp_ms,
        });
        delta
    }

    /// Forget the baseline so the next frame starts a fresh interval.
    pub fn reset(&mut self) {
        self.previous_ms = None;
    }
}
