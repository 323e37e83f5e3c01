//! Closed and open ranges over `f64`.

/// The range `[min, max]`, used for accepted hit distances and for
/// clamping output channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min < x < max`; hit tests use this so a root on either bound is rejected.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    /// Shrink (or grow) the upper bound, keeping the lower one.
    pub fn with_max(self, max: f64) -> Interval {
        Interval { max, ..self }
    }
}
