//! Continuous rotation from bounded bearing samples.
//!
//! A bearing reported as 350° followed by 10° is a 20° clockwise turn, not a
//! 340° swing back. [`AngleUnwrapper`] keeps a cumulative angle that always
//! continues along the shorter arc, so a rotation transform driven by it never
//! snaps backward through north.

/// Reduce any angle to the half-open range [0°, 360°).
pub fn normalize_degrees(deg: f64) -> f64 {
    let m = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if m >= 360.0 {
        0.0
    } else {
        m
    }
}

/// Stateful shortest-arc unwrapper, one per tracked quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleUnwrapper {
    cumulative: f64,
}

impl AngleUnwrapper {
    /// Seed the unwrapper. The first value is taken as-is with no correction;
    /// a non-finite seed starts at 0.
    pub fn new(seed: f64) -> Self {
        let cumulative = if seed.is_finite() { seed } else { 0.0 };
        Self { cumulative }
    }

    /// Feed a new raw sample and return the display angle.
    ///
    /// The returned value differs from the previous one by at most 180° and is
    /// congruent to `raw` modulo 360. A delta of exactly ±180° is left as is.
    /// Non-finite samples are ignored.
    pub fn update(&mut self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return self.cumulative;
        }
        let prev_mod = normalize_degrees(self.cumulative);
        let mut delta = normalize_degrees(raw) - prev_mod;
        if delta > 180.0 {
            delta -= 360.0;
        }
        if delta < -180.0 {
            delta += 360.0;
        }
        self.cumulative += delta;
        self.cumulative
    }

    /// Last emitted display angle (unbounded).
    pub fn cumulative(&self) -> f64 {
        self.cumulative
    }

    pub fn bearing(&self) -> f64 {
        normalize_degrees(self.cumulative)
    }
}
