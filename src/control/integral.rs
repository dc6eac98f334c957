// ---------------------------------------------------------------------------
// Integral accumulators with reset-on-threshold anti-windup
// ---------------------------------------------------------------------------

/// Errors at or above this value clear the accumulator.
pub const RESET_THRESHOLD: f64 = 1.0;

/// Running sum of a signed error.
///
/// The comparison is against the signed error, not its magnitude: any
/// error `>= RESET_THRESHOLD` clears the sum, while arbitrarily large
/// negative errors keep accumulating.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResetIntegral {
    value: f64,
}

impl ResetIntegral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick's error in and return the new value.
    pub fn accumulate(&mut self, error: f64) -> f64 {
        if error < RESET_THRESHOLD {
            self.value += error;
        } else {
            self.value = 0.0;
        }
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

/// Integral values handed to a controller for one correction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntegralTerms {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// The three per-run accumulators owned by a simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrals {
    pub x: ResetIntegral,
    pub y: ResetIntegral,
    pub angle: ResetIntegral,
}

impl Integrals {
    pub fn terms(&self) -> IntegralTerms {
        IntegralTerms {
            x: self.x.value(),
            y: self.y.value(),
            angle: self.angle.value(),
        }
    }

    pub fn accumulate(&mut self, position_error_x: f64, position_error_y: f64, heading_error: f64) {
        self.x.accumulate(position_error_x);
        self.y.accumulate(position_error_y);
        self.angle.accumulate(heading_error);
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.angle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resets_exactly_at_threshold_crossings() {
        let mut acc = ResetIntegral::new();
        let trace: Vec<f64> = [0.5, 2.0, 0.3].iter().map(|&e| acc.accumulate(e)).collect();
        assert_eq!(trace, vec![0.5, 0.0, 0.3]);
    }

    #[test]
    fn threshold_itself_resets() {
        let mut acc = ResetIntegral::new();
        acc.accumulate(0.9);
        assert_eq!(acc.accumulate(1.0), 0.0);
    }

    #[test]
    fn large_negative_errors_keep_integrating() {
        let mut acc = ResetIntegral::new();
        acc.accumulate(-100.0);
        acc.accumulate(-250.0);
        assert_eq!(acc.value(), -350.0);
    }

    #[test]
    fn bundle_tracks_axes_independently() {
        let mut i = Integrals::default();
        i.accumulate(0.5, 3.0, -179.0);
        i.accumulate(0.25, 0.5, -178.0);
        let t = i.terms();
        assert_eq!(t.x, 0.75);
        assert_eq!(t.y, 0.5);
        assert_eq!(t.angle, -357.0);

        i.reset();
        assert_eq!(i.terms(), IntegralTerms::default());
    }
}
