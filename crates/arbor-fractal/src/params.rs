use crate::error::ParamError;

/// Ratio applied to a branch length at every level.
pub const DEFAULT_SHRINK_FACTOR: f32 = 0.7;

/// Branches shorter than this are not drawn.
pub const DEFAULT_MIN_LENGTH: f32 = 5.0;

/// Shape parameters for one tree.
///
/// `shrink_factor` and `min_length` are private so the termination invariant
/// (`0 < shrink_factor < 1`, `min_length > 0`) cannot be broken after
/// construction. The trunk length and angle are plain fields; the demo mutates
/// the angle every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParameters {
    /// Length of the first (trunk) segment.
    pub trunk_length: f32,
    /// Reference length for the color gradient. Usually equals `trunk_length`.
    pub max_length: f32,
    /// Rotation applied to each child branch, in degrees.
    pub angle_degrees: f32,

    shrink_factor: f32,
    min_length: f32,
}

impl TreeParameters {
    /// Creates parameters with the default shrink factor and cutoff.
    ///
    /// `max_length` is initialized to `trunk_length`.
    pub fn new(trunk_length: f32, angle_degrees: f32) -> Self {
        Self {
            trunk_length,
            max_length: trunk_length,
            angle_degrees,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Overrides the gradient reference length.
    pub fn with_max_length(mut self, max_length: f32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_shrink_factor(mut self, shrink_factor: f32) -> Result<Self, ParamError> {
        if !(shrink_factor > 0.0 && shrink_factor < 1.0) {
            return Err(ParamError::ShrinkFactor(shrink_factor));
        }
        self.shrink_factor = shrink_factor;
        Ok(self)
    }

    pub fn with_min_length(mut self, min_length: f32) -> Result<Self, ParamError> {
        if !(min_length.is_finite() && min_length > 0.0) {
            return Err(ParamError::MinLength(min_length));
        }
        self.min_length = min_length;
        Ok(self)
    }

    #[inline]
    pub fn shrink_factor(&self) -> f32 {
        self.shrink_factor
    }

    #[inline]
    pub fn min_length(&self) -> f32 {
        self.min_length
    }

    #[inline]
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }

    /// Number of levels that will be drawn, walking the same float sequence
    /// the generator uses.
    pub fn level_count(&self) -> u32 {
        if !self.trunk_length.is_finite() {
            return 0;
        }
        let mut len = self.trunk_length;
        let mut levels = 0;
        while len >= self.min_length {
            levels += 1;
            len *= self.shrink_factor;
        }
        levels
    }

    /// Upper bound on drawn levels: `ceil(ln(min / len) / ln(shrink))`.
    ///
    /// The bound is exact except when the ratio is an integer power of the
    /// shrink factor, where one extra level fits.
    pub fn level_bound(&self) -> u32 {
        if !(self.trunk_length >= self.min_length) {
            return 0;
        }
        let ratio = (self.min_length / self.trunk_length).ln() / self.shrink_factor.ln();
        ratio.ceil().max(1.0) as u32
    }
}

impl Default for TreeParameters {
    fn default() -> Self {
        Self::new(350.0, 30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = TreeParameters::new(350.0, 30.0);
        assert_eq!(p.max_length, 350.0);
        assert_eq!(p.shrink_factor(), 0.7);
        assert_eq!(p.min_length(), 5.0);
    }

    #[test]
    fn shrink_factor_must_be_below_one() {
        let p = TreeParameters::default();
        assert_eq!(p.with_shrink_factor(1.0), Err(ParamError::ShrinkFactor(1.0)));
        assert_eq!(p.with_shrink_factor(1.5), Err(ParamError::ShrinkFactor(1.5)));
        assert!(p.with_shrink_factor(0.0).is_err());
        assert!(p.with_shrink_factor(-0.5).is_err());
        assert!(p.with_shrink_factor(f32::NAN).is_err());
        assert_eq!(p.with_shrink_factor(0.75).unwrap().shrink_factor(), 0.75);
    }

    #[test]
    fn min_length_must_be_positive() {
        let p = TreeParameters::default();
        assert_eq!(p.with_min_length(0.0), Err(ParamError::MinLength(0.0)));
        assert!(p.with_min_length(-1.0).is_err());
        assert!(p.with_min_length(f32::INFINITY).is_err());
        assert_eq!(p.with_min_length(2.0).unwrap().min_length(), 2.0);
    }

    #[test]
    fn level_count_for_demo_tree() {
        assert_eq!(TreeParameters::new(350.0, 30.0).level_count(), 12);
        assert_eq!(TreeParameters::new(10.0, 30.0).level_count(), 2);
        assert_eq!(TreeParameters::new(5.0, 30.0).level_count(), 1);
        assert_eq!(TreeParameters::new(4.9, 30.0).level_count(), 0);
    }

    #[test]
    fn level_bound_matches_count_for_non_integer_ratios() {
        for len in [6.0, 10.0, 42.0, 120.0, 350.0, 1000.0] {
            let p = TreeParameters::new(len, 30.0);
            assert!(p.level_count() <= p.level_bound(), "len = {len}");
        }
        assert_eq!(TreeParameters::new(350.0, 30.0).level_bound(), 12);
    }

    #[test]
    fn level_count_of_non_finite_trunk_is_zero() {
        assert_eq!(TreeParameters::new(f32::INFINITY, 30.0).level_count(), 0);
        assert_eq!(TreeParameters::new(f32::NAN, 30.0).level_count(), 0);
    }
}
