/// Straight-alpha sRGB color, components in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Color gradient from trunk to leaves, keyed by remaining-length ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BranchPalette {
    pub trunk: Rgb,
    pub leaf: Rgb,
}

impl BranchPalette {
    pub const fn new(trunk: Rgb, leaf: Rgb) -> Self {
        Self { trunk, leaf }
    }

    /// Gradient position: 0 at `max_length`, 1 as the length approaches zero.
    pub fn ratio(length: f32, max_length: f32) -> f32 {
        if !(max_length > 0.0) {
            return 1.0;
        }
        let t = 1.0 - (length / max_length).clamp(0.0, 1.0);
        if t.is_nan() { 1.0 } else { t }
    }

    pub fn color_for(&self, length: f32, max_length: f32) -> Rgb {
        let t = Self::ratio(length, max_length);
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        [
            mix(self.trunk[0], self.leaf[0]),
            mix(self.trunk[1], self.leaf[1]),
            mix(self.trunk[2], self.leaf[2]),
        ]
    }
}

impl Default for BranchPalette {
    /// Brown bark to leaf green.
    fn default() -> Self {
        Self::new([0.50, 0.31, 0.16], [0.20, 0.80, 0.25])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_gets_trunk_color() {
        let p = BranchPalette::default();
        assert_eq!(p.color_for(350.0, 350.0), p.trunk);
    }

    #[test]
    fn vanishing_branch_gets_leaf_color() {
        let p = BranchPalette::default();
        assert_eq!(p.color_for(0.0, 350.0), p.leaf);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(BranchPalette::ratio(700.0, 350.0), 0.0);
        assert_eq!(BranchPalette::ratio(-5.0, 350.0), 1.0);
        assert_eq!(BranchPalette::ratio(10.0, 0.0), 1.0);
        assert_eq!(BranchPalette::ratio(f32::NAN, 350.0), 1.0);
    }

    #[test]
    fn midpoint_blends() {
        let p = BranchPalette::new([0.0, 0.0, 0.0], [1.0, 0.5, 0.0]);
        assert_eq!(p.color_for(50.0, 100.0), [0.5, 0.25, 0.0]);
    }
}
