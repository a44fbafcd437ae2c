/// Size of the area being drawn, in logical pixels.
///
/// Renderers upload it to convert logical positions to NDC; the camera uses it
/// to work out which part of the world is on screen.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True for a finite, non-empty area. A minimized window is not valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(1280.0, 720.0).is_valid());
        assert!(!Viewport::new(0.0, 720.0).is_valid());
        assert!(!Viewport::new(1280.0, f32::INFINITY).is_valid());
        assert!(!Viewport::default().is_valid());
    }
}
