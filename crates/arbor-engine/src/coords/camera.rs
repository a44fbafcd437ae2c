use super::{Rect, Transform2D, Vec2, Viewport};

/// 2D camera in the raylib sense.
///
/// `world → screen` is `(rotate(world - target) * zoom) + offset`. The
/// `offset` is in logical screen pixels; `target` is the world point drawn
/// at `offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
    pub target: Vec2,
    /// Radians, clockwise.
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    pub const fn with_zoom(zoom: f32) -> Self {
        Self { offset: Vec2::zero(), target: Vec2::zero(), rotation: 0.0, zoom }
    }

    pub fn world_to_screen_transform(&self) -> Transform2D {
        Transform2D::translation(self.offset)
            * Transform2D::scale(self.zoom)
            * Transform2D::rotation(self.rotation)
            * Transform2D::translation(-self.target)
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        self.world_to_screen_transform().transform_point(p)
    }

    /// Returns `None` when the zoom is zero.
    pub fn screen_to_world(&self, p: Vec2) -> Option<Vec2> {
        self.world_to_screen_transform()
            .inverse()
            .map(|inv| inv.transform_point(p))
    }

    /// Axis-aligned world-space bounds of what the viewport shows.
    ///
    /// `None` for an empty viewport or a zero zoom.
    pub fn visible_world(&self, viewport: Viewport) -> Option<Rect> {
        if !viewport.is_valid() {
            return None;
        }
        let inv = self.world_to_screen_transform().inverse()?;
        let corners = [
            Vec2::zero(),
            Vec2::new(viewport.width, 0.0),
            Vec2::new(0.0, viewport.height),
            Vec2::new(viewport.width, viewport.height),
        ]
        .map(|c| inv.transform_point(c));

        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = Vec2::new(min.x.min(c.x), min.y.min(c.y));
            max = Vec2::new(max.x.max(c.x), max.y.max(c.y));
        }
        Some(Rect::from_corners(min, max))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::with_zoom(1.0)
    }
}
