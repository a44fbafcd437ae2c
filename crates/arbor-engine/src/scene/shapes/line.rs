use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Line segment payload, already in logical screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, thickness: f32, color: Color) -> Self {
        Self { start, end, thickness, color }
    }
}

impl DrawList {
    /// Records a line given in the current local frame.
    ///
    /// Endpoints are mapped through the current transform; the thickness is
    /// multiplied by its uniform scale.
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, thickness: f32, color: Color) {
        let m = self.current_transform();
        let cmd = LineCmd::new(
            m.transform_point(start),
            m.transform_point(end),
            thickness * m.uniform_scale(),
            color,
        );
        self.push(z, DrawCmd::Line(cmd));
    }
}
