use core::ops::{Add, Mul};

/// 2D point in tree-local space.
///
/// Tree-local space matches screen conventions: +X right, +Y down. The root
/// sits at the origin and the trunk grows towards −Y.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Unit vector for `heading` radians, measured clockwise from "up" (−Y).
    #[inline]
    pub fn from_heading(heading: f32) -> Self {
        let (sin, cos) = heading.sin_cos();
        Self::new(sin, -cos)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// One emitted branch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BranchSegment {
    pub start: Point,
    /// Radians, clockwise from "up".
    pub heading: f32,
    pub length: f32,
    /// Recursion level; the trunk is level 0.
    pub depth: u32,
}

impl BranchSegment {
    /// Tip of the segment.
    #[inline]
    pub fn end(&self) -> Point {
        self.start + Point::from_heading(self.heading) * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn zero_heading_points_up() {
        let seg = BranchSegment { start: Point::origin(), heading: 0.0, length: 10.0, depth: 0 };
        assert_eq!(seg.end(), Point::new(0.0, -10.0));
    }

    #[test]
    fn positive_heading_turns_clockwise() {
        let seg = BranchSegment {
            start: Point::new(1.0, 1.0),
            heading: core::f32::consts::FRAC_PI_2,
            length: 2.0,
            depth: 3,
        };
        assert!(close(seg.end(), Point::new(3.0, 1.0)));
    }
}
