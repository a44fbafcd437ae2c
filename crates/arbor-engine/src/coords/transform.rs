use core::ops::Mul;

use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`; in column-vector form:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// `lhs * rhs` applies `rhs` first, matching matrix-stack conventions where
/// each `translate` / `rotate` call acts in the current local frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2D {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translation(v: Vec2) -> Self {
        Self { tx: v.x, ty: v.y, ..Self::IDENTITY }
    }

    /// Clockwise on screen for positive `radians` (+Y down).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies the linear part only.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Geometric-mean scale factor; used to scale stroke widths.
    #[inline]
    pub fn uniform_scale(&self) -> f32 {
        self.determinant().abs().sqrt()
    }

    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-12 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        let a = self.d * inv;
        let b = -self.b * inv;
        let c = -self.c * inv;
        let d = self.a * inv;
        Some(Self {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + c * self.ty),
            ty: -(b * self.tx + d * self.ty),
        })
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        Transform2D {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            tx: self.a * rhs.tx + self.c * rhs.ty + self.tx,
            ty: self.b * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform2D::translation(Vec2::new(3.0, -2.0));
        assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(4.0, -1.0));
        assert_eq!(t.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        let r = Transform2D::rotation(FRAC_PI_2);
        // "up" (-Y) turns to "right" (+X).
        assert!(close(r.transform_point(Vec2::new(0.0, -1.0)), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn composition_applies_right_hand_side_first() {
        let t = Transform2D::translation(Vec2::new(10.0, 0.0));
        let s = Transform2D::scale(2.0);
        let p = Vec2::new(1.0, 1.0);
        assert_eq!((t * s).transform_point(p), Vec2::new(12.0, 2.0));
        assert_eq!((s * t).transform_point(p), Vec2::new(22.0, 2.0));
    }

    #[test]
    fn inverse_round_trips() {
        let m = Transform2D::translation(Vec2::new(5.0, 7.0))
            * Transform2D::rotation(0.3)
            * Transform2D::scale(0.5);
        let inv = m.inverse().unwrap();
        let p = Vec2::new(-12.0, 40.0);
        assert!(close(inv.transform_point(m.transform_point(p)), p));
    }

    #[test]
    fn singular_has_no_inverse() {
        assert!(Transform2D::scale(0.0).inverse().is_none());
    }

    #[test]
    fn uniform_scale_ignores_rotation() {
        let m = Transform2D::rotation(1.1) * Transform2D::scale(0.5);
        assert!((m.uniform_scale() - 0.5).abs() < 1e-6);
    }
}
