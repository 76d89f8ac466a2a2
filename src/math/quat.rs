use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Mat3, Mat4, Vec3};

/// A rotation quaternion, scalar part first (`[w, x, y, z]`).
///
/// Unit length is a convention, not an invariant: callers composing many
/// products should [`normalize`](Self::normalize) now and then to stop drift.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quat {
    e: [f32; 4],
}

impl Quat {
    /// The zero rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Create a quaternion from its scalar and vector components.
    #[must_use]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { e: [w, x, y, z] }
    }

    /// Rotation of `angle` radians about `axis`. The axis is expected to be
    /// unit length; it is not normalized here.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(c, axis.x() * s, axis.y() * s, axis.z() * s)
    }

    /// Scalar component.
    #[must_use]
    pub const fn w(&self) -> f32 {
        self.e[0]
    }

    /// X component of the vector part.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.e[1]
    }

    /// Y component of the vector part.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.e[2]
    }

    /// Z component of the vector part.
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.e[3]
    }

    /// Scalar part (alias of [`w`](Self::w)).
    #[must_use]
    pub const fn scalar(&self) -> f32 {
        self.e[0]
    }

    /// Vector part.
    #[must_use]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.e[1], self.e[2], self.e[3])
    }

    /// Raw `[w, x, y, z]` storage.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.e
    }

    /// Norm.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.sqr_length().sqrt()
    }

    /// Squared norm.
    #[must_use]
    pub fn sqr_length(&self) -> f32 {
        self.e.iter().map(|c| c * c).sum()
    }

    /// Rescale so the norm becomes `len`.
    #[must_use]
    pub fn scale_to(&self, len: f32) -> Self {
        *self * (len / self.length())
    }

    /// Unit quaternion in the same direction.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.scale_to(1.0)
    }

    /// Negated vector part.
    #[must_use]
    pub const fn conjugate(&self) -> Self {
        Self::new(self.e[0], -self.e[1], -self.e[2], -self.e[3])
    }

    /// Inverse of a unit quaternion (its conjugate).
    #[must_use]
    pub const fn unit_inverse(&self) -> Self {
        self.conjugate()
    }

    /// General inverse, `conjugate / |q|²`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.sqr_length()
    }

    /// 3×3 rotation matrix.
    ///
    /// Element placement is the transpose of the common textbook form: row 0
    /// is `(1 − 2(y² + z²), 2(xy + zw), 2(xz − yw))`. Applied to column
    /// vectors it rotates by the conjugate; the trackball axis convention is
    /// built around this.
    #[must_use]
    pub fn to_mat3(&self) -> Mat3 {
        let [w, x, y, z] = self.e;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);
        Mat3::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + zw), 2.0 * (xz - yw)],
            [2.0 * (xy - zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + xw)],
            [2.0 * (xz + yw), 2.0 * (yz - xw), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// 4×4 homogeneous form of [`to_mat3`](Self::to_mat3), no translation.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_mat3(&self.to_mat3())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (w1, v1) = (self.scalar(), self.vector());
        let (w2, v2) = (rhs.scalar(), rhs.vector());
        let w = w1 * w2 - v1.dot(v2);
        let v = v2 * w1 + v1 * w2 + v1.cross(v2);
        Self::new(w, v.x(), v.y(), v.z())
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.e;
        let [p, q, r, s] = rhs.e;
        Self::new(a + p, b + q, c + r, d + s)
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Self { e: self.e.map(|c| -c) }
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { e: self.e.map(|c| c * rhs) }
    }
}

impl Div<f32> for Quat {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self { e: self.e.map(|c| c / rhs) }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    use super::*;
    use crate::math::approx;

    fn assert_quat_approx(a: Quat, b: Quat) {
        for i in 0..4 {
            assert!(approx(a.e[i], b.e[i]), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn identity_has_no_rotation() {
        assert_eq!(Quat::IDENTITY.to_mat4(), Mat4::IDENTITY);
        assert_eq!(Quat::from_axis_angle(Vec3::Z, 0.0), Quat::IDENTITY);
        assert_eq!(Quat::default().vector(), Vec3::ZERO);
    }

    #[test]
    fn axis_angle_components() {
        let q = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
        let h = (FRAC_PI_2 * 0.5).sin();
        assert_quat_approx(q, Quat::new(h, h, 0.0, 0.0));
        assert!(approx(q.length(), 1.0));
    }

    #[test]
    fn matrix_is_transposed_rotation() {
        let angle = FRAC_PI_3;
        let m = Quat::from_axis_angle(Vec3::Z, angle).to_mat4();
        let expected = Mat4::rotation_z(-angle);
        for i in 0..16 {
            assert!(approx(m[i], expected[i]));
        }
        assert!(approx(m.get(0, 1), angle.sin()));
    }

    #[test]
    fn hamilton_product_composes_same_axis() {
        let a = Quat::from_axis_angle(Vec3::Y, 0.4);
        let b = Quat::from_axis_angle(Vec3::Y, 0.9);
        assert_quat_approx(a * b, Quat::from_axis_angle(Vec3::Y, 1.3));
    }

    #[test]
    fn product_reverses_matrix_order() {
        let a = Quat::from_axis_angle(Vec3::X, 0.3);
        let b = Quat::from_axis_angle(Vec3::Z, 1.1);
        let lhs = (a * b).to_mat3();
        let rhs = b.to_mat3() * a.to_mat3();
        for row in 0..3 {
            for col in 0..3 {
                assert!(approx(lhs[(row, col)], rhs[(row, col)]));
            }
        }
    }

    #[test]
    fn inverses() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 0.7);
        assert_quat_approx(q * q.unit_inverse(), Quat::IDENTITY);

        let scaled = q * 3.0;
        assert_quat_approx(scaled * scaled.inverse(), Quat::IDENTITY);
        assert_quat_approx(scaled.normalize(), q);
        assert!(approx(q.scale_to(2.0).length(), 2.0));
    }

    #[test]
    fn additive_operators() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quat::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quat::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(-a, Quat::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a.conjugate().vector(), Vec3::new(-2.0, -3.0, -4.0));
    }
}
