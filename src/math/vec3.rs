use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use super::MathError;

/// A 3D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    e: [f32; 3],
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { e: [x, y, z] }
    }

    /// Vector pointing from `from` to `to`.
    #[must_use]
    pub fn between(from: Self, to: Self) -> Self {
        to - from
    }

    /// X component.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.e[0]
    }

    /// Y component.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.e[1]
    }

    /// Z component.
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.e[2]
    }

    /// Raw component array.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 3] {
        &self.e
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.sqr_length().sqrt()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn sqr_length(&self) -> f32 {
        self.dot(*self)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.e[0] * rhs.e[0] + self.e[1] * rhs.e[1] + self.e[2] * rhs.e[2]
    }

    /// Right-handed cross product `self × rhs`.
    #[must_use]
    pub fn cross(&self, rhs: Self) -> Self {
        Self::new(
            self.e[1] * rhs.e[2] - self.e[2] * rhs.e[1],
            self.e[2] * rhs.e[0] - self.e[0] * rhs.e[2],
            self.e[0] * rhs.e[1] - self.e[1] * rhs.e[0],
        )
    }

    /// Unit vector in the same direction. Not guarded: a zero vector
    /// produces NaN components.
    #[must_use]
    pub fn normal(&self) -> Self {
        *self * (1.0 / self.length())
    }

    /// Like [`normal`](Self::normal) but rejects zero-length input.
    pub fn try_normal(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(*self / len)
    }

    /// Normalize in place.
    pub fn normal_eq(&mut self) -> &mut Self {
        *self = self.normal();
        self
    }

    /// Rescale in place so the length becomes `len`.
    pub fn normal_eq_to(&mut self, len: f32) -> &mut Self {
        let s = len / self.length();
        *self *= s;
        self
    }

    /// Negate in place.
    pub fn negate_eq(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Clamp each component to at most `max`.
    pub fn clamp_to_max_eq(&mut self, max: f32) -> &mut Self {
        for c in &mut self.e {
            if *c > max {
                *c = max;
            }
        }
        self
    }

    /// A vector orthogonal to `self` (not normalized).
    ///
    /// Crosses against the axis of the smallest absolute component; ties
    /// fall through to the later branches, so the result is deterministic.
    #[must_use]
    pub fn generate_orthogonal(&self) -> Self {
        let [x, y, z] = self.e;
        let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
        if ax < ay && ax < az {
            Self::new(0.0, z, -y)
        } else if ay < az {
            Self::new(z, 0.0, -x)
        } else {
            Self::new(-y, x, 0.0)
        }
    }

    /// Whether any component is NaN.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        self.e.iter().any(|c| c.is_nan())
    }

    /// Whether any component is infinite.
    #[must_use]
    pub fn has_inf(&self) -> bool {
        self.e.iter().any(|c| c.is_infinite())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.e[0] + rhs.e[0],
            self.e[1] + rhs.e[1],
            self.e[2] + rhs.e[2],
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.e[0] - rhs.e[0],
            self.e[1] - rhs.e[1],
            self.e[2] - rhs.e[2],
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.e[0], -self.e[1], -self.e[2])
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.e[0] * rhs, self.e[1] * rhs, self.e[2] * rhs)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.e[0] * rhs.e[0],
            self.e[1] * rhs.e[1],
            self.e[2] * rhs.e[2],
        )
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.e[0] / rhs, self.e[1] / rhs, self.e[2] / rhs)
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.e[0] / rhs.e[0],
            self.e[1] / rhs.e[1],
            self.e[2] / rhs.e[2],
        )
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.e[idx]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.e[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn between_points_at_target() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(Vec3::between(a, b), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn generate_orthogonal_branches() {
        // |x| smallest
        assert_eq!(
            Vec3::new(0.1, 2.0, 3.0).generate_orthogonal(),
            Vec3::new(0.0, 3.0, -2.0)
        );
        // |y| smallest
        assert_eq!(
            Vec3::new(2.0, 0.1, 3.0).generate_orthogonal(),
            Vec3::new(3.0, 0.0, -2.0)
        );
        // |z| smallest
        assert_eq!(
            Vec3::new(2.0, 3.0, 0.1).generate_orthogonal(),
            Vec3::new(-3.0, 2.0, 0.0)
        );
        // Three-way tie falls through to the last branch.
        assert_eq!(
            Vec3::new(1.0, 1.0, 1.0).generate_orthogonal(),
            Vec3::new(-1.0, 1.0, 0.0)
        );
        // x ties with y: not strictly smallest, so the y/z branch decides.
        assert_eq!(
            Vec3::new(1.0, -1.0, 5.0).generate_orthogonal(),
            Vec3::new(5.0, 0.0, -1.0)
        );
    }

    #[test]
    fn generate_orthogonal_is_orthogonal() {
        for v in [
            Vec3::new(0.3, -1.2, 4.0),
            Vec3::new(-7.0, 0.0, 0.5),
            Vec3::new(2.0, 2.0, -2.0),
        ] {
            assert!(v.dot(v.generate_orthogonal()).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_cross_product_normalizes_to_nan() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let axis = v.cross(v).normal();
        assert!(axis.has_nan());
        assert_eq!(v.cross(v).try_normal(), Err(MathError::ZeroLength));
    }

    #[test]
    fn in_place_ops_mutate_receiver() {
        let mut v = Vec3::new(1.0, -2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        v *= 2.0;
        assert_eq!(v, Vec3::new(4.0, -2.0, 8.0));
        let _ = v.clamp_to_max_eq(5.0).negate_eq();
        assert_eq!(v, Vec3::new(-4.0, 2.0, -5.0));
        v[1] = 0.0;
        assert_eq!(v.y(), 0.0);
    }
}
