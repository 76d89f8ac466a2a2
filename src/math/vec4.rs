use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use super::{MathError, Vec3};

/// A 4D (homogeneous) vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4 {
    e: [f32; 4],
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { e: [x, y, z, w] }
    }

    /// Extend a 3D vector with a `w` component.
    #[must_use]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    /// W component.
    #[must_use]
    pub const fn w(&self) -> f32 {
        self.e[3]
    }

    /// Drop the `w` component.
    #[must_use]
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.e[0], self.e[1], self.e[2])
    }

    /// Raw component array.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.e
    }

    /// Euclidean length over all four components.
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
        self.e.iter().zip(rhs.e.iter()).map(|(a, b)| a * b).sum()
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

    fn map2(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.e[0], rhs.e[0]),
            f(self.e[1], rhs.e[1]),
            f(self.e[2], rhs.e[2]),
            f(self.e[3], rhs.e[3]),
        )
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a + b)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a - b)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.e[0], -self.e[1], -self.e[2], -self.e[3])
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.e[0] * rhs,
            self.e[1] * rhs,
            self.e[2] * rhs,
            self.e[3] * rhs,
        )
    }
}

impl Mul for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a * b)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(
            self.e[0] / rhs,
            self.e[1] / rhs,
            self.e[2] / rhs,
            self.e[3] / rhs,
        )
    }
}

impl Div for Vec4 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a / b)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Vec4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl DivAssign for Vec4 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.e[idx]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.e[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xyz_truncates_w() {
        let v = Vec4::from_vec3(Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v.w(), 1.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn component_wise_operators() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(a * b, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / b, Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(Vec4::new(0.0, 3.0, 0.0, 4.0).length(), 5.0);
    }
}
