use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use super::MathError;

/// A 2D vector, used for screen-space pointer positions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    e: [f32; 2],
}

impl Vec2 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { e: [x, y] }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.e[0]
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.e[1]
    }

    /// Raw component array.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 2] {
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
        self.e[0] * rhs.e[0] + self.e[1] * rhs.e[1]
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
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.e[0] + rhs.e[0], self.e[1] + rhs.e[1])
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.e[0] - rhs.e[0], self.e[1] - rhs.e[1])
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.e[0], -self.e[1])
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.e[0] * rhs, self.e[1] * rhs)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.e[0] * rhs.e[0], self.e[1] * rhs.e[1])
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.e[0] / rhs, self.e[1] / rhs)
    }
}

impl Div for Vec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.e[0] / rhs.e[0], self.e[1] / rhs.e[1])
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl DivAssign for Vec2 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.e[idx]
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.e[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(a * b, Vec2::new(3.0, -8.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -2.0));
        // Operands untouched.
        assert_eq!(a, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn in_place_variants_chain() {
        let mut v = Vec2::new(3.0, 4.0);
        let _ = v.normal_eq().negate_eq();
        assert!((v.x() + 0.6).abs() < 1e-6);
        assert!((v.y() + 0.8).abs() < 1e-6);

        let _ = v.normal_eq_to(10.0).clamp_to_max_eq(-7.0);
        assert_eq!(v.x(), -7.0);
        assert!((v.y() + 8.0).abs() < 1e-4);
    }

    #[test]
    fn zero_length_normalization() {
        assert!(Vec2::ZERO.normal().has_nan());
        assert_eq!(Vec2::ZERO.try_normal(), Err(MathError::ZeroLength));
        assert_eq!(Vec2::new(0.0, 2.0).try_normal(), Ok(Vec2::new(0.0, 1.0)));
    }
}
