use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub,
    SubAssign,
};

use super::{MathError, Mat4, Vec3, SINGULAR_EPSILON};

/// A 3×3 matrix.
///
/// Storage is column-major: element `(row, col)` is at `row + col * 3`.
///
/// ```text
/// storage: ( 0 3 6 )   from_rows: ( 0 1 2 )
///          ( 1 4 7 )              ( 3 4 5 )
///          ( 2 5 8 )              ( 6 7 8 )
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3 {
    e: [f32; 9],
}

/// Storage index of element `(row, col)`.
#[must_use]
pub const fn index_of(row: usize, col: usize) -> usize {
    row + col * 3
}

impl Mat3 {
    /// All elements zero. Returned by [`inverse`](Self::inverse) for
    /// singular input.
    pub const ZERO: Self = Self { e: [0.0; 9] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Build from rows, written the way the matrix reads on paper.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self {
            e: [
                r0[0], r1[0], r2[0], //
                r0[1], r1[1], r2[1], //
                r0[2], r1[2], r2[2],
            ],
        }
    }

    /// Build from raw column-major storage.
    #[must_use]
    pub const fn from_cols_array(e: [f32; 9]) -> Self {
        Self { e }
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    #[must_use]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_rows([
            [m.get(0, 0), m.get(0, 1), m.get(0, 2)],
            [m.get(1, 0), m.get(1, 1), m.get(1, 2)],
            [m.get(2, 0), m.get(2, 1), m.get(2, 2)],
        ])
    }

    /// Raw column-major storage.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.e
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.e[index_of(row, col)]
    }

    /// Overwrite element `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.e[index_of(row, col)] = value;
    }

    /// Row `i` as a vector.
    #[must_use]
    pub const fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let e = &self.e;
        e[0] * (e[4] * e[8] - e[7] * e[5])
            + e[3] * (e[7] * e[2] - e[1] * e[8])
            + e[6] * (e[1] * e[5] - e[4] * e[2])
    }

    /// Inverse, or [`Mat3::ZERO`] when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|_| {
            log::trace!("Mat3::inverse: singular matrix, returning zero");
            Self::ZERO
        })
    }

    /// Inverse, or [`MathError::SingularMatrix`] when
    /// `|det| < SINGULAR_EPSILON`.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            return Err(MathError::SingularMatrix);
        }
        let idet = 1.0 / det;
        let e = &self.e;
        Ok(Self::from_rows([
            [
                idet * (e[4] * e[8] - e[7] * e[5]),
                -idet * (e[3] * e[8] - e[6] * e[5]),
                idet * (e[3] * e[7] - e[6] * e[4]),
            ],
            [
                -idet * (e[1] * e[8] - e[7] * e[2]),
                idet * (e[0] * e[8] - e[6] * e[2]),
                -idet * (e[0] * e[7] - e[6] * e[1]),
            ],
            [
                idet * (e[1] * e[5] - e[4] * e[2]),
                -idet * (e[0] * e[5] - e[3] * e[2]),
                idet * (e[0] * e[4] - e[3] * e[1]),
            ],
        ]))
    }

    /// Invert in place; a singular matrix is left unchanged.
    pub fn inverse_eq(&mut self) -> &mut Self {
        if let Ok(inv) = self.try_inverse() {
            *self = inv;
        }
        self
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let e = &self.e;
        Self::from_rows([[e[0], e[1], e[2]], [e[3], e[4], e[5]], [e[6], e[7], e[8]]])
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self { e: self.e.map(f) }
    }

    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut e = self.e;
        for (a, b) in e.iter_mut().zip(rhs.e) {
            *a = f(*a, b);
        }
        Self { e }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl Div<f32> for Mat3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        let inv = 1.0 / rhs;
        self.map(|a| a * inv)
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                let v: f32 =
                    (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
                out.set(row, col, v);
            }
        }
        out
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl AddAssign for Mat3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Mat3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.e[index_of(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.e[index_of(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx;

    #[test]
    fn storage_is_column_major() {
        let m = Mat3::from_rows([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]]);
        assert_eq!(m.as_array(), &[0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]);
        assert_eq!(m[(1, 2)], 5.0);
        assert_eq!(m.get(2, 0), 6.0);
    }

    #[test]
    fn inverse_round_trip() {
        let m = Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let p = m.inverse() * m;
        for row in 0..3 {
            for col in 0..3 {
                assert!(approx(p[(row, col)], Mat3::IDENTITY[(row, col)]));
            }
        }
    }

    #[test]
    fn singular_inverse_degrades_to_zero() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(m.inverse(), Mat3::ZERO);
        assert_eq!(m.try_inverse(), Err(MathError::SingularMatrix));

        let mut same = m;
        let _ = same.inverse_eq();
        assert_eq!(same, m);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Mat3::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(m.transpose() * Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 3.0, 2.0));
    }
}
