use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub,
    SubAssign,
};

use super::{MathError, Mat3, Vec3, Vec4, SINGULAR_EPSILON};

/// A 4×4 homogeneous transform.
///
/// Storage is column-major, matching what OpenGL/wgpu expect for a
/// `mat4x4<f32>` uniform; constructors and accessors are row-major.
///
/// ```text
/// storage: ( 0 4  8 12 )   from_rows: (  0  1  2  3 )
///          ( 1 5  9 13 )              (  4  5  6  7 )
///          ( 2 6 10 14 )              (  8  9 10 11 )
///          ( 3 7 11 15 )              ( 12 13 14 15 )
/// ```
///
/// The translation of an affine transform therefore lives at storage
/// indices 12, 13, 14.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    e: [f32; 16],
}

/// Storage index of element `(row, col)`.
#[must_use]
pub const fn index_of(row: usize, col: usize) -> usize {
    row + col * 4
}

impl Mat4 {
    /// All elements zero. Returned by [`inverse`](Self::inverse) for
    /// singular input.
    pub const ZERO: Self = Self { e: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Build from rows, written the way the matrix reads on paper.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            e: [
                r0[0], r1[0], r2[0], r3[0], //
                r0[1], r1[1], r2[1], r3[1], //
                r0[2], r1[2], r2[2], r3[2], //
                r0[3], r1[3], r2[3], r3[3],
            ],
        }
    }

    /// Build from raw column-major storage.
    #[must_use]
    pub const fn from_cols_array(e: [f32; 16]) -> Self {
        Self { e }
    }

    /// Embed a 3×3 block; the rest is identity.
    #[must_use]
    pub const fn from_mat3(m: &Mat3) -> Self {
        Self::from_rows([
            [m.get(0, 0), m.get(0, 1), m.get(0, 2), 0.0],
            [m.get(1, 0), m.get(1, 1), m.get(1, 2), 0.0],
            [m.get(2, 0), m.get(2, 1), m.get(2, 2), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pure translation.
    #[must_use]
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        let _ = m.translate_eq(t);
        m
    }

    /// Rotation about X (pitch), angle in radians.
    #[must_use]
    pub fn rotation_x(angle: f32) -> Self {
        Self::rotation_x_cs(angle.cos(), angle.sin())
    }

    /// Rotation about Y (heading), angle in radians.
    #[must_use]
    pub fn rotation_y(angle: f32) -> Self {
        Self::rotation_y_cs(angle.cos(), angle.sin())
    }

    /// Rotation about Z (roll), angle in radians.
    #[must_use]
    pub fn rotation_z(angle: f32) -> Self {
        Self::rotation_z_cs(angle.cos(), angle.sin())
    }

    /// Rotation about X from a precomputed cosine and sine.
    #[must_use]
    pub const fn rotation_x_cs(cos: f32, sin: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about Y from a precomputed cosine and sine.
    #[must_use]
    pub const fn rotation_y_cs(cos: f32, sin: f32) -> Self {
        Self::from_rows([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about Z from a precomputed cosine and sine.
    #[must_use]
    pub const fn rotation_z_cs(cos: f32, sin: f32) -> Self {
        Self::from_rows([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Shear of Y by X and Z.
    #[must_use]
    pub const fn shear_y(tan_yx: f32, tan_yz: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [tan_yx, 1.0, tan_yz, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Non-uniform scale.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Raw column-major storage, ready for GPU upload.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.e
    }

    /// Columns as nested arrays (the layout of a WGSL `mat4x4<f32>`).
    #[must_use]
    pub const fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let e = &self.e;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
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
    pub const fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3))
    }

    /// Translation column (storage indices 12..15).
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.e[12], self.e[13], self.e[14])
    }

    /// Cofactor pairs shared by [`determinant`](Self::determinant) and the
    /// inverse (Cramer's rule on 2×2 sub-determinants).
    fn cofactors(&self) -> [f32; 12] {
        let e = &self.e;
        [
            e[10] * e[15] - e[11] * e[14],
            e[9] * e[15] - e[11] * e[13],
            e[9] * e[14] - e[10] * e[13],
            e[8] * e[15] - e[11] * e[12],
            e[8] * e[14] - e[10] * e[12],
            e[8] * e[13] - e[9] * e[12],
            e[2] * e[7] - e[3] * e[6],
            e[1] * e[7] - e[3] * e[5],
            e[1] * e[6] - e[2] * e[5],
            e[0] * e[7] - e[3] * e[4],
            e[0] * e[6] - e[2] * e[4],
            e[0] * e[5] - e[1] * e[4],
        ]
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = self.cofactors();
        t0 * t11 - t1 * t10 + t2 * t9 + t3 * t8 - t4 * t7 + t5 * t6
    }

    /// Inverse, or [`Mat4::ZERO`] when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|_| {
            log::trace!("Mat4::inverse: singular matrix, returning zero");
            Self::ZERO
        })
    }

    /// Inverse, or [`MathError::SingularMatrix`] when
    /// `|det| < SINGULAR_EPSILON`.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = self.cofactors();
        let det = t0 * t11 - t1 * t10 + t2 * t9 + t3 * t8 - t4 * t7 + t5 * t6;
        if det.abs() < SINGULAR_EPSILON {
            return Err(MathError::SingularMatrix);
        }

        let e = &self.e;
        let mut m = [0.0_f32; 16];

        m[0] = e[5] * t0 - e[6] * t1 + e[7] * t2;
        m[4] = -e[4] * t0 + e[6] * t3 - e[7] * t4;
        m[8] = e[4] * t1 - e[5] * t3 + e[7] * t5;
        m[12] = -e[4] * t2 + e[5] * t4 - e[6] * t5;

        m[1] = -e[1] * t0 + e[2] * t1 - e[3] * t2;
        m[5] = e[0] * t0 - e[2] * t3 + e[3] * t4;
        m[9] = -e[0] * t1 + e[1] * t3 - e[3] * t5;
        m[13] = e[0] * t2 - e[1] * t4 + e[2] * t5;

        m[2] = e[13] * t6 - e[14] * t7 + e[15] * t8;
        m[6] = -e[12] * t6 + e[14] * t9 - e[15] * t10;
        m[10] = e[12] * t7 - e[13] * t9 + e[15] * t11;
        m[14] = -e[12] * t8 + e[13] * t10 - e[14] * t11;

        m[3] = -e[9] * t6 + e[10] * t7 - e[11] * t8;
        m[7] = e[8] * t6 - e[10] * t9 + e[11] * t10;
        m[11] = -e[8] * t7 + e[9] * t9 - e[11] * t11;
        m[15] = e[8] * t8 - e[9] * t10 + e[10] * t11;

        let idet = 1.0 / det;
        Ok(Self { e: m.map(|v| v * idet) })
    }

    /// Invert in place; a singular matrix is left unchanged.
    pub fn inverse_eq(&mut self) -> &mut Self {
        if let Ok(inv) = self.try_inverse() {
            *self = inv;
        }
        self
    }

    /// Pre-multiply by a translation (`T * self`): adds `t` straight onto
    /// the translation column. Assumes the last row is `(0, 0, 0, 1)`.
    pub fn translate_eq(&mut self, t: Vec3) -> &mut Self {
        self.e[12] += t.x();
        self.e[13] += t.y();
        self.e[14] += t.z();
        self
    }

    /// Post-multiply by a translation (`self * T`): `t` is expressed in
    /// this matrix's local frame. Assumes the last row is `(0, 0, 0, 1)`.
    pub fn translate_before_eq(&mut self, t: Vec3) -> &mut Self {
        let shift = self.transform_vector(t);
        self.translate_eq(shift)
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.to_cols_array_2d())
    }

    /// Transform a point (implicit `w = 1`, no perspective divide).
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(p, 1.0)).xyz()
    }

    /// Transform a direction by the upper-left 3×3 block only.
    #[must_use]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(v, 0.0)).xyz()
    }

    /// Transform a point and divide by the resulting `w`.
    #[must_use]
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let h = *self * Vec4::from_vec3(p, 1.0);
        h.xyz() * (1.0 / h.w())
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

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        let inv = 1.0 / rhs;
        self.map(|a| a * inv)
    }
}

/// Standard composition: `(a * b) * v == a * (b * v)`, so `b` applies
/// first.
impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let v: f32 =
                    (0..4).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
                out.set(row, col, v);
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.e[idx]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.e[idx]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.e[index_of(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.e[index_of(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::math::approx;

    fn assert_mat_approx(a: &Mat4, b: &Mat4) {
        for i in 0..16 {
            assert!(approx(a[i], b[i]), "index {i}: {} vs {}", a[i], b[i]);
        }
    }

    #[test]
    fn row_major_constructor_column_major_storage() {
        let m = Mat4::from_rows([
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ]);
        assert_eq!(
            m.as_array(),
            &[
                0.0, 4.0, 8.0, 12.0, 1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0,
                14.0, 3.0, 7.0, 11.0, 15.0
            ]
        );
        assert_eq!(m[(0, 3)], 3.0);
        assert_eq!(m[index_of(0, 3)], 3.0);
        assert_eq!(m.translation(), Vec3::new(3.0, 7.0, 11.0));
    }

    #[test]
    fn storage_matches_glam_layout() {
        let ours = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let theirs = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ours.as_array(), &theirs.to_cols_array());
    }

    #[test]
    fn product_applies_right_operand_first() {
        let t = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let s = Mat4::scale(2.0, 2.0, 2.0);
        let p = Vec3::new(1.0, 1.0, 1.0);
        // Scale, then translate.
        assert_eq!((t * s).transform_point(p), Vec3::new(7.0, 2.0, 2.0));
        // Translate, then scale.
        assert_eq!((s * t).transform_point(p), Vec3::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn inverse_of_random_well_conditioned_matrices() {
        let mut rng = StdRng::seed_from_u64(0x7e77_a1e5);
        for _ in 0..50 {
            let mut m = Mat4::ZERO;
            for row in 0..4 {
                for col in 0..4 {
                    m[(row, col)] = rng.random_range(-1.0..1.0);
                }
                // Diagonal dominance keeps the determinant far from zero.
                m[(row, row)] += 5.0;
            }
            assert!(m.determinant().abs() > 1.0);
            assert_mat_approx(&(m.inverse() * m), &Mat4::IDENTITY);
            assert_mat_approx(&(m * m.inverse()), &Mat4::IDENTITY);
        }
    }

    #[test]
    fn singular_inverse_degrades_without_panicking() {
        let mut m = Mat4::IDENTITY;
        m[(2, 2)] = 0.0;
        assert_eq!(m.inverse(), Mat4::ZERO);
        assert_eq!(m.try_inverse(), Err(MathError::SingularMatrix));

        let mut same = m;
        let _ = same.inverse_eq();
        assert_eq!(same, m);
    }

    #[test]
    fn translate_variants() {
        let r = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);

        let mut pre = r;
        let _ = pre.translate_eq(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(pre.translation(), Vec3::new(1.0, 0.0, 0.0));

        let mut post = r;
        let _ = post.translate_before_eq(Vec3::new(1.0, 0.0, 0.0));
        let t = post.translation();
        assert!(approx(t.x(), 0.0) && approx(t.y(), 1.0) && approx(t.z(), 0.0));
    }

    #[test]
    fn rotations_match_glam() {
        let angle = 0.7;
        let pairs = [
            (Mat4::rotation_x(angle), glam::Mat4::from_rotation_x(angle)),
            (Mat4::rotation_y(angle), glam::Mat4::from_rotation_y(angle)),
            (Mat4::rotation_z(angle), glam::Mat4::from_rotation_z(angle)),
        ];
        for (ours, theirs) in pairs {
            assert_mat_approx(&ours, &Mat4::from_cols_array(theirs.to_cols_array()));
        }
    }

    #[test]
    fn project_point_divides_by_w() {
        let mut m = Mat4::IDENTITY;
        m[(3, 3)] = 2.0;
        assert_eq!(m.project_point(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn transpose_and_mat3_block() {
        let m = Mat4::rotation_y(0.3) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transpose().transpose(), m);
        let block = Mat3::from_mat4(&m);
        assert_eq!(Mat4::from_mat3(&block).translation(), Vec3::ZERO);
        assert_eq!(block.get(0, 2), m.get(0, 2));
    }
}
