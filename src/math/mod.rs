//! Fixed-size vector, matrix, and quaternion algebra.
//!
//! Matrices store their elements column-major (element `(row, col)` lives at
//! `row + col * N`) so the raw array can be handed to a graphics API as-is,
//! while constructors take their arguments row-major so literals read the
//! way they are written on paper.
//!
//! Numerically undefined operations degrade silently by default: inverting
//! a near-singular matrix yields [`Mat4::ZERO`] / [`Mat3::ZERO`]. The
//! `try_*` variants report a [`MathError`] instead.

use std::fmt;

mod interop;
/// 3×3 matrix.
pub mod mat3;
/// 4×4 homogeneous matrix.
pub mod mat4;
/// Rotation quaternion.
pub mod quat;
/// Two-component vector.
pub mod vec2;
/// Three-component vector.
pub mod vec3;
/// Four-component vector.
pub mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-12;

/// Failure kinds of the strict (`try_*`) algebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Matrix determinant magnitude is below [`SINGULAR_EPSILON`].
    SingularMatrix,
    /// A rotation axis came out NaN or infinite (zero-length cross product).
    DegenerateAxis,
    /// Attempted to normalize a zero-length vector.
    ZeroLength,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularMatrix => write!(f, "matrix is singular"),
            Self::DegenerateAxis => write!(f, "rotation axis is degenerate"),
            Self::ZeroLength => write!(f, "cannot normalize a zero-length vector"),
        }
    }
}

impl std::error::Error for MathError {}

/// Approximate equality used by tests across the algebra modules.
#[cfg(test)]
pub(crate) fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
