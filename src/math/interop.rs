//! Conversions to and from `glam`.
//!
//! `glam` matrices are column-major as well, so matrix conversions are a
//! straight copy of the backing array.

use super::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x(), v.y())
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }
}

impl From<glam::Vec4> for Vec4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x(), v.y(), v.z(), v.w())
    }
}

impl From<glam::Mat3> for Mat3 {
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Mat3> for glam::Mat3 {
    fn from(m: Mat3) -> Self {
        Self::from_cols_array(m.as_array())
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(m.as_array())
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        Self::from_xyzw(q.x(), q.y(), q.z(), q.w())
    }
}
