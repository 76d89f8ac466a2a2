use super::core::Camera;
use crate::math::{Mat3, Mat4};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the per-frame camera state.
///
/// Laid out for std140: every matrix column is a 16-byte `vec4`, so the
/// normal matrix is stored as three padded columns.
pub struct CameraUniform {
    /// Model-view matrix, column-major.
    pub model_view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Normal matrix columns, each padded to four floats.
    pub normal: [[f32; 4]; 3],
    /// Near clip distance.
    pub z_min: f32,
    /// Far clip distance.
    pub z_max: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            model_view: identity,
            projection: identity,
            normal: pad_columns(&Mat3::IDENTITY),
            z_min: 0.0,
            z_max: 1.0,
            fovy: 45.0,
            _pad: 0.0,
        }
    }

    /// Create a uniform snapshot of `camera`.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera);
        uniform
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        self.model_view = camera.model_view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix().to_cols_array_2d();
        self.normal = pad_columns(&camera.normal_matrix());
        self.z_min = camera.z_min();
        self.z_max = camera.z_max();
        self.fovy = camera.fovy();
    }

    /// Raw bytes, ready for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn pad_columns(m: &Mat3) -> [[f32; 4]; 3] {
    std::array::from_fn(|c| [m.get(0, c), m.get(1, c), m.get(2, c), 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::math::{Vec2, Vec3};

    #[test]
    fn layout_is_std140_sized() {
        assert_eq!(size_of::<CameraUniform>(), 192);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
        assert_eq!(CameraUniform::default().as_bytes().len(), 192);
    }

    #[test]
    fn snapshot_tracks_camera() {
        let mut camera = Camera::new(2.0, Vec3::new(1.0, 0.0, 0.0), Projection::Perspective);
        camera.initialize(400, 300, true);
        camera.init_rotation(Vec2::new(200.0, 150.0));
        camera.move_to(Vec2::new(260.0, 170.0));

        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(
            uniform.model_view,
            camera.model_view_matrix().to_cols_array_2d()
        );
        assert_eq!(
            uniform.projection,
            camera.projection_matrix().to_cols_array_2d()
        );
        let n = camera.normal_matrix();
        assert_eq!(uniform.normal[1], [n.get(0, 1), n.get(1, 1), n.get(2, 1), 0.0]);
        assert_eq!(uniform.z_min, camera.z_min());
        assert_eq!(uniform.z_max, camera.z_max());
        assert_eq!(uniform.fovy, 45.0);
    }
}
