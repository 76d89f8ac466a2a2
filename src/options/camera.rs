use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Projection, DEFAULT_FOVY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and framing parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Perspective or orthographic projection.
    #[schemars(title = "Projection")]
    pub projection: Projection,
    /// Radius of the sphere the camera frames.
    #[schemars(title = "Scene Radius", range(min = 0.001))]
    pub scene_radius: f32,
    /// Centre of the sphere the camera frames.
    #[schemars(skip)]
    pub scene_center: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: DEFAULT_FOVY,
            projection: Projection::Perspective,
            scene_radius: 1.0,
            scene_center: [0.0; 3],
        }
    }
}
