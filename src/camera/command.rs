//! The camera's complete interactive vocabulary.
//!
//! Every camera operation, whether it came from a mouse gesture, a key
//! binding or a programmatic call, is a `CameraCommand` applied through
//! [`Camera::execute`].

use super::core::Camera;
use crate::math::Vec2;

/// Narrowest field of view reachable through [`CameraCommand::AdjustFovy`].
pub const MIN_FOVY: f32 = 1.0;
/// Widest field of view reachable through [`CameraCommand::AdjustFovy`].
pub const MAX_FOVY: f32 = 179.0;

/// A discrete or parameterized camera operation.
///
/// Points are screen pixels, origin bottom-left, Y up.
///
/// ```ignore
/// camera.execute(CameraCommand::BeginRotate(Vec2::new(10.0, 20.0)));
/// camera.execute(CameraCommand::Drag(Vec2::new(30.0, 25.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Start a trackball rotation.
    BeginRotate(Vec2),
    /// Start panning in the view plane.
    BeginPan(Vec2),
    /// Start dollying along the view axis.
    BeginDolly(Vec2),
    /// Continue whatever gesture is in progress.
    Drag(Vec2),
    /// The viewport changed size; the pose is kept.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Return to the framing pose.
    Reset,
    /// Switch between perspective and orthographic.
    ToggleProjection,
    /// Widen (positive) or narrow (negative) the field of view.
    AdjustFovy {
        /// Change in degrees.
        delta: f32,
    },
}

impl Camera {
    /// Apply one command.
    pub fn execute(&mut self, cmd: CameraCommand) {
        match cmd {
            CameraCommand::BeginRotate(p) => self.init_rotation(p),
            CameraCommand::BeginPan(p) => self.init_move_xy(p),
            CameraCommand::BeginDolly(p) => self.init_move_z(p),
            CameraCommand::Drag(p) => self.move_to(p),
            CameraCommand::Resize { width, height } => {
                self.initialize(width, height, false);
            }
            CameraCommand::Reset => {
                self.initialize(self.width(), self.height(), true);
            }
            CameraCommand::ToggleProjection => {
                self.set_projection(self.projection().toggled());
            }
            CameraCommand::AdjustFovy { delta } => {
                self.set_fovy((self.fovy() + delta).clamp(MIN_FOVY, MAX_FOVY));
            }
        }
    }
}
