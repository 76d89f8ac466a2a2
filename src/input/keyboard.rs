use serde::{Deserialize, Serialize};

use crate::camera::CameraCommand;

/// Degrees added or removed by one fov key press.
pub const FOVY_STEP: f32 = 5.0;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "KeyI"
/// toggle_projection = "KeyP"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return to the framing pose.
    ResetCamera,
    /// Switch between perspective and orthographic.
    ToggleProjection,
    /// Widen the field of view by [`FOVY_STEP`].
    WidenFov,
    /// Narrow the field of view by [`FOVY_STEP`].
    NarrowFov,
}

impl KeyAction {
    /// The camera command this action triggers.
    #[must_use]
    pub const fn to_command(self) -> CameraCommand {
        match self {
            Self::ResetCamera => CameraCommand::Reset,
            Self::ToggleProjection => CameraCommand::ToggleProjection,
            Self::WidenFov => CameraCommand::AdjustFovy { delta: FOVY_STEP },
            Self::NarrowFov => CameraCommand::AdjustFovy { delta: -FOVY_STEP },
        }
    }
}
