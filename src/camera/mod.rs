//! Trackball camera: pointer gestures in, model-view and projection out.
//!
//! [`Camera`] owns the matrices and the interaction state machine, and
//! composes a [`TrackBall`] for rotation. [`CameraCommand`] is the vocabulary
//! the input layer speaks, and [`CameraUniform`] is what a renderer uploads.

/// Command vocabulary applied through [`Camera::execute`].
pub mod command;
/// Camera state, interaction modes and projection kinds.
pub mod core;
/// Pointer-drag to rotation mapping.
pub mod trackball;
/// GPU uniform snapshot of the camera.
pub mod uniform;

pub use self::core::{Camera, InteractionMode, Projection, DEFAULT_FOVY};
pub use command::{CameraCommand, MAX_FOVY, MIN_FOVY};
pub use trackball::TrackBall;
pub use uniform::CameraUniform;
