// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball camera core for an interactive 3D terrain and mesh viewer.
//!
//! Terraview turns 2D pointer gestures into rigid-body camera motion:
//! arcball rotation about the current pivot, pan in the view plane, and
//! dolly along the view axis. It keeps a model-view/projection pair
//! consistent across interaction and resize events and derives the
//! quantities a renderer reads every frame (clip distances, normal matrix,
//! view axes).
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera state machine
//! - [`camera::TrackBall`] - pointer drag to rotation quaternion
//! - [`math`] - vectors, matrices and quaternions with GPU-ready layout
//! - [`input::InputProcessor`] - raw window events to [`CameraCommand`]s
//! - [`options::Options`] - TOML presets for camera and key bindings
//!
//! # Data flow
//!
//! input event → [`InputProcessor`] → [`CameraCommand`] →
//! [`Camera::execute`](camera::Camera::execute) → [`TrackBall`] (rotation
//! only) → model-view matrix → [`CameraUniform`] read by the renderer.
//!
//! Numerically undefined cases (singular inverse, degenerate trackball
//! axis) degrade to a safe default by default; `try_*` variants report a
//! [`MathError`] instead.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{
    Camera, CameraCommand, CameraUniform, InteractionMode, Projection,
    TrackBall,
};
pub use error::TerraviewError;
pub use input::{InputEvent, InputProcessor, KeyAction, MouseButton};
pub use math::{Mat3, Mat4, MathError, Quat, Vec2, Vec3, Vec4};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
