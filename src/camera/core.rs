use serde::{Deserialize, Serialize};

use super::trackball::TrackBall;
use crate::math::{MathError, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOVY: f32 = 45.0;

/// Screen pixels of pan per scene radius.
const PAN_PIXELS_PER_RADIUS: f32 = 300.0;
/// Screen pixels of dolly per scene radius.
const DOLLY_PIXELS_PER_RADIUS: f32 = 100.0;
/// Eye distance from the scene centre in the reset pose, in radii.
const EYE_DISTANCE_RADII: f32 = 3.0;
/// Near/far planes are this factor inside/outside the scene radius.
const DEPTH_RANGE_FACTOR: f32 = 100.0;

/// How the next [`Camera::move_to`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Pointer motion is ignored.
    #[default]
    None,
    /// Trackball rotation about the current pivot.
    Rotate,
    /// Pan in the view plane.
    MoveXy,
    /// Dolly along the view axis.
    MoveZ,
}

/// Projection kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Perspective frustum built from the field of view.
    #[default]
    Perspective,
    /// Parallel projection sized by the viewport.
    Orthographic,
}

impl Projection {
    /// The other kind.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Trackball camera framing a sphere of content.
///
/// Owns the model-view and projection matrices and keeps the quantities
/// derived from them (view axes, clip distances) fresh after every
/// mutation, so reads between events never see stale values.
///
/// Pointer positions are screen pixels with the origin at the bottom-left
/// and Y pointing up.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    mode: InteractionMode,
    last_point: Vec2,
    radius: f32,
    center: Vec3,
    fovy: f32,
    projection: Projection,
    model_view: Mat4,
    projection_matrix: Mat4,
    up: Vec3,
    right: Vec3,
    view: Vec3,
    z_min: f32,
    z_max: f32,
    trackball: TrackBall,
}

impl Camera {
    /// Create a camera framing the sphere `(center, radius)`.
    ///
    /// Call [`initialize`](Self::initialize) with the viewport size before
    /// reading any matrices.
    #[must_use]
    pub fn new(radius: f32, center: Vec3, projection: Projection) -> Self {
        let mut camera = Self {
            width: 1,
            height: 1,
            mode: InteractionMode::None,
            last_point: Vec2::ZERO,
            radius,
            center,
            fovy: DEFAULT_FOVY,
            projection,
            model_view: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            up: Vec3::X,
            right: Vec3::Y,
            view: Vec3::Z,
            z_min: 0.0,
            z_max: radius,
            trackball: TrackBall::default(),
        };
        camera.update_cam_dists();
        camera
    }

    /// Builder form of [`set_fovy`](Self::set_fovy) for use before
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn with_fovy(mut self, fovy: f32) -> Self {
        self.fovy = fovy;
        self
    }

    /// Fit the camera to a `width` × `height` viewport.
    ///
    /// Always rebuilds the projection and re-fits the trackball, and drops
    /// any gesture in progress. With `replace`, the model-view matrix is
    /// also reset to look at the scene centre from `3 * radius` along +Z.
    pub fn initialize(&mut self, width: u32, height: u32, replace: bool) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.mode = InteractionMode::None;

        let (half_w, half_h) = (self.width / 2, self.height / 2);
        self.trackball
            .set_center(Vec2::new(half_w as f32, half_h as f32));
        self.trackball.set_radius((2 * half_w.min(half_h)) as f32);

        self.projection_matrix = self.build_projection();

        if replace {
            let center = glam::Vec3::from(self.center);
            let eye = center + glam::Vec3::Z * (EYE_DISTANCE_RADII * self.radius);
            self.model_view = glam::Mat4::look_at_rh(eye, center, glam::Vec3::Y).into();
            self.update_cam_vectors();
            self.update_cam_dists();
        }

        log::debug!(
            "camera initialized: {}x{}, {:?}, fovy {:.1}, replace {replace}",
            self.width,
            self.height,
            self.projection,
            self.fovy,
        );
    }

    fn build_projection(&self) -> Mat4 {
        let (w, h) = (self.width as f32, self.height as f32);
        let far = self.radius * DEPTH_RANGE_FACTOR;
        let proj = match self.projection {
            Projection::Perspective => glam::Mat4::perspective_rh_gl(
                self.fovy.to_radians(),
                w / h,
                self.radius / DEPTH_RANGE_FACTOR,
                far,
            ),
            Projection::Orthographic => {
                glam::Mat4::orthographic_rh_gl(-w, w, -h, h, 0.0, far)
            }
        };
        proj.into()
    }

    /// Change the field of view (degrees); the pose is kept.
    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
        self.initialize(self.width, self.height, false);
    }

    /// Switch the projection kind; the pose is kept.
    pub fn set_projection(&mut self, projection: Projection) {
        if self.projection != projection {
            self.projection = projection;
            self.initialize(self.width, self.height, false);
        }
    }

    /// Start a trackball rotation at `p`.
    pub fn init_rotation(&mut self, p: Vec2) {
        self.begin(InteractionMode::Rotate, p);
        self.trackball.begin_tracking(p);
    }

    /// Start panning at `p`.
    pub fn init_move_xy(&mut self, p: Vec2) {
        self.begin(InteractionMode::MoveXy, p);
    }

    /// Start dollying at `p`.
    pub fn init_move_z(&mut self, p: Vec2) {
        self.begin(InteractionMode::MoveZ, p);
    }

    fn begin(&mut self, mode: InteractionMode, p: Vec2) {
        log::debug!("camera mode {:?} -> {mode:?} at {p:?}", self.mode);
        self.mode = mode;
        self.last_point = p;
    }

    /// Continue the current gesture to `p`.
    pub fn move_to(&mut self, p: Vec2) {
        match self.mode {
            InteractionMode::None => {}
            InteractionMode::Rotate => {
                let tr = self.model_view.translation();
                let rotation = self.trackball.track(p).to_mat4();
                self.model_view = Mat4::from_translation(tr)
                    * rotation
                    * Mat4::from_translation(-tr)
                    * self.model_view;
                self.trackball.begin_tracking(p);
                self.update_cam_vectors();
                self.update_cam_dists();
            }
            InteractionMode::MoveXy => {
                let d = (p - self.last_point)
                    * (self.radius / PAN_PIXELS_PER_RADIUS);
                let _ = self.model_view.translate_eq(Vec3::new(d.x(), d.y(), 0.0));
                self.update_cam_dists();
            }
            InteractionMode::MoveZ => {
                let dz = (self.last_point.y() - p.y())
                    * (self.radius / DOLLY_PIXELS_PER_RADIUS);
                let _ = self.model_view.translate_eq(Vec3::new(0.0, 0.0, dz));
                self.update_cam_dists();
            }
        }
        self.last_point = p;
    }

    /// Axes are the rows of the rotation block, i.e. the camera's local
    /// basis expressed in world space.
    fn update_cam_vectors(&mut self) {
        let rot = Mat3::from_mat4(&self.model_view);
        self.up = rot.row(0);
        self.right = rot.row(1);
        self.view = rot.row(2);
    }

    /// The eye sits at the origin of view space, so the distance to the
    /// scene is the length of the transformed centre.
    fn update_cam_dists(&mut self) {
        let d = (self.model_view * Vec4::from_vec3(self.center, 1.0))
            .xyz()
            .length();
        self.z_min = (d - self.radius).max(0.0);
        self.z_max = self.z_min + self.radius;
    }

    /// Projection matrix.
    #[must_use]
    pub const fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Model-view matrix.
    #[must_use]
    pub const fn model_view_matrix(&self) -> &Mat4 {
        &self.model_view
    }

    /// Inverse-transpose of the model-view rotation block; [`Mat3::ZERO`]
    /// when that block is singular.
    #[must_use]
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(&self.model_view).inverse().transpose()
    }

    /// Like [`normal_matrix`](Self::normal_matrix) but reports a singular
    /// block.
    pub fn try_normal_matrix(&self) -> Result<Mat3, MathError> {
        Ok(Mat3::from_mat4(&self.model_view).try_inverse()?.transpose())
    }

    /// Row 0 of the rotation block.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Row 1 of the rotation block.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Row 2 of the rotation block.
    #[must_use]
    pub const fn view(&self) -> Vec3 {
        self.view
    }

    /// Near clip distance, never negative.
    #[must_use]
    pub const fn z_min(&self) -> f32 {
        self.z_min
    }

    /// Far clip distance, always `z_min + radius`.
    #[must_use]
    pub const fn z_max(&self) -> f32 {
        self.z_max
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub const fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Viewport width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current interaction mode.
    #[must_use]
    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Current projection kind.
    #[must_use]
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// Framing sphere radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Framing sphere centre.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Pointer position of the last `init_*` or `move_to` call.
    #[must_use]
    pub const fn last_point(&self) -> Vec2 {
        self.last_point
    }

    /// The rotation trackball.
    #[must_use]
    pub const fn trackball(&self) -> &TrackBall {
        &self.trackball
    }
}
