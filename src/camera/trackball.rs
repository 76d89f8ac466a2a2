use crate::math::{MathError, Quat, Vec2, Vec3};

/// Radians of rotation per trackball radius of pointer travel.
const SENSITIVITY: f32 = 4.0;

/// Maps a 2D pointer drag onto a virtual hemisphere and turns it into an
/// incremental rotation.
///
/// The start point is projected to `(x, y, radius)` rather than onto a true
/// sphere, so there is no clamping at the equator and sensitivity keeps
/// growing with distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBall {
    center: Vec2,
    radius: f32,
    start_pos: Vec2,
    start_sph_pos: Vec3,
}

impl Default for TrackBall {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

impl TrackBall {
    /// Create a trackball pivoting on `center` (screen pixels).
    #[must_use]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            start_pos: Vec2::ZERO,
            start_sph_pos: Vec3::new(0.0, 0.0, radius),
        }
    }

    /// Screen-space pivot.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Screen-space radius of the virtual hemisphere.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Drag start, relative to the centre.
    #[must_use]
    pub const fn start_pos(&self) -> Vec2 {
        self.start_pos
    }

    /// Drag start projected onto the hemisphere.
    #[must_use]
    pub const fn start_sph_pos(&self) -> Vec3 {
        self.start_sph_pos
    }

    /// Move the pivot.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Resize the hemisphere.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Record `p` as the reference point for subsequent [`track`](Self::track)
    /// calls.
    pub fn begin_tracking(&mut self, p: Vec2) {
        self.start_pos = p - self.center;
        self.start_sph_pos = self.project(self.start_pos);
    }

    /// Rotation from the drag start to `p`.
    ///
    /// Every call measures against the point given to the last
    /// [`begin_tracking`](Self::begin_tracking); nothing accumulates here. A
    /// degenerate axis (pointer back on the start point, or a zero radius)
    /// yields [`Quat::IDENTITY`].
    #[must_use]
    pub fn track(&self, p: Vec2) -> Quat {
        self.try_track(p).unwrap_or_else(|_| {
            log::trace!("trackball axis degenerate at {p:?}, no rotation");
            Quat::IDENTITY
        })
    }

    /// Like [`track`](Self::track) but reports a NaN or infinite axis as
    /// [`MathError::DegenerateAxis`].
    pub fn try_track(&self, p: Vec2) -> Result<Quat, MathError> {
        let rel = p - self.center;
        let angle = (rel - self.start_pos).length() * SENSITIVITY / self.radius;
        let axis = self.project(rel).cross(self.start_sph_pos).normal();
        if axis.has_nan() || axis.has_inf() {
            return Err(MathError::DegenerateAxis);
        }
        Ok(Quat::from_axis_angle(axis, angle))
    }

    fn project(&self, rel: Vec2) -> Vec3 {
        Vec3::new(rel.x(), rel.y(), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx;

    #[test]
    fn begin_tracking_is_relative_to_center() {
        let mut tb = TrackBall::new(Vec2::new(100.0, 50.0), 80.0);
        tb.begin_tracking(Vec2::new(110.0, 40.0));
        assert_eq!(tb.start_pos(), Vec2::new(10.0, -10.0));
        assert_eq!(tb.start_sph_pos(), Vec3::new(10.0, -10.0, 80.0));
    }

    #[test]
    fn no_movement_is_identity() {
        let mut tb = TrackBall::new(Vec2::new(200.0, 150.0), 300.0);
        let p = Vec2::new(230.0, 120.0);
        tb.begin_tracking(p);
        assert_eq!(tb.track(p), Quat::IDENTITY);
        assert_eq!(tb.try_track(p), Err(MathError::DegenerateAxis));
    }

    #[test]
    fn opposite_points_on_flat_hemisphere_are_degenerate() {
        // With a zero radius both projections lie on the plane z = 0 and
        // are antiparallel, so their cross product vanishes.
        let mut tb = TrackBall::new(Vec2::ZERO, 0.0);
        tb.begin_tracking(Vec2::new(1.0, 0.0));
        let q = tb.track(Vec2::new(-1.0, 0.0));
        assert_eq!(q, Quat::IDENTITY);
        assert!(!q.as_array().iter().any(|c| c.is_nan()));
    }

    #[test]
    fn angle_and_axis_follow_drag() {
        let radius = 100.0;
        let mut tb = TrackBall::new(Vec2::ZERO, radius);
        tb.begin_tracking(Vec2::ZERO);
        let q = tb.track(Vec2::new(10.0, 0.0));

        // (10, 0, r) × (0, 0, r) = (0, -10r, 0)
        let expected_axis = Vec3::new(0.0, -1.0, 0.0);
        let expected_angle = 10.0 * SENSITIVITY / radius;
        let expected = Quat::from_axis_angle(expected_axis, expected_angle);
        for i in 0..4 {
            assert!(approx(q.as_array()[i], expected.as_array()[i]));
        }
    }

    #[test]
    fn track_does_not_accumulate() {
        let mut tb = TrackBall::new(Vec2::ZERO, 50.0);
        tb.begin_tracking(Vec2::new(5.0, 5.0));
        let first = tb.track(Vec2::new(15.0, 5.0));
        let _ = tb.track(Vec2::new(40.0, -20.0));
        assert_eq!(tb.track(Vec2::new(15.0, 5.0)), first);
    }

    #[test]
    fn rotation_is_unit_length() {
        let mut tb = TrackBall::new(Vec2::new(320.0, 240.0), 480.0);
        tb.begin_tracking(Vec2::new(300.0, 250.0));
        let q = tb.track(Vec2::new(380.0, 200.0));
        assert!(approx(q.length(), 1.0));
        assert!(q.w() < 1.0);
    }
}
