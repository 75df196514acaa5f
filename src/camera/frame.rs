//! Orthonormal camera frame: position, view/up/right basis and zoom.
//!
//! Rotations are incremental and in degrees. Each one rotates a single
//! basis vector inside a plane of the current basis and re-derives the
//! dependent vector by a cross product, so the frame never drifts away
//! from orthonormality no matter how many operations are applied.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use crate::error::ViewerError;

/// Accumulated rotation counters wrap back to zero beyond this magnitude.
const ACCUMULATOR_LIMIT: f32 = 360.0;

/// Relative length below which a basis component counts as parallel to the
/// view direction.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Pitch, yaw and roll of a view rotation, in degrees.
///
/// Decomposed in Y-X-Z order: `R = Ry(yaw) · Rx(pitch) · Rz(roll)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationAngles {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Y axis.
    pub yaw: f32,
    /// Rotation about the Z axis.
    pub roll: f32,
}

/// Right-handed camera basis plus position.
///
/// Invariant: `view`, `up` and `right` are unit length and mutually
/// perpendicular, with `right = view × up` and `up = -(view × right)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFrame {
    position: Vec3,
    view: Vec3,
    up: Vec3,
    right: Vec3,
    zoom: f32,
    /// Display-only rotation counters about right (x), up (y) and view (z).
    accumulated: Vec3,
}

impl Default for OrientationFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationFrame {
    /// Canonical frame: at the origin looking down -Z with +Y up.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            view: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            zoom: 1.0,
            accumulated: Vec3::ZERO,
        }
    }

    /// Build a frame from an arbitrary basis; see [`Self::set_basis`].
    ///
    /// # Errors
    ///
    /// [`ViewerError::DegenerateBasis`] when the basis cannot be
    /// orthonormalized.
    pub fn from_basis(
        position: Vec3,
        view: Vec3,
        up: Vec3,
        right: Vec3,
    ) -> Result<Self, ViewerError> {
        let mut frame = Self::new();
        frame.position = position;
        frame.set_basis(view, up, right)?;
        Ok(frame)
    }

    /// Return to the canonical frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// World-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.view
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Uniform scale applied after the look-at transform.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Accumulated rotation counters (degrees) about right, up and view,
    /// each kept within [-360, 360]. For display only.
    #[must_use]
    pub fn accumulated_angles(&self) -> Vec3 {
        self.accumulated
    }

    /// Pitch: rotate the view direction toward the up vector.
    pub fn rotate_around_right(&mut self, degrees: f32) {
        self.accumulated.x = accumulate(self.accumulated.x, degrees);
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.view = (self.view * cos + self.up * sin).normalize();
        self.up = -self.view.cross(self.right).normalize();
    }

    /// Yaw: rotate the view direction away from the right vector.
    pub fn rotate_around_up(&mut self, degrees: f32) {
        self.accumulated.y = accumulate(self.accumulated.y, degrees);
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.view = (self.view * cos - self.right * sin).normalize();
        self.right = self.view.cross(self.up).normalize();
    }

    /// Roll: rotate the right vector toward the up vector.
    pub fn rotate_around_view(&mut self, degrees: f32) {
        self.accumulated.z = accumulate(self.accumulated.z, degrees);
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.right = (self.right * cos + self.up * sin).normalize();
        self.up = -self.view.cross(self.right).normalize();
    }

    /// Offset the position by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Move along the negated view direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.view * -distance;
    }

    /// Move along the up vector.
    pub fn move_upward(&mut self, distance: f32) {
        self.position += self.up * distance;
    }

    /// Move along the right vector.
    pub fn move_across(&mut self, distance: f32) {
        self.position += self.right * distance;
    }

    /// Place the camera at an absolute world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the uniform scale applied after the look-at transform.
    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom = factor;
    }

    /// Adopt an externally supplied basis.
    ///
    /// The inputs need not be unit length or exactly perpendicular. The view
    /// direction is kept, `right` is made perpendicular to it (falling back
    /// to `view × up` when `right` is parallel to the view), and `up` is
    /// re-derived. The accumulated counters are reseeded from the resulting
    /// rotation angles.
    ///
    /// # Errors
    ///
    /// [`ViewerError::DegenerateBasis`] when the view direction is zero or
    /// both `right` and `up` are parallel to it. The frame is left
    /// unchanged.
    pub fn set_basis(
        &mut self,
        view: Vec3,
        up: Vec3,
        right: Vec3,
    ) -> Result<(), ViewerError> {
        let view = view.try_normalize().ok_or(ViewerError::DegenerateBasis)?;
        let right = perpendicular_part(right, view)
            .or_else(|| perpendicular_part(view.cross(up), view))
            .ok_or(ViewerError::DegenerateBasis)?;

        self.view = view;
        self.right = right;
        self.up = -view.cross(right).normalize();
        self.reseed_accumulated();
        Ok(())
    }

    /// Rotation block of the view matrix: rows are right, up and -view.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_cols(self.right, self.up, -self.view).transpose()
    }

    /// Quaternion of the view rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&self.rotation_matrix()).normalize()
    }

    /// Adopt the basis encoded by a view rotation quaternion.
    pub fn set_rotation(&mut self, rotation: Quat) {
        let m = Mat3::from_quat(rotation.normalize());
        self.right = m.row(0).normalize();
        self.up = m.row(1).normalize();
        self.view = -m.row(2).normalize();
        self.reseed_accumulated();
    }

    fn reseed_accumulated(&mut self) {
        let angles = self.rotation_angles();
        self.accumulated = Vec3::new(angles.pitch, angles.yaw, angles.roll);
    }

    /// Pitch/yaw/roll of the current view rotation.
    #[must_use]
    pub fn rotation_angles(&self) -> RotationAngles {
        let (yaw, pitch, roll) = self.rotation().to_euler(EulerRot::YXZ);
        RotationAngles {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    /// Right-handed look-at from the position along the view direction,
    /// followed by the zoom scale.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.view, self.up)
            * Mat4::from_scale(Vec3::splat(self.zoom))
    }

    /// Whether the basis is orthonormal within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.view)
            && unit(self.up)
            && unit(self.right)
            && self.view.dot(self.up).abs() <= tolerance
            && self.view.dot(self.right).abs() <= tolerance
            && self.up.dot(self.right).abs() <= tolerance
    }
}

fn accumulate(total: f32, delta: f32) -> f32 {
    let next = total + delta;
    if next.abs() > ACCUMULATOR_LIMIT {
        0.0
    } else {
        next
    }
}

/// Unit component of `v` perpendicular to the unit `axis`, if significant.
fn perpendicular_part(v: Vec3, axis: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    let rejected = v - axis * v.dot(axis);
    if rejected.length() <= PARALLEL_EPSILON * length {
        return None;
    }
    rejected.try_normalize()
}
