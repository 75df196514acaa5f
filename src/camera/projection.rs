//! Orthographic and perspective projection from screen size and view range.
//!
//! The view range is the diameter of the world-space region meant to be
//! visible. Orthographic extents derive from it directly; the perspective
//! matrix pushes the scene back by one view range so an object of that
//! diameter centred on the camera position fills the frame about as much as
//! it does orthographically. Depth maps to [0, 1] (wgpu convention).

use glam::{Mat4, Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::frame::OrientationFrame;

/// Orthographic near/far planes sit at this multiple of the half range.
const ORTHO_DEPTH_FACTOR: f32 = 1000.0;
/// Perspective near plane distance.
const PERSPECTIVE_NEAR: f32 = 1.0;
/// Perspective far plane as a multiple of the view range.
const PERSPECTIVE_FAR_FACTOR: f32 = 10_000.0;

/// Projection mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Parallel projection.
    #[default]
    Orthographic,
    /// Pinhole projection with the field of view on the narrower axis.
    Perspective,
}

/// Inputs of the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Screen (or viewport) width in pixels.
    pub width: f32,
    /// Screen (or viewport) height in pixels.
    pub height: f32,
    /// Field of view in degrees, applied to the narrower screen axis.
    pub field_of_view: f32,
    /// Diameter of the visible world-space region.
    pub view_range: f32,
    /// Orthographic or perspective.
    pub kind: ProjectionKind,
}

/// Which eye of a stereo pair to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereoEye {
    /// Eye offset toward -right.
    Left,
    /// Eye offset toward +right.
    Right,
}

impl StereoEye {
    fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// View and projection matrices for one eye of a stereo pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoView {
    /// Eye-offset view matrix.
    pub view: Mat4,
    /// Off-axis perspective projection.
    pub projection: Mat4,
}

impl ProjectionState {
    /// Bundle projection inputs.
    #[must_use]
    pub fn new(
        width: f32,
        height: f32,
        field_of_view: f32,
        view_range: f32,
        kind: ProjectionKind,
    ) -> Self {
        Self {
            width,
            height,
            field_of_view,
            view_range,
            kind,
        }
    }

    /// Same state with a different screen size.
    #[must_use]
    pub fn with_size(self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Screen size with zero (or negative) dimensions coerced to 1.
    fn screen(&self) -> (f32, f32) {
        let coerce = |v: f32| if v > 0.0 { v } else { 1.0 };
        (coerce(self.width), coerce(self.height))
    }

    /// Half the view range.
    #[must_use]
    pub fn half_range(&self) -> f32 {
        self.view_range * 0.5
    }

    /// Orthographic `(horizontal, vertical)` half-extents. The narrower
    /// axis spans exactly the view range.
    #[must_use]
    pub fn half_extents(&self) -> (f32, f32) {
        let (w, h) = self.screen();
        let half = self.half_range();
        if w <= h {
            (half, half * h / w)
        } else {
            (half * w / h, half)
        }
    }

    /// Vertical field of view in radians, widened when the screen is
    /// portrait so the configured angle lands on the horizontal axis.
    fn vertical_fov(&self) -> f32 {
        let (w, h) = self.screen();
        let fov = self.field_of_view.to_radians();
        if w <= h {
            2.0 * ((fov * 0.5).tan() * h / w).atan()
        } else {
            fov
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let half = self.half_range();
        match self.kind {
            ProjectionKind::Orthographic => {
                let (hx, hy) = self.half_extents();
                Mat4::orthographic_rh(
                    -hx,
                    hx,
                    -hy,
                    hy,
                    -half * ORTHO_DEPTH_FACTOR,
                    half * ORTHO_DEPTH_FACTOR,
                )
            }
            ProjectionKind::Perspective => {
                let (w, h) = self.screen();
                Mat4::perspective_rh(
                    self.vertical_fov(),
                    w / h,
                    PERSPECTIVE_NEAR,
                    self.view_range * PERSPECTIVE_FAR_FACTOR,
                ) * distance_compensation(half)
            }
        }
    }

    /// One eye of a parallel-axis stereo pair.
    ///
    /// The eye sits `interocular / 2` along the frame's right vector and
    /// its frustum is sheared so both eyes converge at `convergence_depth`.
    #[must_use]
    pub fn stereo_view(
        &self,
        frame: &OrientationFrame,
        eye: StereoEye,
        interocular: f32,
        convergence_depth: f32,
    ) -> StereoView {
        let (w, h) = self.screen();
        let half_eye = interocular * 0.5;
        let near = PERSPECTIVE_NEAR;
        let top = (self.vertical_fov() * 0.5).tan() * near;
        let shift = if convergence_depth > 0.0 {
            half_eye * near / convergence_depth
        } else {
            0.0
        };
        let frustum_shift = -eye.sign() * shift;
        let aspect = w / h;

        let projection = off_axis_frustum(
            -aspect * top + frustum_shift,
            aspect * top + frustum_shift,
            -top,
            top,
            near,
            self.view_range * PERSPECTIVE_FAR_FACTOR,
        ) * distance_compensation(self.half_range());

        let eye_position =
            frame.position() + frame.right() * (eye.sign() * half_eye);
        let view = Mat4::look_at_rh(
            eye_position,
            eye_position + frame.view_direction(),
            frame.up(),
        ) * Mat4::from_scale(Vec3::splat(frame.zoom()));

        StereoView { view, projection }
    }
}

fn distance_compensation(half_range: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -half_range * 2.0))
}

/// Right-handed off-centre perspective frustum with [0, 1] depth.
fn off_axis_frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let inv_width = 1.0 / (right - left);
    let inv_height = 1.0 / (top - bottom);
    let r = far / (near - far);
    Mat4::from_cols(
        Vec4::new(2.0 * near * inv_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near * inv_height, 0.0, 0.0),
        Vec4::new(
            (right + left) * inv_width,
            (top + bottom) * inv_height,
            r,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, r * near, 0.0),
    )
}
