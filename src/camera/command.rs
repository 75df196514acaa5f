//! Discrete camera commands.
//!
//! Input handling turns pointer and wheel events into these; UI
//! collaborators construct them directly (preset buttons, projection
//! toggle). [`CameraController::execute`] applies them.
//!
//! [`CameraController::execute`]: crate::camera::controller::CameraController::execute

use glam::Vec2;

use crate::camera::preset::ViewPreset;
use crate::camera::projection::ProjectionKind;
use crate::camera::viewport::{ViewLayout, ViewportRegion};

/// A request to move or reconfigure the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Orbit by a pointer delta (`previous - current`, pixels).
    Rotate {
        /// Pointer delta in pixels.
        delta: Vec2,
    },
    /// Drag the scene from one pointer position to another.
    Pan {
        /// Previous pointer position.
        from: Vec2,
        /// Current pointer position.
        to: Vec2,
    },
    /// Drag zoom: moving right or up zooms in.
    DragZoom {
        /// Previous pointer position.
        from: Vec2,
        /// Current pointer position.
        to: Vec2,
    },
    /// Wheel zoom toward the cursor. Positive notches zoom in.
    WheelZoom {
        /// Wheel notches.
        notches: f32,
        /// Pointer position.
        cursor: Vec2,
    },
    /// Animate onto a rubber-band rectangle.
    WindowZoom {
        /// Rectangle in window pixels.
        band: ViewportRegion,
    },
    /// Animate to a preset orientation.
    SetView {
        /// Target preset.
        preset: ViewPreset,
    },
    /// Animate so the scene bounds fill the view.
    FitAll,
    /// Switch projection mode.
    SetProjection {
        /// New projection.
        kind: ProjectionKind,
    },
    /// Switch between the single and quad layouts.
    SetLayout {
        /// New layout.
        layout: ViewLayout,
    },
}
