//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, the rubber band). It is the only thing that sits between
//! raw window events and
//! [`CameraController::execute`](crate::camera::controller::CameraController::execute).
//!
//! Gestures: left drag rotates, right drag pans, middle drag zooms, the
//! wheel zooms toward the cursor. After [`InputProcessor::arm_window_zoom`]
//! the next left drag draws a rubber band instead of rotating, and its
//! release produces a window-zoom command.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::PointerState;
use crate::camera::command::CameraCommand;
use crate::camera::viewport::ViewportRegion;

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Cursor position and held buttons.
    pointer: PointerState,
    /// Next left press starts a rubber band.
    window_zoom_armed: bool,
    /// Anchor corner of the rubber band being drawn.
    band_start: Option<Vec2>,
}

impl InputProcessor {
    /// Create a new processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.pointer.position()
    }

    /// Make the next left drag draw a rubber band.
    pub fn arm_window_zoom(&mut self) {
        self.window_zoom_armed = true;
    }

    /// Disarm window zoom and drop any band in progress.
    pub fn cancel_window_zoom(&mut self) {
        self.window_zoom_armed = false;
        self.band_start = None;
    }

    /// Whether window zoom is armed or a band is being drawn.
    #[must_use]
    pub fn is_window_zoom_armed(&self) -> bool {
        self.window_zoom_armed
    }

    /// Rubber band currently being drawn, for overlay rendering.
    #[must_use]
    pub fn rubber_band(&self) -> Option<ViewportRegion> {
        self.band_start
            .map(|start| ViewportRegion::from_corners(start, self.cursor()))
    }

    /// Release every button without producing commands, e.g. when the
    /// window loses focus mid-drag.
    pub fn release_mouse_state(&mut self) {
        self.pointer.release_all();
        self.band_start = None;
    }

    /// Process a platform-agnostic input event and return a command if
    /// one results.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::WheelZoom {
                notches: delta,
                cursor: self.cursor(),
            }),
        }
    }

    /// Cursor moved: produce a drag command for the held button. Left
    /// wins over right, right over middle.
    fn handle_cursor_moved(&mut self, current: Vec2) -> Option<CameraCommand> {
        let previous = self.pointer.move_to(current)?;

        // The band follows the cursor; nothing to emit until release.
        if self.band_start.is_some() {
            return None;
        }

        if self.pointer.is_held(MouseButton::Left) {
            Some(CameraCommand::Rotate {
                delta: previous - current,
            })
        } else if self.pointer.is_held(MouseButton::Right) {
            Some(CameraCommand::Pan {
                from: previous,
                to: current,
            })
        } else if self.pointer.is_held(MouseButton::Middle) {
            Some(CameraCommand::DragZoom {
                from: previous,
                to: current,
            })
        } else {
            None
        }
    }

    /// Mouse button press/release: track state and finish rubber bands.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if button == MouseButton::Left {
            if pressed && self.window_zoom_armed {
                self.band_start = Some(self.cursor());
                return None;
            }
            if !pressed {
                if let Some(start) = self.band_start.take() {
                    self.window_zoom_armed = false;
                    return Some(CameraCommand::WindowZoom {
                        band: ViewportRegion::from_corners(start, self.cursor()),
                    });
                }
            }
        }

        self.pointer.set_held(button, pressed);
        None
    }
}
