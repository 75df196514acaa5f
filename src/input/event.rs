/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::command::CameraCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) =
///     input_processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 })
/// {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position (top-left origin).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel in notches (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button: rotate, or rubber band when armed.
    Left,
    /// Secondary (right) mouse button: pan.
    Right,
    /// Middle mouse button (wheel click): zoom.
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button, `None` for side and extra buttons the camera
    /// does not bind.
    #[must_use]
    pub const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => None,
        }
    }
}
