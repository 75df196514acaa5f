//! winit `WindowEvent` adapter.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use super::event::{InputEvent, MouseButton};

/// Pixels of precise (touchpad) scrolling per wheel notch.
const PIXELS_PER_NOTCH: f32 = 100.0;

impl InputEvent {
    /// Translate a winit window event, `None` for events the camera does
    /// not consume.
    #[must_use]
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(Self::MouseButton {
                    button: MouseButton::from_winit(*button)?,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / PIXELS_PER_NOTCH
                    }
                };
                Some(Self::Scroll { delta: notches })
            }
            _ => None,
        }
    }
}
