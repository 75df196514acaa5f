//! Input handling: event types, pointer state, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Cursor position and held-button tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;
/// winit window-event adapter.
#[cfg(feature = "viewer")]
mod window;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
