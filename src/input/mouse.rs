use glam::Vec2;

use super::event::MouseButton;

/// Cursor position and held buttons.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    position: Option<Vec2>,
    held: [bool; 3],
}

const fn slot(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

impl PointerState {
    /// Last known cursor position, origin before the first move.
    pub(crate) fn position(&self) -> Vec2 {
        self.position.unwrap_or(Vec2::ZERO)
    }

    /// Record a cursor move and return the previous position, `None` on
    /// the first move.
    pub(crate) fn move_to(&mut self, position: Vec2) -> Option<Vec2> {
        self.position.replace(position)
    }

    pub(crate) fn set_held(&mut self, button: MouseButton, held: bool) {
        self.held[slot(button)] = held;
    }

    pub(crate) fn is_held(&self, button: MouseButton) -> bool {
        self.held[slot(button)]
    }

    /// Forget held buttons, e.g. after focus loss.
    pub(crate) fn release_all(&mut self) {
        self.held = [false; 3];
    }
}
