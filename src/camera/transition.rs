//! Tick-driven camera transitions.
//!
//! One transition runs at a time: a slerp to a view preset, a fit-all, or a
//! window zoom. Each [`TransitionState::advance`] moves progress forward by
//! a fixed step. Preset transitions interpolate position absolutely; fit-all
//! and window-zoom add `pan * step` to the live position every tick and
//! snap to `start + pan` on the last one.

use glam::{Quat, Vec3};

use crate::camera::frame::OrientationFrame;
use crate::camera::preset::ViewPreset;

/// Progress within this distance of 1 counts as complete.
const COMPLETION_EPSILON: f32 = 1e-4;
/// Smallest accepted per-tick step; keeps a transition finite.
const MIN_STEP: f32 = 1e-3;

/// What a transition is animating toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Rotate to a preset orientation while re-centring on the scene.
    Preset(ViewPreset),
    /// Pan and zoom so the scene bounding sphere fills the view.
    FitAll,
    /// Pan and zoom onto a rubber-band rectangle.
    WindowZoom,
}

/// Result of one [`TransitionState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// Nothing was running; the frame is untouched.
    Idle,
    /// The frame moved and more ticks are needed.
    Running,
    /// The frame was snapped to the target; the transition is over.
    Finished,
}

/// Interpolation state of the running transition, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    kind: Option<TransitionKind>,
    progress: f32,
    step: f32,
    start_rotation: Quat,
    target_rotation: Quat,
    start_position: Vec3,
    target_position: Vec3,
    pan: Vec3,
    start_range: f32,
    target_range: f32,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new(0.02)
    }
}

impl TransitionState {
    /// Inactive state advancing by `step` per tick once started.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            kind: None,
            progress: 0.0,
            step: sanitize_step(step),
            start_rotation: Quat::IDENTITY,
            target_rotation: Quat::IDENTITY,
            start_position: Vec3::ZERO,
            target_position: Vec3::ZERO,
            pan: Vec3::ZERO,
            start_range: 0.0,
            target_range: 0.0,
        }
    }

    /// Change the per-tick progress increment. Clamped to `(0, 1]`.
    pub fn set_step(&mut self, step: f32) {
        self.step = sanitize_step(step);
    }

    /// Per-tick progress increment.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }

    /// The running transition, if any.
    #[must_use]
    pub fn kind(&self) -> Option<TransitionKind> {
        self.kind
    }

    /// Progress in `[0, 1]`; 0 when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// View range the running transition ends at.
    #[must_use]
    pub fn target_range(&self) -> Option<f32> {
        self.kind.map(|_| self.target_range)
    }

    /// Start a preset transition from `frame`, ending at the preset's
    /// orientation positioned on `center` with view range `target_range`.
    /// Replaces any running transition.
    pub fn begin_preset(
        &mut self,
        preset: ViewPreset,
        frame: &OrientationFrame,
        view_range: f32,
        center: Vec3,
        target_range: f32,
    ) {
        self.restart(TransitionKind::Preset(preset), frame, view_range);
        self.target_rotation = preset.rotation();
        self.target_position = center;
        self.target_range = target_range;
        log::debug!("transition to {} started", preset.label());
    }

    /// Start a fit-all or window-zoom transition that pans by `pan` and
    /// ends at `target_range`. Replaces any running transition.
    pub fn begin_zoom_pan(
        &mut self,
        kind: TransitionKind,
        frame: &OrientationFrame,
        view_range: f32,
        pan: Vec3,
        target_range: f32,
    ) {
        self.restart(kind, frame, view_range);
        self.target_rotation = self.start_rotation;
        self.pan = pan;
        self.target_position = self.start_position + pan;
        self.target_range = target_range;
        log::debug!(
            "{kind:?} transition started: pan {pan}, range {view_range} -> \
             {target_range}"
        );
    }

    /// Stop without snapping; the frame keeps its interpolated state.
    pub fn cancel(&mut self) {
        if let Some(kind) = self.kind.take() {
            log::debug!("{kind:?} transition cancelled at {:.2}", self.progress);
        }
        self.progress = 0.0;
    }

    fn restart(
        &mut self,
        kind: TransitionKind,
        frame: &OrientationFrame,
        view_range: f32,
    ) {
        self.kind = Some(kind);
        self.progress = 0.0;
        self.start_rotation = frame.rotation();
        self.start_position = frame.position();
        self.start_range = view_range;
        self.pan = Vec3::ZERO;
    }

    /// Advance one tick, writing the interpolated frame and view range.
    pub fn advance(
        &mut self,
        frame: &mut OrientationFrame,
        view_range: &mut f32,
    ) -> TransitionStatus {
        let Some(kind) = self.kind else {
            return TransitionStatus::Idle;
        };

        self.progress += self.step;
        let t = self.progress.min(1.0);

        match kind {
            TransitionKind::Preset(_) => {
                frame.set_rotation(self.start_rotation.slerp(self.target_rotation, t));
                frame.set_position(self.start_position.lerp(self.target_position, t));
            }
            TransitionKind::FitAll | TransitionKind::WindowZoom => {
                frame.translate(self.pan * self.step);
            }
        }
        *view_range -= (self.start_range - self.target_range) * self.step;

        if self.progress >= 1.0 - COMPLETION_EPSILON {
            self.finish(frame, view_range);
            return TransitionStatus::Finished;
        }
        TransitionStatus::Running
    }

    fn finish(&mut self, frame: &mut OrientationFrame, view_range: &mut f32) {
        let Some(kind) = self.kind.take() else {
            return;
        };
        if let TransitionKind::Preset(preset) = kind {
            let b = preset.basis();
            if let Err(e) = frame.set_basis(b.view, b.up, b.right) {
                log::warn!("{} preset rejected: {e}", preset.label());
            }
        }
        frame.set_position(self.target_position);
        *view_range = self.target_range;
        self.progress = 0.0;
        log::debug!("{kind:?} transition finished");
    }
}

fn sanitize_step(step: f32) -> f32 {
    if step.is_finite() {
        step.clamp(MIN_STEP, 1.0)
    } else {
        MIN_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn run_to_end(
        state: &mut TransitionState,
        frame: &mut OrientationFrame,
        range: &mut f32,
    ) -> usize {
        let mut ticks = 0;
        while state.advance(frame, range) == TransitionStatus::Running {
            ticks += 1;
            assert!(ticks < 10_000, "transition never finished");
        }
        ticks + 1
    }

    #[test]
    fn idle_advance_is_a_no_op() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        let mut range = 10.0;
        assert_eq!(state.advance(&mut frame, &mut range), TransitionStatus::Idle);
        assert_eq!(frame, OrientationFrame::new());
        assert_eq!(range, 10.0);
    }

    #[test]
    fn window_zoom_pan_accumulates_per_tick() {
        let mut state = TransitionState::new(0.02);
        let mut frame = OrientationFrame::new();
        let mut range = 100.0;
        state.begin_zoom_pan(
            TransitionKind::WindowZoom,
            &frame,
            range,
            Vec3::new(10.0, 0.0, 0.0),
            50.0,
        );

        for _ in 0..10 {
            let _ = state.advance(&mut frame, &mut range);
        }
        // Ten increments of pan * 0.02.
        assert!(frame.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        assert!((range - 90.0).abs() < 1e-3);
        assert!((state.progress() - 0.2).abs() < EPS);

        let _ = run_to_end(&mut state, &mut frame, &mut range);
        assert_eq!(frame.position(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(range, 50.0);
        assert!(!state.is_active());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn fifty_ticks_complete_at_default_step() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        let mut range = 200.0;
        state.begin_zoom_pan(TransitionKind::FitAll, &frame, range, Vec3::ONE, 20.0);
        assert_eq!(run_to_end(&mut state, &mut frame, &mut range), 50);
    }

    #[test]
    fn preset_transition_converges() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        frame.rotate_around_up(37.0);
        frame.rotate_around_right(-12.0);
        let mut range = 80.0;
        let center = Vec3::new(1.0, 2.0, 3.0);

        state.begin_preset(ViewPreset::NeIsometric, &frame, range, center, 30.0);
        assert_eq!(state.kind(), Some(TransitionKind::Preset(ViewPreset::NeIsometric)));
        let _ = run_to_end(&mut state, &mut frame, &mut range);

        let target = ViewPreset::NeIsometric.frame_at(center);
        assert!(frame.view_direction().abs_diff_eq(target.view_direction(), EPS));
        assert!(frame.up().abs_diff_eq(target.up(), EPS));
        assert!(frame.right().abs_diff_eq(target.right(), EPS));
        assert_eq!(frame.position(), center);
        assert_eq!(range, 30.0);

        let settled = frame;
        for _ in 0..5 {
            assert_eq!(state.advance(&mut frame, &mut range), TransitionStatus::Idle);
        }
        assert_eq!(frame, settled);
    }

    #[test]
    fn preset_midway_stays_orthonormal() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        let mut range = 10.0;
        state.begin_preset(ViewPreset::Trimetric, &frame, range, Vec3::ZERO, 10.0);
        for _ in 0..25 {
            let _ = state.advance(&mut frame, &mut range);
            assert!(frame.is_orthonormal(EPS));
        }
        assert!(state.is_active());
    }

    #[test]
    fn new_transition_replaces_running_one() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        let mut range = 10.0;
        state.begin_preset(ViewPreset::Front, &frame, range, Vec3::ZERO, 10.0);
        let _ = state.advance(&mut frame, &mut range);

        state.begin_zoom_pan(TransitionKind::FitAll, &frame, range, Vec3::X, 5.0);
        assert_eq!(state.kind(), Some(TransitionKind::FitAll));
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn cancel_keeps_interpolated_frame() {
        let mut state = TransitionState::default();
        let mut frame = OrientationFrame::new();
        let mut range = 10.0;
        state.begin_zoom_pan(TransitionKind::WindowZoom, &frame, range, Vec3::Y, 5.0);
        let _ = state.advance(&mut frame, &mut range);
        let moved = frame.position();

        state.cancel();
        assert!(!state.is_active());
        assert_eq!(state.advance(&mut frame, &mut range), TransitionStatus::Idle);
        assert_eq!(frame.position(), moved);
    }

    #[test]
    fn step_is_clamped() {
        let mut state = TransitionState::new(0.0);
        assert_eq!(state.step(), MIN_STEP);
        state.set_step(5.0);
        assert_eq!(state.step(), 1.0);
        state.set_step(f32::NAN);
        assert_eq!(state.step(), MIN_STEP);
    }
}
