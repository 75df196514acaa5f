//! Camera controller: owns the frame, projection and transition state and
//! applies navigation.
//!
//! Pointer navigation mutates the frame directly and cancels any running
//! transition. Preset, fit-all and window-zoom requests start a transition
//! that [`CameraController::tick`] advances at a fixed period. Every change
//! raises a redraw flag the renderer drains with
//! [`CameraController::take_redraw_request`].

use glam::{Mat4, Vec2, Vec3};
use web_time::Instant;

use crate::bounds::BoundingSphere;
use crate::camera::clipping::ClipPlanes;
use crate::camera::command::CameraCommand;
use crate::camera::frustum::Frustum;
use crate::camera::frame::{OrientationFrame, RotationAngles};
use crate::camera::preset::ViewPreset;
use crate::camera::projection::{ProjectionKind, ProjectionState};
use crate::camera::transition::{
    TransitionKind, TransitionState, TransitionStatus,
};
use crate::camera::viewport::{ViewLayout, ViewportRegion, ViewportView};
use crate::options::{CameraOptions, NavigationOptions, Options};
use crate::util::TickClock;

/// Matrices and region of one rendered viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportCamera {
    /// Pixel rectangle to render into.
    pub region: ViewportRegion,
    /// Fixed preset of the viewport, `None` for the navigated camera.
    pub preset: Option<ViewPreset>,
    /// View matrix.
    pub view: Mat4,
    /// Projection matrix sized to the region.
    pub projection: Mat4,
}

impl ViewportCamera {
    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Clip volume of this viewport, for culling.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_projection())
    }
}

/// Pan and zoom ratio computed from a rubber band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowZoomPlan {
    /// World-space offset from the viewport centre to the band centre.
    pub pan: Vec3,
    /// `min(viewport.w / band.w, viewport.h / band.h)`.
    pub ratio: f32,
}

/// Interactive camera for one viewer window.
#[derive(Debug)]
pub struct CameraController {
    frame: OrientationFrame,
    projection: ProjectionState,
    transition: TransitionState,
    scene_bounds: BoundingSphere,
    fit_diameter: f32,
    layout: ViewLayout,
    clip_planes: ClipPlanes,
    current_preset: Option<ViewPreset>,
    camera_options: CameraOptions,
    navigation: NavigationOptions,
    redraw_requested: bool,
    /// A transition began since the last clock poll; the clock's backlog
    /// predates it.
    clock_stale: bool,
}

impl CameraController {
    /// Controller for a `width` x `height` window, oriented at the
    /// configured initial preset.
    #[must_use]
    pub fn new(options: &Options, width: f32, height: f32) -> Self {
        let camera = options.camera.clone();
        let view_range = camera.limit_view_range(camera.initial_view_range);

        Self {
            frame: camera.initial_preset.frame_at(Vec3::ZERO),
            projection: ProjectionState::new(
                width,
                height,
                camera.field_of_view,
                view_range,
                camera.projection,
            ),
            transition: TransitionState::new(options.animation.step_fraction),
            scene_bounds: BoundingSphere::new(Vec3::ZERO, view_range * 0.5),
            fit_diameter: view_range,
            layout: ViewLayout::Single,
            clip_planes: ClipPlanes::default(),
            current_preset: Some(camera.initial_preset),
            camera_options: camera,
            navigation: options.navigation.clone(),
            redraw_requested: true,
            clock_stale: false,
        }
    }

    /// Re-apply options. Camera state (frame, range, layout) is kept.
    pub fn apply_options(&mut self, options: &Options) {
        self.camera_options = options.camera.clone();
        self.navigation = options.navigation.clone();
        self.transition.set_step(options.animation.step_fraction);
        self.projection.field_of_view = self.camera_options.field_of_view;
        self.projection.kind = self.camera_options.projection;
        self.clamp_view_range();
        self.redraw_requested = true;
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// The navigated orientation frame.
    #[must_use]
    pub fn frame(&self) -> &OrientationFrame {
        &self.frame
    }

    /// Current projection inputs.
    #[must_use]
    pub fn projection(&self) -> &ProjectionState {
        &self.projection
    }

    /// View matrix of the navigated camera.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.frame.view_matrix()
    }

    /// Projection matrix of the full window.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Clip volume of the full window, for culling.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(
            self.projection_matrix() * self.view_matrix(),
        )
    }

    /// Whether the whole scene bounding sphere is inside the view.
    #[must_use]
    pub fn scene_in_view(&self) -> bool {
        self.frustum().contains_sphere(&self.scene_bounds, 1e-3)
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.frame.position()
    }

    /// Diameter of the visible world region.
    #[must_use]
    pub fn view_range(&self) -> f32 {
        self.projection.view_range
    }

    /// Pitch/yaw/roll of the navigated camera.
    #[must_use]
    pub fn rotation_angles(&self) -> RotationAngles {
        self.frame.rotation_angles()
    }

    /// Last preset requested, cleared by free rotation.
    #[must_use]
    pub fn current_preset(&self) -> Option<ViewPreset> {
        self.current_preset
    }

    /// Active layout.
    #[must_use]
    pub fn layout(&self) -> ViewLayout {
        self.layout
    }

    /// Scene bounding sphere used by fit-all and preset transitions.
    #[must_use]
    pub fn scene_bounds(&self) -> BoundingSphere {
        self.scene_bounds
    }

    /// Section planes.
    #[must_use]
    pub fn clip_planes(&self) -> &ClipPlanes {
        &self.clip_planes
    }

    /// Mutable section planes; raises a redraw.
    pub fn clip_planes_mut(&mut self) -> &mut ClipPlanes {
        self.redraw_requested = true;
        &mut self.clip_planes
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_active()
    }

    /// The running transition, if any.
    #[must_use]
    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.transition.kind()
    }

    /// Every viewport of the active layout with its matrices. Quad
    /// quadrants show their fixed preset from the navigated position and
    /// zoom, each with a projection sized to its region.
    #[must_use]
    pub fn viewports(&self) -> Vec<ViewportCamera> {
        self.layout
            .regions(self.projection.width, self.projection.height)
            .into_iter()
            .map(|view| self.viewport_camera(view))
            .collect()
    }

    fn viewport_camera(&self, view: ViewportView) -> ViewportCamera {
        match view.preset {
            None => ViewportCamera {
                region: view.region,
                preset: None,
                view: self.frame.view_matrix(),
                projection: self.projection.matrix(),
            },
            Some(preset) => {
                let mut frame = preset.frame_at(self.frame.position());
                frame.set_zoom(self.frame.zoom());
                ViewportCamera {
                    region: view.region,
                    preset: Some(preset),
                    view: frame.view_matrix(),
                    projection: self
                        .projection
                        .with_size(view.region.width, view.region.height)
                        .matrix(),
                }
            }
        }
    }

    fn viewport_at(&self, point: Vec2) -> ViewportCamera {
        self.viewport_camera(self.layout.region_at(
            self.projection.width,
            self.projection.height,
            point,
        ))
    }

    /// World-space vector between two pointer positions, measured at the
    /// depth of the world origin in the viewport under `from`.
    #[must_use]
    pub fn world_offset(&self, from: Vec2, to: Vec2) -> Vec3 {
        let viewport = self.viewport_at(from);
        let view_proj = viewport.view_projection();
        let inverse = view_proj.inverse();
        let depth = viewport.region.project(Vec3::ZERO, view_proj).z;

        let a = viewport.region.unproject(from.extend(depth), inverse);
        let b = viewport.region.unproject(to.extend(depth), inverse);
        let offset = b - a;
        if offset.is_finite() {
            offset
        } else {
            Vec3::ZERO
        }
    }

    // ── Screen & scene ──────────────────────────────────────────────

    /// Window resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.projection = self.projection.with_size(width, height);
        self.redraw_requested = true;
    }

    /// Switch projection mode.
    pub fn set_projection_kind(&mut self, kind: ProjectionKind) {
        self.projection.kind = kind;
        self.redraw_requested = true;
    }

    /// Switch between the single and quad layouts.
    pub fn set_layout(&mut self, layout: ViewLayout) {
        self.layout = layout;
        self.redraw_requested = true;
    }

    /// New model bounds: remember them and fit the view.
    pub fn set_scene_bounds(&mut self, bounds: BoundingSphere) {
        self.scene_bounds = bounds;
        self.fit_diameter = bounds.diameter();
        self.fit_all();
    }

    /// Place the camera without animation.
    pub fn set_frame(&mut self, frame: OrientationFrame) {
        self.transition.cancel();
        self.frame = frame;
        self.current_preset = None;
        self.redraw_requested = true;
    }

    /// Return to the initial preset at the origin with the initial range.
    pub fn reset(&mut self) {
        self.transition.cancel();
        self.frame = self.camera_options.initial_preset.frame_at(Vec3::ZERO);
        self.projection.view_range = self.camera_options.initial_view_range;
        self.clamp_view_range();
        self.current_preset = Some(self.camera_options.initial_preset);
        self.redraw_requested = true;
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Animate to `preset`, re-centred on the scene and zoomed to fit it.
    pub fn set_view(&mut self, preset: ViewPreset) {
        self.transition.begin_preset(
            preset,
            &self.frame,
            self.projection.view_range,
            self.scene_bounds.center,
            self.fit_diameter,
        );
        self.current_preset = Some(preset);
        self.redraw_requested = true;
        self.clock_stale = true;
    }

    /// Animate so the scene bounding sphere fills the view.
    pub fn fit_all(&mut self) {
        self.fit_diameter = self.scene_bounds.diameter();
        let pan = self.scene_bounds.center - self.frame.position();
        self.transition.begin_zoom_pan(
            TransitionKind::FitAll,
            &self.frame,
            self.projection.view_range,
            pan,
            self.fit_diameter,
        );
        self.redraw_requested = true;
        self.clock_stale = true;
    }

    /// Pan and ratio for zooming onto `band`, `None` for a band without
    /// area.
    #[must_use]
    pub fn plan_window_zoom(&self, band: ViewportRegion) -> Option<WindowZoomPlan> {
        if band.is_empty() {
            log::debug!("ignoring empty rubber band {band:?}");
            return None;
        }
        let client = self.viewport_at(band.center()).region;
        let ratio =
            (client.width / band.width).min(client.height / band.height);
        if !(ratio.is_finite() && ratio > 0.0) {
            log::debug!("ignoring rubber band {band:?} in {client:?}");
            return None;
        }
        Some(WindowZoomPlan {
            pan: self.world_offset(client.center(), band.center()),
            ratio,
        })
    }

    /// Animate onto a rubber-band rectangle. Returns whether a transition
    /// started.
    pub fn window_zoom(&mut self, band: ViewportRegion) -> bool {
        let Some(plan) = self.plan_window_zoom(band) else {
            return false;
        };
        let target = self
            .camera_options
            .limit_view_range(self.projection.view_range / plan.ratio);
        self.transition.begin_zoom_pan(
            TransitionKind::WindowZoom,
            &self.frame,
            self.projection.view_range,
            plan.pan,
            target,
        );
        self.redraw_requested = true;
        self.clock_stale = true;
        true
    }

    /// Stop the running transition where it is.
    pub fn cancel_transition(&mut self) {
        self.transition.cancel();
    }

    /// Advance the running transition by one step. Returns `false` when
    /// idle.
    pub fn tick(&mut self) -> bool {
        match self
            .transition
            .advance(&mut self.frame, &mut self.projection.view_range)
        {
            TransitionStatus::Idle => false,
            TransitionStatus::Running | TransitionStatus::Finished => {
                self.clamp_view_range();
                self.redraw_requested = true;
                true
            }
        }
    }

    /// Run every tick `clock` reports due. Returns whether anything moved.
    pub fn tick_for(&mut self, clock: &mut TickClock) -> bool {
        self.tick_for_at(clock, Instant::now())
    }

    /// [`Self::tick_for`] measured at `now`. The first poll after a
    /// transition begins restarts the clock and runs a single step, so
    /// time spent idle before the request is never replayed.
    pub fn tick_for_at(&mut self, clock: &mut TickClock, now: Instant) -> bool {
        let due = if std::mem::take(&mut self.clock_stale) {
            clock.reset(now);
            1
        } else {
            clock.ticks_due_at(now)
        };
        let mut moved = false;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            moved = true;
        }
        moved
    }

    /// Whether a redraw is pending; clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Orbit by a pointer delta (`previous - current`).
    pub fn rotate(&mut self, delta: Vec2) {
        self.transition.cancel();
        let s = self.navigation.rotate_sensitivity;
        self.frame.rotate_around_right(delta.y * s);
        self.frame.rotate_around_up(delta.x * s);
        self.current_preset = None;
        self.redraw_requested = true;
    }

    /// Drag the scene so the point under `from` follows the pointer to
    /// `to`.
    pub fn pan(&mut self, from: Vec2, to: Vec2) {
        self.transition.cancel();
        let offset = self.world_offset(to, from);
        self.frame.translate(offset);
        self.redraw_requested = true;
    }

    /// Drag zoom: moving right or up zooms in, anything else zooms out.
    pub fn drag_zoom(&mut self, from: Vec2, to: Vec2) {
        let zoom_in = to.x > from.x || to.y < from.y;
        let step = self.navigation.zoom_step;
        let factor = if zoom_in { step.recip() } else { step };
        self.zoom_toward(factor, zoom_in, to, from);
    }

    /// Wheel zoom toward `cursor`. Positive notches zoom in.
    pub fn wheel_zoom(&mut self, notches: f32, cursor: Vec2) {
        if notches == 0.0 || !notches.is_finite() {
            return;
        }
        let zoom_in = notches > 0.0;
        let magnitude = self.navigation.zoom_step.powf(notches.abs());
        let factor = if zoom_in { magnitude.recip() } else { magnitude };
        self.zoom_toward(factor, zoom_in, cursor, cursor);
    }

    /// Scale the view range, then nudge the camera toward (zoom in) or
    /// away from (zoom out) `anchor`. `pointer` selects the viewport.
    fn zoom_toward(
        &mut self,
        factor: f32,
        zoom_in: bool,
        pointer: Vec2,
        anchor: Vec2,
    ) {
        self.transition.cancel();
        let centre = self.viewport_at(pointer).region.center();
        let offset = self.world_offset(centre, anchor);

        self.scale_view_range(factor);

        let sign = if zoom_in { 1.0 } else { -1.0 };
        self.frame
            .translate(offset * (sign * self.navigation.zoom_pan_damping));
        self.redraw_requested = true;
    }

    /// Multiply the view range by `factor`, clamped to the configured
    /// limits.
    pub fn scale_view_range(&mut self, factor: f32) {
        self.projection.view_range *= factor;
        self.clamp_view_range();
        self.redraw_requested = true;
    }

    fn clamp_view_range(&mut self) {
        self.projection.view_range = self
            .camera_options
            .limit_view_range(self.projection.view_range);
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Rotate { delta } => self.rotate(delta),
            CameraCommand::Pan { from, to } => self.pan(from, to),
            CameraCommand::DragZoom { from, to } => self.drag_zoom(from, to),
            CameraCommand::WheelZoom { notches, cursor } => {
                self.wheel_zoom(notches, cursor);
            }
            CameraCommand::WindowZoom { band } => {
                let _ = self.window_zoom(band);
            }
            CameraCommand::SetView { preset } => self.set_view(preset),
            CameraCommand::FitAll => self.fit_all(),
            CameraCommand::SetProjection { kind } => {
                self.set_projection_kind(kind);
            }
            CameraCommand::SetLayout { layout } => self.set_layout(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        let _ = env_logger::builder().is_test(true).try_init();
        CameraController::new(&Options::default(), 800.0, 600.0)
    }

    fn settle(camera: &mut CameraController) -> usize {
        let mut ticks = 0;
        while camera.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "transition never finished");
        }
        ticks
    }

    #[test]
    fn starts_at_initial_preset() {
        let mut camera = controller();
        assert_eq!(camera.current_preset(), Some(ViewPreset::SeIsometric));
        assert_eq!(camera.view_range(), 200.0);
        assert!(camera.take_redraw_request());
        assert!(!camera.take_redraw_request());
        assert!(!camera.tick());
    }

    #[test]
    fn window_zoom_ratio_halves_range() {
        let mut camera = controller();
        let band = ViewportRegion::new(200.0, 150.0, 400.0, 300.0);

        let plan = camera.plan_window_zoom(band).unwrap();
        assert!((plan.ratio - 2.0).abs() < EPS);
        // Band is centred: no pan.
        assert!(plan.pan.length() < 1e-3, "{}", plan.pan);

        assert!(camera.window_zoom(band));
        assert_eq!(camera.transition_kind(), Some(TransitionKind::WindowZoom));
        let _ = settle(&mut camera);
        assert!((camera.view_range() - 100.0).abs() < EPS);
    }

    #[test]
    fn off_centre_band_pans_toward_it() {
        let mut camera = controller();
        camera.set_frame(OrientationFrame::new());
        let _ = camera.take_redraw_request();

        // Right half of the window, looking down -Z with +X right.
        let band = ViewportRegion::new(400.0, 0.0, 400.0, 600.0);
        let plan = camera.plan_window_zoom(band).unwrap();
        assert!(plan.pan.x > 0.0);
        assert!(plan.pan.y.abs() < 1e-3);

        assert!(camera.window_zoom(band));
        let _ = settle(&mut camera);
        assert!(camera.position().abs_diff_eq(plan.pan, 1e-3));
        assert!(camera.take_redraw_request());
    }

    #[test]
    fn empty_band_is_ignored() {
        let mut camera = controller();
        let band = ViewportRegion::new(10.0, 10.0, 0.0, 50.0);
        assert!(camera.plan_window_zoom(band).is_none());
        assert!(!camera.window_zoom(band));
        assert!(!camera.is_animating());
    }

    #[test]
    fn zoom_saturates_at_limits() {
        let mut camera = controller();
        let cursor = Vec2::new(400.0, 300.0);
        for _ in 0..1000 {
            camera.wheel_zoom(1.0, cursor);
        }
        assert_eq!(camera.view_range(), 0.05);

        for _ in 0..1000 {
            camera.drag_zoom(Vec2::new(10.0, 10.0), Vec2::new(5.0, 20.0));
        }
        assert_eq!(camera.view_range(), 50_000.0);
    }

    #[test]
    fn wheel_notches_compound() {
        let mut camera = controller();
        camera.wheel_zoom(2.0, Vec2::new(400.0, 300.0));
        assert!((camera.view_range() - 200.0 / 1.05_f32.powi(2)).abs() < 1e-3);
        camera.wheel_zoom(-2.0, Vec2::new(400.0, 300.0));
        assert!((camera.view_range() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn drag_zoom_direction() {
        let mut camera = controller();
        camera.drag_zoom(Vec2::new(100.0, 100.0), Vec2::new(110.0, 100.0));
        assert!(camera.view_range() < 200.0);

        let mut camera = controller();
        camera.drag_zoom(Vec2::new(100.0, 100.0), Vec2::new(100.0, 90.0));
        assert!(camera.view_range() < 200.0);

        let mut camera = controller();
        camera.drag_zoom(Vec2::new(100.0, 100.0), Vec2::new(90.0, 110.0));
        assert!(camera.view_range() > 200.0);
    }

    #[test]
    fn wheel_zoom_in_moves_toward_cursor() {
        let mut camera = controller();
        camera.set_frame(OrientationFrame::new());
        camera.wheel_zoom(1.0, Vec2::new(800.0, 300.0));
        assert!(camera.position().x > 0.0);
        assert!(camera.position().y.abs() < 1e-3);
    }

    #[test]
    fn pan_follows_pointer() {
        let mut camera = controller();
        camera.set_frame(OrientationFrame::new());
        // 800x600 ortho with range 200: 600 px span 200 units.
        camera.pan(Vec2::new(400.0, 300.0), Vec2::new(430.0, 300.0));
        let expected = -30.0 * 200.0 / 600.0;
        assert!((camera.position().x - expected).abs() < 1e-3);
        assert!(camera.frame().is_orthonormal(EPS));
    }

    #[test]
    fn rotate_uses_sensitivity_and_clears_preset() {
        let mut camera = controller();
        camera.set_frame(OrientationFrame::new());
        camera.rotate(Vec2::new(0.0, 180.0));
        // 180 px at 0.5 deg/px pitches by 90.
        assert!(camera.frame().view_direction().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.current_preset(), None);
    }

    #[test]
    fn navigation_cancels_transition() {
        let mut camera = controller();
        camera.set_view(ViewPreset::Front);
        assert!(camera.tick());
        camera.rotate(Vec2::new(4.0, 0.0));
        assert!(!camera.is_animating());
        assert!(!camera.tick());
    }

    #[test]
    fn preset_transition_converges() {
        let mut camera = controller();
        camera.set_scene_bounds(BoundingSphere::new(Vec3::new(5.0, 0.0, 0.0), 10.0));
        camera.set_view(ViewPreset::Right);
        assert_eq!(settle(&mut camera), 50);

        let target = ViewPreset::Right.frame_at(Vec3::ZERO);
        let frame = camera.frame();
        assert!(frame.view_direction().abs_diff_eq(target.view_direction(), EPS));
        assert!(frame.up().abs_diff_eq(target.up(), EPS));
        assert_eq!(camera.position(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(camera.view_range(), 20.0);
        assert!(!camera.tick());
    }

    #[test]
    fn fit_all_frames_scene() {
        let mut camera = controller();
        let bounds = BoundingSphere::new(Vec3::new(30.0, -4.0, 12.0), 7.5);
        camera.set_scene_bounds(bounds);
        assert_eq!(camera.transition_kind(), Some(TransitionKind::FitAll));
        let _ = settle(&mut camera);

        assert_eq!(camera.position(), bounds.center);
        assert_eq!(camera.view_range(), 15.0);

        assert!(camera.scene_in_view());
        assert!(camera.frustum().contains_point(bounds.center));

        // Zooming in far enough crops the scene.
        camera.scale_view_range(0.25);
        assert!(!camera.scene_in_view());
        assert!(camera.frustum().intersects_sphere(&bounds));
    }

    #[test]
    fn quad_layout_viewports() {
        let mut camera = controller();
        camera.execute(CameraCommand::SetLayout {
            layout: ViewLayout::Quad,
        });
        let views = camera.viewports();
        assert_eq!(views.len(), 4);
        assert_eq!(views[0].preset, Some(ViewPreset::Front));
        assert_eq!(views[3].region, ViewportRegion::new(400.0, 300.0, 400.0, 300.0));
        assert!(views
            .iter()
            .all(|view| view.frustum().contains_point(camera.position())));

        // Quadrant projections use the quadrant aspect.
        let expected = ProjectionState::new(
            400.0,
            300.0,
            60.0,
            200.0,
            ProjectionKind::Orthographic,
        )
        .matrix();
        assert!(views[2].projection.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn quad_pan_uses_quadrant_under_cursor() {
        let mut camera = controller();
        camera.set_layout(ViewLayout::Quad);
        camera.set_frame(OrientationFrame::new());

        // Front quadrant (top-left) looks along +Y with +Z up: dragging up
        // moves the camera down in Z.
        camera.pan(Vec2::new(200.0, 150.0), Vec2::new(200.0, 120.0));
        let p = camera.position();
        assert!(p.z < 0.0, "{p}");
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3, "{p}");
    }

    #[test]
    fn commands_dispatch() {
        let mut camera = controller();
        camera.execute(CameraCommand::SetProjection {
            kind: ProjectionKind::Perspective,
        });
        assert_eq!(camera.projection().kind, ProjectionKind::Perspective);

        camera.execute(CameraCommand::SetView {
            preset: ViewPreset::Top,
        });
        assert!(camera.is_animating());

        camera.execute(CameraCommand::FitAll);
        assert_eq!(camera.transition_kind(), Some(TransitionKind::FitAll));

        camera.execute(CameraCommand::Rotate {
            delta: Vec2::new(1.0, 1.0),
        });
        assert!(!camera.is_animating());
    }

    #[test]
    fn clock_driven_ticks() {
        let mut camera = controller();
        let period = Options::default().animation.tick_interval();
        let now = Instant::now();
        let mut clock = TickClock::starting_at(period, now);
        camera.set_view(ViewPreset::Top);

        assert!(camera.tick_for_at(&mut clock, now));
        assert!(camera.tick_for_at(&mut clock, now + period * 5));
        // One step on the first poll, then five more.
        assert!(camera.is_animating());
        assert!((camera.transition.progress() - 0.12).abs() < 1e-4);
        assert_eq!(camera.current_preset(), Some(ViewPreset::Top));
    }

    #[test]
    fn idle_clock_backlog_does_not_skip_transition() {
        let mut camera = controller();
        let period = Options::default().animation.tick_interval();
        let now = Instant::now();
        // Nobody polled for sixty periods before the request.
        let mut clock = TickClock::starting_at(period, now);
        let later = now + period * 60;
        camera.set_view(ViewPreset::Top);

        assert!(camera.tick_for_at(&mut clock, later));
        assert!(camera.is_animating());
        assert!((camera.transition.progress() - 0.02).abs() < 1e-4);

        // A slow frame afterwards only catches up a bounded amount.
        assert!(camera.tick_for_at(&mut clock, later + period * 100));
        assert!(camera.is_animating());
    }

    #[test]
    fn inverted_limits_do_not_panic() {
        let mut options = Options::default();
        options.camera.min_view_range = 100.0;
        options.camera.max_view_range = 10.0;
        let mut camera = CameraController::new(&options, 800.0, 600.0);
        assert_eq!(camera.view_range(), 100.0);
        camera.scale_view_range(0.001);
        assert_eq!(camera.view_range(), 10.0);
        camera.scale_view_range(f32::NAN);
        assert_eq!(camera.view_range(), 100.0);
    }

    #[test]
    fn resize_to_zero_stays_finite() {
        let mut camera = controller();
        camera.resize(0.0, 0.0);
        assert!(camera.projection_matrix().is_finite());
        assert!(camera.world_offset(Vec2::ZERO, Vec2::ONE).is_finite());
    }
}
