//! Camera system for 3D surface viewing.
//!
//! Provides a gimbal-lock-free orientation frame with rotation, panning and
//! zoom, orthographic/perspective projection, named view presets, animated
//! transitions, multi-viewport layouts, section planes and frustum tests.

/// Discrete camera commands produced by input handling and UI.
pub mod command;
/// Section clipping planes along the world axes.
pub mod clipping;
/// Camera controller owning frame, projection and transitions.
pub mod controller;
/// Orthonormal orientation frame.
pub mod frame;
/// Plane and view frustum intersection tests.
pub mod frustum;
/// Named axonometric view presets.
pub mod preset;
/// Projection matrices and stereo pairs.
pub mod projection;
/// Tick-driven transitions to presets, fit-all and window zoom.
pub mod transition;
/// GPU uniform types.
pub mod uniform;
/// Viewport regions, layouts and region-scoped unprojection.
pub mod viewport;
