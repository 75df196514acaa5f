// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (clippy default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and view-navigation core for an interactive parametric-surface
//! viewer.
//!
//! The crate keeps a gimbal-lock-free orientation frame under mouse-driven
//! rotate/pan/zoom, builds orthographic and perspective projections, animates
//! transitions to named axonometric presets, zooms onto rubber-band
//! rectangles via unprojection, and fits bounding spheres into view.
//! Rendering, meshing and UI live elsewhere: they supply a bounding sphere,
//! forward input events and read back matrices.
//!
//! # Key entry points
//!
//! - [`camera::controller::CameraController`] - the per-window camera
//! - [`input::InputProcessor`] - raw events to [`camera::command::CameraCommand`]
//! - [`bounds::BoundingSphere`] - Ritter bounding spheres and sphere union
//! - [`options::Options`] - runtime configuration (camera, navigation,
//!   animation)
//!
//! # Architecture
//!
//! Everything runs on the caller's thread. Pointer navigation mutates the
//! frame immediately and cancels any transition; preset, fit-all and window
//! zoom requests start a transition that an external loop advances with
//! [`CameraController::tick`](camera::controller::CameraController::tick),
//! paced by [`util::TickClock`]. A redraw flag tells the renderer when to
//! read new matrices.

pub mod bounds;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use bounds::BoundingSphere;
pub use camera::command::CameraCommand;
pub use camera::controller::CameraController;
pub use camera::frame::OrientationFrame;
pub use camera::preset::ViewPreset;
pub use camera::projection::{ProjectionKind, ProjectionState};
pub use error::ViewerError;
pub use options::Options;
