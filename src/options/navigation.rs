use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Pointer and wheel navigation parameters.
pub struct NavigationOptions {
    /// Degrees of rotation per pixel of left drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_sensitivity: f32,
    /// View range factor per zoom step (drag event or wheel notch).
    #[schemars(title = "Zoom Step", range(min = 1.01, max = 1.5), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Fraction of the centre-to-cursor offset panned per zoom step.
    #[schemars(skip)]
    pub zoom_pan_damping: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.5,
            zoom_step: 1.05,
            zoom_pan_damping: 0.05,
        }
    }
}
