use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::preset::ViewPreset;
use crate::camera::projection::ProjectionKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Projection and view-range parameters.
pub struct CameraOptions {
    /// Field of view in degrees, applied to the narrower screen axis.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub field_of_view: f32,
    /// View range (visible diameter) before any scene is fitted.
    #[schemars(skip)]
    pub initial_view_range: f32,
    /// Orthographic or perspective projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Orientation the camera starts in.
    #[schemars(title = "Initial View")]
    pub initial_preset: ViewPreset,
    /// Smallest view range zooming may reach.
    #[schemars(skip)]
    pub min_view_range: f32,
    /// Largest view range zooming may reach.
    #[schemars(skip)]
    pub max_view_range: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            initial_view_range: 200.0,
            projection: ProjectionKind::Orthographic,
            initial_preset: ViewPreset::SeIsometric,
            min_view_range: 0.05,
            max_view_range: 50_000.0,
        }
    }
}

impl CameraOptions {
    /// Ordered `(min, max)` view range; non-positive or non-finite limits
    /// fall back to the defaults.
    #[must_use]
    pub fn view_range_limits(&self) -> (f32, f32) {
        let defaults = Self::default();
        let usable = |v: f32, fallback: f32| {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                fallback
            }
        };
        let lo = usable(self.min_view_range, defaults.min_view_range);
        let hi = usable(self.max_view_range, defaults.max_view_range);
        (lo.min(hi), lo.max(hi))
    }

    /// Clamp a view range to the limits. NaN maps to the maximum.
    #[must_use]
    pub fn limit_view_range(&self, range: f32) -> f32 {
        let (lo, hi) = self.view_range_limits();
        if range.is_nan() {
            hi
        } else {
            range.clamp(lo, hi)
        }
    }
}
