//! Camera, navigation and animation options with TOML file support.
//!
//! Options serialize to/from TOML so a viewer can ship tuned defaults and
//! users can override single values.

mod animation;
mod camera;
mod navigation;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection and view-range parameters.
    pub camera: CameraOptions,
    /// Pointer and wheel navigation parameters.
    pub navigation: NavigationOptions,
    /// Transition pacing.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Io`] if the file cannot be read,
    /// [`ViewerError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Io`] on filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }
}
