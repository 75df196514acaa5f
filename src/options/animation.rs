use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Transition pacing.
pub struct AnimationOptions {
    /// Progress added per tick; 0.02 completes in 50 ticks.
    #[schemars(title = "Step", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub step_fraction: f32,
    /// Tick period in milliseconds.
    #[schemars(title = "Tick Interval (ms)", range(min = 1, max = 100))]
    pub tick_interval_ms: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            step_fraction: 0.02,
            tick_interval_ms: 5,
        }
    }
}

impl AnimationOptions {
    /// Tick period as a duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
