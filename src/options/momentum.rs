use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::momentum::TICK_INTERVAL_MS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Momentum", inline)]
#[serde(default)]
/// Post-release coasting parameters.
pub struct MomentumOptions {
    /// Keep turning after a swipe is released.
    #[schemars(title = "Momentum")]
    pub enabled: bool,
    /// Milliseconds between momentum ticks.
    #[schemars(skip)]
    pub tick_interval_ms: u64,
    /// Angular speed removed per tick, in degrees.
    #[schemars(title = "Braking", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub braking_step_degrees: f64,
}

impl MomentumOptions {
    /// Braking step converted to radians.
    #[must_use]
    pub fn braking_step(&self) -> f64 {
        self.braking_step_degrees.to_radians()
    }
}

impl Default for MomentumOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: TICK_INTERVAL_MS,
            braking_step_degrees: 0.5,
        }
    }
}
