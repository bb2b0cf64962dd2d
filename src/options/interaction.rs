use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Drag response parameters.
pub struct InteractionOptions {
    /// Drag sensitivity. Larger values turn the camera further per pixel.
    #[schemars(title = "Sensitivity", range(min = 0, max = 18), extend("step" = 1))]
    pub sensitivity: i32,
    /// Releases closer than this many pixels to the press point are taps.
    #[schemars(title = "Tap Distance", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub interaction_debounce: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            sensitivity: 10,
            interaction_debounce: 5.0,
        }
    }
}
