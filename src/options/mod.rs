//! Centralized interaction options with TOML preset support.
//!
//! Drag sensitivity, tap debounce and momentum tuning are consolidated
//! here. Options serialize to/from TOML for presets, and expose a JSON
//! Schema so a host settings panel can render sliders for them.

mod interaction;
mod momentum;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

pub use interaction::InteractionOptions;
pub use momentum::MomentumOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SwivelError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[momentum]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag sensitivity and tap debounce.
    pub interaction: InteractionOptions,
    /// Release momentum tuning.
    pub momentum: MomentumOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema rendered as a string, ready to post to a web UI.
    ///
    /// # Errors
    ///
    /// Returns [`SwivelError::OptionsParse`] if serialization fails.
    pub fn schema_json() -> Result<String, SwivelError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON document sent back by a settings UI.
    /// Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SwivelError::OptionsParse`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, SwivelError> {
        serde_json::from_str(json)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, SwivelError> {
        let content = std::fs::read_to_string(path).map_err(SwivelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails if serialization or any filesystem write fails.
    pub fn save(&self, path: &Path) -> Result<(), SwivelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SwivelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SwivelError::Io)?;
        }
        std::fs::write(path, content).map_err(SwivelError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

/// Live configuration read by the controller on every event.
///
/// Values are never cached by the interaction core, so a host that edits
/// its settings mid-drag sees the change take effect on the next pointer
/// event or momentum tick.
pub trait InteractionConfig {
    /// Drag sensitivity; larger is faster. Clamped before use.
    fn sensitivity(&self) -> i32;
    /// Minimum release distance in pixels that counts as a swipe.
    fn interaction_debounce(&self) -> f64;
    /// Momentum tuning.
    fn momentum(&self) -> MomentumOptions {
        MomentumOptions::default()
    }
}

impl InteractionConfig for InteractionOptions {
    fn sensitivity(&self) -> i32 {
        self.sensitivity
    }

    fn interaction_debounce(&self) -> f64 {
        self.interaction_debounce
    }
}

impl InteractionConfig for Options {
    fn sensitivity(&self) -> i32 {
        self.interaction.sensitivity
    }

    fn interaction_debounce(&self) -> f64 {
        self.interaction.interaction_debounce
    }

    fn momentum(&self) -> MomentumOptions {
        self.momentum.clone()
    }
}

impl<T: InteractionConfig> InteractionConfig for Rc<RefCell<T>> {
    fn sensitivity(&self) -> i32 {
        self.borrow().sensitivity()
    }

    fn interaction_debounce(&self) -> f64 {
        self.borrow().interaction_debounce()
    }

    fn momentum(&self) -> MomentumOptions {
        self.borrow().momentum()
    }
}
