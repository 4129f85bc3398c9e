//! Input normalization configuration.

use roomplan_core::normalize::NormalizeOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Pre-filled rooms that stay pinned. Empty keeps every pre-filled room.
    #[serde(default)]
    pub retain_pins: Vec<String>,
}

impl NormalizeConfig {
    #[must_use]
    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions {
            retain_pins: self.retain_pins.clone(),
        }
    }
}
