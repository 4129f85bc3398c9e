//! Allocator configuration.

use roomplan_core::allocator::{DEFAULT_GAP_HOURS, DEFAULT_SEED};
use roomplan_core::{AllocationOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

const fn default_gap_hours() -> f64 {
    DEFAULT_GAP_HOURS
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AllocationConfig {
    /// Seed for the room and event shuffle.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Minimum hours between two events sharing a room on the same day.
    #[serde(default = "default_gap_hours")]
    pub gap_hours: f64,

    /// Category that is placed first and prefers `preferred_room`.
    #[serde(default)]
    pub distinguished_category: Option<Pattern>,

    /// Rooms tried first within each tier for the distinguished category.
    #[serde(default)]
    pub preferred_room: Option<Pattern>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            gap_hours: default_gap_hours(),
            distinguished_category: None,
            preferred_room: None,
        }
    }
}

impl AllocationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gap_hours.is_finite() || self.gap_hours < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "allocation.gap_hours".into(),
                reason: format!("{} is not a non-negative number of hours", self.gap_hours),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn options(&self) -> AllocationOptions {
        AllocationOptions {
            seed: self.seed,
            gap_hours: self.gap_hours,
            distinguished_category: self.distinguished_category.clone(),
            preferred_room: self.preferred_room.clone(),
        }
    }
}
