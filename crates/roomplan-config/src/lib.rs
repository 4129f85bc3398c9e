//! # roomplan-config
//!
//! Layered configuration loading for roomplan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROOMPLAN_*` prefix, `__` as separator)
//! 2. Project-level `roomplan.toml` (or an explicit `--config` file)
//! 3. User-level `~/.config/roomplan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROOMPLAN_ALLOCATION__SEED` -> `allocation.seed`,
//! `ROOMPLAN_ALLOCATION__GAP_HOURS` -> `allocation.gap_hours`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use roomplan_config::RoomplanConfig;
//!
//! let config = RoomplanConfig::load_with_dotenv().expect("config");
//! let catalog = config.catalog().expect("catalog");
//! println!("{} rooms, seed {}", catalog.len(), config.allocation.seed);
//! ```

mod allocation;
mod error;
mod export;
mod normalize;

pub use allocation::AllocationConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use normalize::NormalizeConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use roomplan_core::Catalog;
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "roomplan.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RoomplanConfig {
    #[serde(default)]
    pub allocation: AllocationConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub export: ExportConfig,
    /// Room id -> priority tier.
    #[serde(default)]
    pub catalog: BTreeMap<String, u32>,
}

impl RoomplanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `config_path` instead of `./roomplan.toml`.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(config_path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the default figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain with an optional project file override.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_with(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config (an explicit path must exist)
        match config_path {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ROOMPLAN_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.allocation.validate()
    }

    /// The configured room catalog. Fails with [`ConfigError::EmptyCatalog`] when no rooms are configured.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Catalog::try_from(self.catalog.clone()).map_err(|error| ConfigError::InvalidValue {
            field: "catalog".into(),
            reason: error.to_string(),
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roomplan").join("config.toml"))
    }
}
