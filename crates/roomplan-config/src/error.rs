//! Errors raised while loading `roomplan.toml` and its overrides.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `ROOMPLAN_*` variable could not be read into [`crate::RoomplanConfig`].
    #[error("Failed to load roomplan configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The `[catalog]` table is missing or has no rooms.
    #[error("No rooms configured: add a [catalog] table mapping room ids to tiers")]
    EmptyCatalog,

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn empty_catalog_names_the_table() {
        let message = ConfigError::EmptyCatalog.to_string();
        assert!(message.contains("[catalog]"), "{message}");
    }

    #[test]
    fn invalid_value_names_the_field() {
        let err = ConfigError::InvalidValue {
            field: "allocation.gap_hours".into(),
            reason: "must be non-negative".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'allocation.gap_hours': must be non-negative"
        );
    }
}
