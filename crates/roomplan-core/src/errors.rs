//! Error types for roomplan.
//!
//! `CoreError` covers normalization, catalog construction, event state and
//! room-reference checks. `AllocError` is returned by the allocator. A unified
//! error is deferred to `roomplan-cli` where everything converges into
//! `anyhow`.

use thiserror::Error;

/// Errors raised while building or validating roomplan data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record's date and time cells do not form a valid timestamp.
    #[error("Invalid timestamp in {origin} row {row}: '{input}'")]
    Parse {
        origin: String,
        row: usize,
        input: String,
        #[source]
        reason: chrono::ParseError,
    },

    /// A record does not have the expected shape.
    #[error("Malformed record in {origin} row {row}: {reason}")]
    Malformed {
        origin: String,
        row: usize,
        reason: String,
    },

    /// An event's room was changed in a way that is not allowed.
    #[error("Invalid room transition for event '{title}': {from} -> {to}")]
    InvalidTransition {
        title: String,
        from: String,
        to: String,
    },

    /// Data failed validation (catalog contents, options).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Events reference rooms the caller does not know about.
    #[error("Unknown room references: {}", .0.join(", "))]
    UnknownRooms(Vec<String>),
}

/// Errors raised by [`crate::allocate`].
#[derive(Debug, Error)]
pub enum AllocError {
    /// The minimum gap must be a finite, non-negative number of hours.
    #[error("Invalid gap: {0} hours (must be finite and non-negative)")]
    InvalidGap(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}
