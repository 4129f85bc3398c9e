use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Raw tabular rows grouped by the source they were read from.
///
/// Sources are processed in name order, then row order.
pub type SourceDocument = BTreeMap<String, Vec<RawRecord>>;

/// One raw row: title, type, date, time and an optional pre-filled room.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct RawRecord {
    cells: Vec<String>,
}

impl RawRecord {
    #[must_use]
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Trimmed text of cell `index`, empty when the cell is missing.
    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |cell| cell.trim())
    }
}

/// A timestamped event that needs a room.
///
/// The room can only be set once: either at construction (a pinned event) or
/// by the allocator through [`Event::assign`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Event {
    /// Name of the record source the event was read from.
    pub source: String,
    pub title: String,
    /// Matched against the distinguished-category pattern.
    pub category: String,
    /// Type label, passed through untouched.
    pub kind: String,
    pub start: NaiveDateTime,
    room: Option<String>,
    #[serde(default)]
    pinned: bool,
}

impl Event {
    /// Create an unassigned event whose category is its source name.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        kind: impl Into<String>,
        start: NaiveDateTime,
    ) -> Self {
        let source = source.into();
        Self {
            category: source.clone(),
            source,
            title: title.into(),
            kind: kind.into(),
            start,
            room: None,
            pinned: false,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Fix the event to `room` before allocation.
    #[must_use]
    pub fn pinned_to(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self.pinned = true;
        self
    }

    #[must_use]
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.room.is_some()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Set the allocated room. Fails for pinned or already-assigned events.
    pub fn assign(&mut self, room: &str) -> Result<(), CoreError> {
        if let Some(current) = &self.room {
            let from = if self.pinned {
                format!("pinned {current}")
            } else {
                current.clone()
            };
            return Err(CoreError::InvalidTransition {
                title: self.title.clone(),
                from,
                to: room.to_owned(),
            });
        }
        self.room = Some(room.to_owned());
        Ok(())
    }
}
