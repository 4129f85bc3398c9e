//! CLI response types returned as JSON by `roomplan` commands.
//!
//! These structs define the shape of JSON output for `roomplan allocate` and
//! `roomplan sql`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::allocator::{AllocationResult, AllocationSummary, PlacementRule, Unplaced};
use crate::catalog::Catalog;
use crate::normalize::SkippedRecord;

/// Response from `roomplan allocate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AllocateResponse {
    pub seed: u64,
    pub summary: AllocationSummary,
    pub skipped: Vec<SkippedRecord>,
    pub unplaced: Vec<Unplaced>,
}

/// How an event ended up with (or without) its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pinned,
    FreeSlot,
    Gap,
    Unplaced,
}

impl AssignmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pinned => "pinned",
            Self::FreeSlot => "free_slot",
            Self::Gap => "gap",
            Self::Unplaced => "unplaced",
        }
    }
}

impl From<PlacementRule> for AssignmentStatus {
    fn from(rule: PlacementRule) -> Self {
        match rule {
            PlacementRule::FreeSlot => Self::FreeSlot,
            PlacementRule::Gap => Self::Gap,
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of `roomplan allocate --full`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentRow {
    pub source: String,
    pub title: String,
    pub kind: String,
    pub start: String,
    pub room: Option<String>,
    pub status: AssignmentStatus,
    /// Catalog tier of the room; `None` when unassigned or not in the catalog.
    pub tier: Option<u32>,
}

impl AssignmentRow {
    /// One row per event, in input order.
    #[must_use]
    pub fn from_result(result: &AllocationResult, catalog: &Catalog) -> Vec<Self> {
        result
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let status = if event.is_pinned() {
                    AssignmentStatus::Pinned
                } else {
                    result
                        .placement_of(index)
                        .map_or(AssignmentStatus::Unplaced, |p| p.rule.into())
                };
                Self {
                    source: event.source.clone(),
                    title: event.title.clone(),
                    kind: event.kind.clone(),
                    start: event.start.format("%d.%m.%Y %H.%M").to_string(),
                    room: event.room().map(str::to_owned),
                    status,
                    tier: event.room().and_then(|room| catalog.tier_of(room)),
                }
            })
            .collect()
    }
}

/// Response from `roomplan sql`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SqlExportResponse {
    pub rows: usize,
    pub skipped_rooms: Vec<String>,
    pub output: Option<String>,
}
