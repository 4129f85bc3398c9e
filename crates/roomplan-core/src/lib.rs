//! # roomplan-core
//!
//! Event normalization and tiered room allocation for roomplan.
//!
//! This crate provides the foundational types and the scheduling engine:
//! - Room catalog (room id to priority tier)
//! - Event records and the raw tabular rows they are normalized from
//! - The greedy tiered allocator with its room/day ledger and seeded shuffle
//! - Room-reference checks for downstream exporters
//! - The room/date grid view of an allocation
//! - CLI response types

pub mod allocator;
pub mod catalog;
pub mod errors;
pub mod event;
pub mod grid;
pub mod ledger;
pub mod normalize;
pub mod pattern;
pub mod references;
pub mod responses;
pub mod shuffle;

pub use allocator::{
    AllocationOptions, AllocationResult, AllocationSummary, Placement, PlacementRule, Unplaced,
    allocate, allocate_with,
};
pub use catalog::{Catalog, Room};
pub use errors::{AllocError, CoreError};
pub use event::{Event, RawRecord, SourceDocument};
pub use pattern::Pattern;
