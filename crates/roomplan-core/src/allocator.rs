//! Greedy tiered room allocation.
//!
//! Pinned events are registered first. The remaining events are visited once,
//! in a seeded order with the distinguished category moved to the front, and
//! each takes the first room that fits in the lowest tier that has one:
//!
//! ```text
//! for tier in ascending order:
//!     rooms  = shuffled catalog order ∩ tier   (preferred rooms first for distinguished events)
//!     room   = first room with a free day
//!           ?? first room whose events that day are all >= gap hours away
//!     if room: commit and stop
//! no room in any tier: unplaced
//! ```
//!
//! Decisions are never revisited, so the result is a valid assignment but not
//! necessarily the one that places the most events.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::errors::{AllocError, CoreError};
use crate::event::Event;
use crate::ledger::{LedgerEntry, RoomDayLedger};
use crate::pattern::Pattern;
use crate::shuffle::{SeededShuffle, Shuffle};

/// Default seed for the room/event shuffle.
pub const DEFAULT_SEED: u64 = 1;

/// Default minimum hours between two events sharing a room on one day.
pub const DEFAULT_GAP_HOURS: f64 = 5.0;

/// Tunables for one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AllocationOptions {
    pub seed: u64,
    pub gap_hours: f64,
    /// Events whose category matches go first and prefer `preferred_room`.
    pub distinguished_category: Option<Pattern>,
    /// Rooms tried first within a tier for distinguished events.
    pub preferred_room: Option<Pattern>,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            gap_hours: DEFAULT_GAP_HOURS,
            distinguished_category: None,
            preferred_room: None,
        }
    }
}

impl AllocationOptions {
    pub fn validate(&self) -> Result<(), AllocError> {
        if !self.gap_hours.is_finite() || self.gap_hours < 0.0 {
            return Err(AllocError::InvalidGap(self.gap_hours));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_distinguished(&self, category: &str) -> bool {
        self.distinguished_category
            .as_ref()
            .is_some_and(|pattern| pattern.matches(category))
    }

    #[must_use]
    pub fn is_preferred_room(&self, room: &str) -> bool {
        self.preferred_room
            .as_ref()
            .is_some_and(|pattern| pattern.matches(room))
    }
}

/// Which sub-pass found the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRule {
    /// The room had nothing on that day.
    FreeSlot,
    /// The room was in use that day but far enough away in time.
    Gap,
}

/// One room assignment made by the allocator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Placement {
    /// Index into [`AllocationResult::events`].
    pub event: usize,
    pub room: String,
    pub tier: u32,
    pub rule: PlacementRule,
}

/// An event no room could take.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Unplaced {
    /// Index into [`AllocationResult::events`].
    pub event: usize,
    pub source: String,
    pub title: String,
    pub start: NaiveDateTime,
}

/// Output of [`allocate`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AllocationResult {
    /// Every input event, in input order, with rooms filled in where possible.
    pub events: Vec<Event>,
    /// Allocator placements in the order they were made. Pinned events are not listed.
    pub placements: Vec<Placement>,
    pub unplaced: Vec<Unplaced>,
}

/// Counts describing an allocation run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AllocationSummary {
    pub total: usize,
    pub pinned: usize,
    pub placed: usize,
    pub unplaced: usize,
    /// Allocator placements per tier.
    pub by_tier: BTreeMap<u32, usize>,
}

impl AllocationResult {
    #[must_use]
    pub fn summary(&self) -> AllocationSummary {
        let mut by_tier = BTreeMap::new();
        for placement in &self.placements {
            *by_tier.entry(placement.tier).or_insert(0) += 1;
        }
        AllocationSummary {
            total: self.events.len(),
            pinned: self.events.iter().filter(|e| e.is_pinned()).count(),
            placed: self.placements.len(),
            unplaced: self.unplaced.len(),
            by_tier,
        }
    }

    /// The placement made for event `index`, if the allocator placed it.
    #[must_use]
    pub fn placement_of(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.event == index)
    }
}

/// Allocate rooms with the seeded shuffle from `options.seed`.
pub fn allocate(
    catalog: &Catalog,
    events: Vec<Event>,
    options: &AllocationOptions,
) -> Result<AllocationResult, AllocError> {
    let mut shuffle = SeededShuffle::new(options.seed);
    allocate_with(catalog, events, options, &mut shuffle)
}

/// Allocate rooms using an injected shuffle strategy.
///
/// `options.seed` is ignored here; the strategy owns all randomness.
pub fn allocate_with<S: Shuffle>(
    catalog: &Catalog,
    mut events: Vec<Event>,
    options: &AllocationOptions,
    shuffle: &mut S,
) -> Result<AllocationResult, AllocError> {
    options.validate()?;

    let mut ledger = RoomDayLedger::new();
    let mut queue = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        match (event.room(), event.is_pinned()) {
            (Some(room), true) => ledger.record(
                room,
                LedgerEntry {
                    event: index,
                    start: event.start,
                },
            ),
            (None, true) => {
                return Err(CoreError::Validation(format!(
                    "event '{}' is pinned but has no room",
                    event.title
                ))
                .into());
            }
            _ => queue.push(index),
        }
    }
    debug!(
        pinned = events.len() - queue.len(),
        occupied = ledger.occupied_days(),
        "registered pinned events"
    );

    let mut room_order: Vec<&str> = catalog.room_ids().collect();
    shuffle.shuffle(&mut room_order);
    shuffle.shuffle(&mut queue);
    queue.sort_by_key(|&index| !options.is_distinguished(&events[index].category));

    let plan = TierPlan::build(catalog, &room_order, options);

    let mut placements = Vec::new();
    let mut unplaced = Vec::new();
    for index in queue {
        let start = events[index].start;
        let distinguished = options.is_distinguished(&events[index].category);

        let Some(candidate) = plan.find_room(&ledger, start, distinguished, options.gap_hours)
        else {
            let event = &events[index];
            warn!(title = %event.title, source = %event.source, %start, "no room available");
            unplaced.push(Unplaced {
                event: index,
                source: event.source.clone(),
                title: event.title.clone(),
                start,
            });
            continue;
        };

        ledger.record(
            candidate.room,
            LedgerEntry {
                event: index,
                start,
            },
        );
        events[index].assign(candidate.room)?;
        debug!(
            title = %events[index].title,
            room = candidate.room,
            tier = candidate.tier,
            rule = ?candidate.rule,
            "placed event"
        );
        placements.push(Placement {
            event: index,
            room: candidate.room.to_owned(),
            tier: candidate.tier,
            rule: candidate.rule,
        });
    }

    let result = AllocationResult {
        events,
        placements,
        unplaced,
    };
    let summary = result.summary();
    info!(
        total = summary.total,
        pinned = summary.pinned,
        placed = summary.placed,
        unplaced = summary.unplaced,
        "allocation finished"
    );
    Ok(result)
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    room: &'a str,
    tier: u32,
    rule: PlacementRule,
}

/// Room lists per tier, fixed for the whole run.
struct TierPlan<'a> {
    tiers: Vec<TierRooms<'a>>,
}

struct TierRooms<'a> {
    tier: u32,
    rooms: Vec<&'a str>,
    /// Same rooms with preferred ones moved to the front (stable).
    preferred_first: Vec<&'a str>,
}

impl<'a> TierPlan<'a> {
    fn build(catalog: &Catalog, room_order: &[&'a str], options: &AllocationOptions) -> Self {
        let tiers = catalog
            .tiers()
            .into_iter()
            .map(|tier| {
                let rooms: Vec<&'a str> = room_order
                    .iter()
                    .copied()
                    .filter(|room| catalog.tier_of(room) == Some(tier))
                    .collect();
                let mut preferred_first = rooms.clone();
                preferred_first.sort_by_key(|room| !options.is_preferred_room(room));
                TierRooms {
                    tier,
                    rooms,
                    preferred_first,
                }
            })
            .collect();
        Self { tiers }
    }

    fn find_room(
        &self,
        ledger: &RoomDayLedger,
        start: NaiveDateTime,
        distinguished: bool,
        gap_hours: f64,
    ) -> Option<Candidate<'a>> {
        let date = start.date();
        self.tiers.iter().find_map(|tier| {
            let rooms = if distinguished {
                &tier.preferred_first
            } else {
                &tier.rooms
            };
            let free = rooms
                .iter()
                .find(|room| ledger.is_free(room, date))
                .map(|room| (*room, PlacementRule::FreeSlot));
            let found = free.or_else(|| {
                rooms
                    .iter()
                    .find(|room| ledger.fits_with_gap(room, start, gap_hours))
                    .map(|room| (*room, PlacementRule::Gap))
            });
            found.map(|(room, rule)| Candidate {
                room,
                tier: tier.tier,
                rule,
            })
        })
    }
}
