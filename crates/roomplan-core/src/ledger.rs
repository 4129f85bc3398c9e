//! Per-run index of which events already occupy a room on a given day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

/// An event registered in a room/day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Index of the event in the allocation input.
    pub event: usize,
    pub start: NaiveDateTime,
}

/// Room → date → events placed there, in placement order.
#[derive(Debug, Clone, Default)]
pub struct RoomDayLedger {
    days: BTreeMap<String, BTreeMap<NaiveDate, Vec<LedgerEntry>>>,
}

impl RoomDayLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for `room` on `date`; empty when nothing is there yet.
    #[must_use]
    pub fn entries(&self, room: &str, date: NaiveDate) -> &[LedgerEntry] {
        self.days
            .get(room)
            .and_then(|dates| dates.get(&date))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_free(&self, room: &str, date: NaiveDate) -> bool {
        self.entries(room, date).is_empty()
    }

    /// Whether an event starting at `start` keeps at least `gap_hours` from
    /// every event already in `room` that day.
    #[must_use]
    pub fn fits_with_gap(&self, room: &str, start: NaiveDateTime, gap_hours: f64) -> bool {
        self.entries(room, start.date())
            .iter()
            .all(|entry| hours_between(entry.start, start) >= gap_hours)
    }

    pub fn record(&mut self, room: &str, entry: LedgerEntry) {
        self.days
            .entry(room.to_owned())
            .or_default()
            .entry(entry.start.date())
            .or_default()
            .push(entry);
    }

    /// Number of occupied room/day slots.
    #[must_use]
    pub fn occupied_days(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }
}

/// Absolute distance between two timestamps in hours.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (a - b).num_seconds().abs() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn empty_ledger_is_free_everywhere() {
        let ledger = RoomDayLedger::new();
        assert!(ledger.is_free("A-1", at(10, 9, 0).date()));
        assert!(ledger.fits_with_gap("A-1", at(10, 9, 0), 5.0));
        assert_eq!(ledger.occupied_days(), 0);
    }

    #[test]
    fn record_is_scoped_to_room_and_date() {
        let mut ledger = RoomDayLedger::new();
        ledger.record(
            "A-1",
            LedgerEntry {
                event: 0,
                start: at(10, 9, 0),
            },
        );

        assert!(!ledger.is_free("A-1", at(10, 0, 0).date()));
        assert!(ledger.is_free("A-1", at(11, 0, 0).date()));
        assert!(ledger.is_free("B-2", at(10, 0, 0).date()));
        assert_eq!(ledger.entries("A-1", at(10, 0, 0).date()).len(), 1);
        assert_eq!(ledger.occupied_days(), 1);
    }

    #[test]
    fn gap_must_hold_against_every_entry() {
        let mut ledger = RoomDayLedger::new();
        ledger.record(
            "A-1",
            LedgerEntry {
                event: 0,
                start: at(10, 8, 0),
            },
        );
        ledger.record(
            "A-1",
            LedgerEntry {
                event: 1,
                start: at(10, 18, 0),
            },
        );

        assert!(ledger.fits_with_gap("A-1", at(10, 13, 0), 5.0));
        assert!(!ledger.fits_with_gap("A-1", at(10, 13, 1), 5.0));
        assert!(!ledger.fits_with_gap("A-1", at(10, 12, 0), 5.0));
    }

    #[test]
    fn hours_between_is_symmetric() {
        assert!((hours_between(at(10, 9, 0), at(10, 15, 30)) - 6.5).abs() < f64::EPSILON);
        assert!((hours_between(at(10, 15, 30), at(10, 9, 0)) - 6.5).abs() < f64::EPSILON);
    }
}
