//! Date × room view of an allocation.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::event::Event;

/// Time format used in grid cells (`09.30`).
pub const SLOT_TIME_FORMAT: &str = "%H.%M";

/// Which rooms become grid columns.
#[derive(Debug, Clone, Copy)]
pub enum GridColumns<'a> {
    /// Only rooms that hold at least one event.
    Used,
    /// Every catalog room, in id order, used or not.
    Catalog(&'a Catalog),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GridSlot {
    pub time: NaiveTime,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GridRow {
    pub date: NaiveDate,
    /// Room → events that day, ordered by start time.
    pub cells: BTreeMap<String, Vec<GridSlot>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoomDayGrid {
    pub rooms: Vec<String>,
    /// One row per date with at least one assigned event, ascending.
    pub rows: Vec<GridRow>,
}

/// Build the grid from assigned events; unassigned events are left out.
#[must_use]
pub fn build_grid(events: &[Event], columns: GridColumns<'_>) -> RoomDayGrid {
    let mut rows: BTreeMap<NaiveDate, BTreeMap<String, Vec<GridSlot>>> = BTreeMap::new();
    for event in events {
        let Some(room) = event.room() else {
            continue;
        };
        rows.entry(event.date())
            .or_default()
            .entry(room.to_owned())
            .or_default()
            .push(GridSlot {
                time: event.start.time(),
                title: event.title.clone(),
            });
    }

    for cells in rows.values_mut() {
        for slots in cells.values_mut() {
            slots.sort_by_key(|slot| slot.time);
        }
    }

    let rooms = match columns {
        GridColumns::Used => {
            let mut used: Vec<String> = rows
                .values()
                .flat_map(|cells| cells.keys().cloned())
                .collect();
            used.sort();
            used.dedup();
            used
        }
        GridColumns::Catalog(catalog) => catalog.room_ids().map(str::to_owned).collect(),
    };

    RoomDayGrid {
        rooms,
        rows: rows
            .into_iter()
            .map(|(date, cells)| GridRow { date, cells })
            .collect(),
    }
}

impl GridRow {
    /// Cell text for `room`: `HH.MM: title` entries separated by blank lines.
    #[must_use]
    pub fn cell_text(&self, room: &str) -> String {
        self.cells.get(room).map_or_else(String::new, |slots| {
            slots
                .iter()
                .map(|slot| format!("{}: {}", slot.time.format(SLOT_TIME_FORMAT), slot.title))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid timestamp")
    }

    fn events() -> Vec<Event> {
        vec![
            Event::new("S", "late", "exam", at(10, 15, 0)).pinned_to("A-1"),
            Event::new("S", "early", "exam", at(10, 9, 30)).pinned_to("A-1"),
            Event::new("S", "other", "exam", at(11, 9, 0)).pinned_to("C-3"),
            Event::new("S", "nowhere", "exam", at(12, 9, 0)),
        ]
    }

    #[test]
    fn used_columns_and_sorted_slots() {
        let grid = build_grid(&events(), GridColumns::Used);

        assert_eq!(grid.rooms, vec!["A-1".to_string(), "C-3".to_string()]);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0].cell_text("A-1"), "09.30: early\n\n15.00: late");
        assert_eq!(grid.rows[0].cell_text("C-3"), "");
        assert_eq!(grid.rows[1].cell_text("C-3"), "09.00: other");
    }

    #[test]
    fn catalog_columns_include_unused_rooms() {
        let catalog = Catalog::new([("A-1", 0), ("B-2", 1), ("C-3", 0)]).expect("catalog");
        let grid = build_grid(&events(), GridColumns::Catalog(&catalog));
        assert_eq!(grid.rooms, vec!["A-1", "B-2", "C-3"]);
    }
}
