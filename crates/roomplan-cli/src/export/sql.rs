//! Booking `INSERT` generation for an allocation.
//!
//! One row is produced per (date, room) holding at least one event; the row
//! describes the first such event in input order. Rows are ordered by date,
//! then room id.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use roomplan_config::ExportConfig;
use roomplan_core::Event;
use roomplan_core::errors::CoreError;
use roomplan_core::references::{UnknownRoomPolicy, check_room_references};

/// Room id -> database id of that room.
pub type RoomIds = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRow {
    pub room_id: i64,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlExport {
    pub rows: Vec<SqlRow>,
    /// Rooms used by events but missing from the id map.
    pub skipped_rooms: Vec<String>,
}

/// Collect the booking rows for `events`.
///
/// # Errors
///
/// [`CoreError::UnknownRooms`] when an event uses a room missing from
/// `room_ids` and `policy` is [`UnknownRoomPolicy::Strict`].
pub fn build_export(
    events: &[Event],
    room_ids: &RoomIds,
    config: &ExportConfig,
    policy: UnknownRoomPolicy,
) -> Result<SqlExport, CoreError> {
    let skipped_rooms =
        check_room_references(events, |room| room_ids.contains_key(room), policy)?;

    let mut first: BTreeMap<(NaiveDate, &str), (i64, &Event)> = BTreeMap::new();
    for event in events {
        let Some(room) = event.room() else {
            continue;
        };
        let Some(&room_id) = room_ids.get(room) else {
            continue;
        };
        first.entry((event.date(), room)).or_insert((room_id, event));
    }

    let rows = first
        .into_iter()
        .map(|((date, _), (room_id, event))| SqlRow {
            room_id,
            date,
            description: format!("{}{}", config.description_prefix, event.title),
        })
        .collect();

    Ok(SqlExport {
        rows,
        skipped_rooms,
    })
}

impl SqlExport {
    /// The full statement, or `None` when there is nothing to insert.
    #[must_use]
    pub fn statement(&self, config: &ExportConfig) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }
        let values = self
            .rows
            .iter()
            .map(|row| {
                format!(
                    "(ARRAY[{}], {}, '{}', {}, {}, {})",
                    row.room_id,
                    quote(&row.description),
                    row.date.format("%Y-%m-%d"),
                    quote(&config.pairs),
                    config.kind,
                    quote(&config.in_charge),
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");
        Some(format!(
            "INSERT INTO {}(auds, description, dt, pairs, type, in_charge) VALUES {values};\n",
            config.table
        ))
    }
}

/// SQL string literal; newlines are kept as the two characters `\n`.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''").replace('\n', "\\n"))
}
