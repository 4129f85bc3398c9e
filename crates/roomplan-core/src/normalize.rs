//! Input normalization: raw tabular rows to [`Event`]s.
//!
//! Each row carries title, type, date, time and an optional room. Dates and
//! times are combined and parsed with [`TIMESTAMP_FORMAT`]. A row with no date
//! is skipped (quietly when the title is empty too, since that is just a blank
//! row); a row whose timestamp does not parse is a hard error.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::event::{Event, RawRecord, SourceDocument};

/// Day-month-year and hour-minute, both dot separated: `10.01.2024 09.30`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H.%M";

const TITLE: usize = 0;
const KIND: usize = 1;
const DATE: usize = 2;
const TIME: usize = 3;
const ROOM: usize = 4;
const MIN_CELLS: usize = 4;
const MAX_CELLS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Rooms whose pins survive normalization. Empty keeps every pin.
    pub retain_pins: Vec<String>,
}

impl NormalizeOptions {
    fn keeps_pin(&self, room: &str) -> bool {
        self.retain_pins.is_empty() || self.retain_pins.iter().any(|kept| kept == room)
    }
}

/// A row that was dropped because it had no date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedRecord {
    pub source: String,
    /// 1-based index of the data row within its source.
    pub row: usize,
    pub title: String,
    pub reason: String,
}

/// Outcome of normalizing a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Event(Event),
    Skipped(SkippedRecord),
    Blank,
}

/// Events and skipped-row diagnostics, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedRecord>,
}

impl NormalizedBatch {
    fn push(&mut self, outcome: Normalized) {
        match outcome {
            Normalized::Event(event) => self.events.push(event),
            Normalized::Skipped(skipped) => self.skipped.push(skipped),
            Normalized::Blank => {}
        }
    }
}

/// Normalize row `row` (1-based) of `source`.
pub fn normalize_record(
    source: &str,
    row: usize,
    record: &RawRecord,
    options: &NormalizeOptions,
) -> Result<Normalized, CoreError> {
    if !(MIN_CELLS..=MAX_CELLS).contains(&record.len()) {
        return Err(CoreError::Malformed {
            origin: source.to_owned(),
            row,
            reason: format!(
                "expected {MIN_CELLS} or {MAX_CELLS} cells, found {}",
                record.len()
            ),
        });
    }

    let title = record.cell(TITLE);
    let date = record.cell(DATE);

    if date.is_empty() {
        if title.is_empty() {
            return Ok(Normalized::Blank);
        }
        warn!(source, row, title, "record has no date; skipping");
        return Ok(Normalized::Skipped(SkippedRecord {
            source: source.to_owned(),
            row,
            title: title.to_owned(),
            reason: "missing date".to_owned(),
        }));
    }

    let input = format!("{date} {}", record.cell(TIME));
    let start = NaiveDateTime::parse_from_str(&input, TIMESTAMP_FORMAT).map_err(|reason| {
        CoreError::Parse {
            origin: source.to_owned(),
            row,
            input: input.clone(),
            reason,
        }
    })?;

    let mut event = Event::new(source, title, record.cell(KIND), start);
    let room = record.cell(ROOM);
    if !room.is_empty() {
        if options.keeps_pin(room) {
            event = event.pinned_to(room);
        } else {
            debug!(source, row, room, "releasing pre-filled room not in retain list");
        }
    }

    Ok(Normalized::Event(event))
}

/// Normalize every row of one source, stopping at the first hard error.
pub fn normalize_source(
    source: &str,
    records: &[RawRecord],
    options: &NormalizeOptions,
) -> Result<NormalizedBatch, CoreError> {
    let mut batch = NormalizedBatch::default();
    for (index, record) in records.iter().enumerate() {
        batch.push(normalize_record(source, index + 1, record, options)?);
    }
    Ok(batch)
}

/// Normalize a whole document: sources in name order, rows in order.
pub fn normalize_all(
    document: &SourceDocument,
    options: &NormalizeOptions,
) -> Result<NormalizedBatch, CoreError> {
    let mut batch = NormalizedBatch::default();
    for (source, records) in document {
        let normalized = normalize_source(source, records, options)?;
        batch.events.extend(normalized.events);
        batch.skipped.extend(normalized.skipped);
    }
    debug!(
        events = batch.events.len(),
        skipped = batch.skipped.len(),
        "normalized document"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record(cells: &[&str]) -> RawRecord {
        RawRecord::new(cells.iter().copied())
    }

    fn event_of(outcome: Normalized) -> Event {
        match outcome {
            Normalized::Event(event) => event,
            other => panic!("expected an event, got {other:?}"),
        }
    }

    #[test]
    fn parses_four_cell_row() {
        let outcome = normalize_record(
            "Physics",
            1,
            &record(&["Thermodynamics ", "exam", "10.01.2024", "09.30"]),
            &NormalizeOptions::default(),
        )
        .expect("row should normalize");
        let event = event_of(outcome);

        let expected = NaiveDate::from_ymd_opt(2024, 1, 10)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid");
        assert_eq!(event.title, "Thermodynamics");
        assert_eq!(event.kind, "exam");
        assert_eq!(event.category, "Physics");
        assert_eq!(event.start, expected);
        assert_eq!(event.room(), None);
        assert!(!event.is_pinned());
    }

    #[test]
    fn room_cell_pins_event() {
        let event = event_of(
            normalize_record(
                "Physics",
                1,
                &record(&["Optics", "exam", "10.01.2024", "09.30", "Conference hall"]),
                &NormalizeOptions::default(),
            )
            .expect("row should normalize"),
        );
        assert!(event.is_pinned());
        assert_eq!(event.room(), Some("Conference hall"));
    }

    #[test]
    fn empty_room_cell_leaves_event_unpinned() {
        let event = event_of(
            normalize_record(
                "Physics",
                1,
                &record(&["Optics", "exam", "10.01.2024", "09.30", "   "]),
                &NormalizeOptions::default(),
            )
            .expect("row should normalize"),
        );
        assert!(!event.is_pinned());
    }

    #[test]
    fn retain_list_releases_other_pins() {
        let options = NormalizeOptions {
            retain_pins: vec!["Conference hall".into()],
        };
        let kept = event_of(
            normalize_record(
                "Physics",
                1,
                &record(&["Optics", "exam", "10.01.2024", "09.30", "Conference hall"]),
                &options,
            )
            .expect("row should normalize"),
        );
        let released = event_of(
            normalize_record(
                "Physics",
                2,
                &record(&["Optics", "exam", "11.01.2024", "09.30", "A-101"]),
                &options,
            )
            .expect("row should normalize"),
        );
        assert!(kept.is_pinned());
        assert!(!released.is_pinned());
        assert_eq!(released.room(), None);
    }

    #[test]
    fn blank_row_is_ignored() {
        let outcome = normalize_record(
            "Physics",
            3,
            &record(&["", "", "", ""]),
            &NormalizeOptions::default(),
        )
        .expect("blank row is not an error");
        assert_eq!(outcome, Normalized::Blank);
    }

    #[test]
    fn missing_date_is_skipped_with_diagnostic() {
        let outcome = normalize_record(
            "Physics",
            4,
            &record(&["Optics", "exam", " ", "09.30"]),
            &NormalizeOptions::default(),
        )
        .expect("missing date is not an error");
        let Normalized::Skipped(skipped) = outcome else {
            panic!("expected skipped outcome");
        };
        assert_eq!(skipped.row, 4);
        assert_eq!(skipped.title, "Optics");
        assert_eq!(skipped.reason, "missing date");
    }

    #[rstest]
    #[case("2024-01-10", "09.30")]
    #[case("10.01.2024", "09:30")]
    #[case("10.01.2024", "")]
    #[case("32.01.2024", "09.30")]
    #[case("10.01.2024", "25.00")]
    fn malformed_timestamp_is_fatal(#[case] date: &str, #[case] time: &str) {
        let err = normalize_record(
            "Physics",
            2,
            &record(&["Optics", "exam", date, time]),
            &NormalizeOptions::default(),
        )
        .expect_err("bad timestamp must fail");
        assert!(matches!(err, CoreError::Parse { row: 2, .. }));
    }

    #[rstest]
    #[case(&["Optics", "exam", "10.01.2024"])]
    #[case(&["Optics", "exam", "10.01.2024", "09.30", "A-101", "extra"])]
    fn wrong_cell_count_is_malformed(#[case] cells: &[&str]) {
        let err = normalize_record("Physics", 1, &record(cells), &NormalizeOptions::default())
            .expect_err("row width must be 4 or 5");
        assert!(matches!(err, CoreError::Malformed { row: 1, .. }));
        assert!(
            err.to_string()
                .contains(&format!("expected 4 or 5 cells, found {}", cells.len()))
        );
    }

    #[test]
    fn normalize_all_preserves_source_then_row_order() {
        let mut document = SourceDocument::new();
        document.insert(
            "Physics".into(),
            vec![
                record(&["P1", "exam", "10.01.2024", "09.00"]),
                record(&["", "", "", ""]),
                record(&["P2", "exam", "", ""]),
                record(&["P3", "exam", "11.01.2024", "09.00"]),
            ],
        );
        document.insert(
            "Architecture".into(),
            vec![record(&["A1", "exam", "10.01.2024", "12.00"])],
        );

        let batch =
            normalize_all(&document, &NormalizeOptions::default()).expect("document normalizes");
        let titles: Vec<&str> = batch.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "P1", "P3"]);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].row, 3);
    }

    #[test]
    fn normalize_source_propagates_parse_failure() {
        let records = vec![
            record(&["P1", "exam", "10.01.2024", "09.00"]),
            record(&["P2", "exam", "10.01.2024", "nine"]),
        ];
        let err = normalize_source("Physics", &records, &NormalizeOptions::default())
            .expect_err("second row must fail");
        assert!(err.to_string().contains("Physics row 2"));
    }
}
