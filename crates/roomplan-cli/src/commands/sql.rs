use anyhow::Context;
use roomplan_config::RoomplanConfig;
use roomplan_core::AllocationResult;
use roomplan_core::references::UnknownRoomPolicy;
use roomplan_core::responses::SqlExportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SqlArgs;
use crate::commands::shared::input::{read_json, write_text};
use crate::export::sql::{RoomIds, SqlExport, build_export};
use crate::output::output;

/// Handle `roomplan sql`.
pub fn handle(args: &SqlArgs, config: &RoomplanConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let export = prepare(args, config)?;
    let statement = export.statement(&config.export);

    let response = SqlExportResponse {
        rows: export.rows.len(),
        skipped_rooms: export.skipped_rooms,
        output: args.out.as_ref().map(|path| path.display().to_string()),
    };

    match (&args.out, statement) {
        (Some(path), Some(statement)) => {
            write_text(path, &statement)?;
            output(&response, flags.format)
        }
        (None, Some(statement)) => {
            print!("{statement}");
            Ok(())
        }
        (_, None) => {
            tracing::warn!("no assigned events to export; nothing written");
            output(
                &SqlExportResponse {
                    output: None,
                    ..response
                },
                flags.format,
            )
        }
    }
}

fn prepare(args: &SqlArgs, config: &RoomplanConfig) -> anyhow::Result<SqlExport> {
    let result: AllocationResult = read_json(&args.result, "allocation result")?;
    let room_ids: RoomIds = read_json(&args.room_ids, "room ids")?;
    let policy = if args.skip_unknown_rooms {
        UnknownRoomPolicy::Report
    } else {
        UnknownRoomPolicy::Strict
    };

    let export = build_export(&result.events, &room_ids, &config.export, policy)
        .context("pass --skip-unknown-rooms to leave these rooms out")?;
    for room in &export.skipped_rooms {
        tracing::warn!(room = %room, "room has no database id; its events are left out");
    }
    Ok(export)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roomplan_config::RoomplanConfig;
    use roomplan_core::{AllocationResult, Event};
    use tempfile::TempDir;

    use super::prepare;
    use crate::cli::root_commands::SqlArgs;
    use crate::commands::shared::input::write_json;

    fn fixture(dir: &Path) -> SqlArgs {
        let start = NaiveDate::from_ymd_opt(2024, 1, 10)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid");
        let result = AllocationResult {
            events: vec![
                Event::new("S", "Optics", "exam", start).pinned_to("A-1"),
                Event::new("S", "Offsite", "exam", start).pinned_to("Annex"),
            ],
            placements: Vec::new(),
            unplaced: Vec::new(),
        };
        let result_path = dir.join("result.json");
        write_json(&result_path, &result).expect("write result");
        let ids_path = dir.join("ids.json");
        std::fs::write(&ids_path, r#"{"A-1": 17}"#).expect("write ids");

        SqlArgs {
            result: result_path,
            room_ids: ids_path,
            skip_unknown_rooms: false,
            out: None,
        }
    }

    #[test]
    fn unknown_room_is_fatal_by_default() {
        let dir = TempDir::new().expect("tempdir");
        let args = fixture(dir.path());
        let err = prepare(&args, &RoomplanConfig::default()).expect_err("Annex is unknown");
        let message = format!("{err:#}");
        assert!(message.contains("--skip-unknown-rooms"), "{message}");
        assert!(message.contains("Annex"), "{message}");
    }

    #[test]
    fn skip_flag_leaves_unknown_rooms_out() {
        let dir = TempDir::new().expect("tempdir");
        let mut args = fixture(dir.path());
        args.skip_unknown_rooms = true;
        let export = prepare(&args, &RoomplanConfig::default()).expect("skips Annex");
        assert_eq!(export.skipped_rooms, vec!["Annex".to_string()]);
        assert_eq!(export.rows.len(), 1);
        assert_eq!(export.rows[0].room_id, 17);
    }
}
