use roomplan_config::RoomplanConfig;
use roomplan_core::AllocationResult;
use roomplan_core::grid::{GridColumns, RoomDayGrid, build_grid};

use crate::cli::root_commands::GridArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::read_json;
use crate::output::{output, output_rows};

/// Handle `roomplan grid`.
pub fn handle(args: &GridArgs, config: &RoomplanConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result: AllocationResult = read_json(&args.result, "allocation result")?;

    let catalog;
    let columns = if args.catalog_rooms {
        catalog = config.catalog()?;
        GridColumns::Catalog(&catalog)
    } else {
        GridColumns::Used
    };
    let grid = build_grid(&result.events, columns);

    match flags.format {
        OutputFormat::Table => {
            let (headers, rows) = grid_rows(&grid);
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            output_rows(&header_refs, &rows);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&grid, flags.format),
    }
}

/// Date column followed by one column per room; multi-event cells go on one line.
fn grid_rows(grid: &RoomDayGrid) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = std::iter::once(String::from("date"))
        .chain(grid.rooms.iter().cloned())
        .collect();
    let rows = grid
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.date.format("%d.%m.%Y").to_string())
                .chain(
                    grid.rooms
                        .iter()
                        .map(|room| row.cell_text(room).replace("\n\n", "; ")),
                )
                .collect()
        })
        .collect();
    (headers, rows)
}
