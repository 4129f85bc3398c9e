use roomplan_config::RoomplanConfig;
use roomplan_core::responses::{AllocateResponse, AssignmentRow};
use roomplan_core::{AllocationOptions, AllocationResult, Catalog, allocate};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AllocateArgs;
use crate::commands::normalize::load_batch;
use crate::commands::shared::input::write_json;
use crate::output::output;

/// Handle `roomplan allocate`.
pub fn handle(
    args: &AllocateArgs,
    config: &RoomplanConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = config.catalog()?;
    let run = execute(args, config, &catalog)?;

    if args.full {
        output(&AssignmentRow::from_result(&run.result, &catalog), flags.format)
    } else {
        output(&run.response, flags.format)
    }
}

pub struct AllocationRun {
    pub result: AllocationResult,
    pub response: AllocateResponse,
}

/// Normalize the input, allocate against `catalog` and write `--output`.
pub fn execute(
    args: &AllocateArgs,
    config: &RoomplanConfig,
    catalog: &Catalog,
) -> anyhow::Result<AllocationRun> {
    let batch = load_batch(&args.input, config)?;
    let options = allocation_options(args, config);
    let result = allocate(catalog, batch.events, &options)?;

    if let Some(path) = &args.output {
        write_json(path, &result)?;
        tracing::info!(path = %path.display(), "wrote allocation result");
    }

    let response = AllocateResponse {
        seed: options.seed,
        summary: result.summary(),
        skipped: batch.skipped,
        unplaced: result.unplaced.clone(),
    };
    Ok(AllocationRun { result, response })
}

/// Configured options with command-line overrides applied.
fn allocation_options(args: &AllocateArgs, config: &RoomplanConfig) -> AllocationOptions {
    let mut options = config.allocation.options();
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    if let Some(gap_hours) = args.gap_hours {
        options.gap_hours = gap_hours;
    }
    options
}
