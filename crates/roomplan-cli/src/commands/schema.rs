use roomplan_core::{AllocationResult, Event, SourceDocument};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `roomplan schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::RecordSource => schema_for!(SourceDocument),
        SchemaType::Event => schema_for!(Event),
        SchemaType::AllocationResult => schema_for!(AllocationResult),
    };
    output(&schema, flags.format)
}
