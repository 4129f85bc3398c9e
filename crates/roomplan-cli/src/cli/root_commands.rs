use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Turn per-source row tables into events.
    Normalize(NormalizeArgs),
    /// Normalize and assign rooms to every unpinned event.
    Allocate(AllocateArgs),
    /// Render an allocation as a date x room grid.
    Grid(GridArgs),
    /// Generate the booking INSERT statement for an allocation.
    Sql(SqlArgs),
    /// List the configured room catalog.
    Catalog,
    /// Print the JSON Schema of an input or output document.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// JSON object mapping source name -> rows of cells.
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct AllocateArgs {
    /// JSON object mapping source name -> rows of cells.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Shuffle seed (overrides `allocation.seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimum hours between two events sharing a room (overrides `allocation.gap_hours`).
    #[arg(long)]
    pub gap_hours: Option<f64>,

    /// Write the full allocation result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every event with its room instead of the summary.
    #[arg(long)]
    pub full: bool,
}

#[derive(Clone, Debug, Args)]
pub struct GridArgs {
    /// Allocation result written by `allocate --output`.
    #[arg(short, long)]
    pub result: PathBuf,

    /// One column per catalog room, used or not.
    #[arg(long)]
    pub catalog_rooms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SqlArgs {
    /// Allocation result written by `allocate --output`.
    #[arg(short, long)]
    pub result: PathBuf,

    /// JSON object mapping room id -> database room id.
    #[arg(long)]
    pub room_ids: PathBuf,

    /// Leave out rooms missing from the id map instead of failing.
    #[arg(long)]
    pub skip_unknown_rooms: bool,

    /// Write the statement here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    RecordSource,
    Event,
    AllocationResult,
}
