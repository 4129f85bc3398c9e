use roomplan_config::RoomplanConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: &RoomplanConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Normalize(args) => commands::normalize::handle(&args, config, flags),
        Commands::Allocate(args) => commands::allocate::handle(&args, config, flags),
        Commands::Grid(args) => commands::grid::handle(&args, config, flags),
        Commands::Sql(args) => commands::sql::handle(&args, config, flags),
        Commands::Catalog => commands::catalog::handle(config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
