use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `roomplan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roomplan",
    version,
    about = "roomplan - assign rooms to timetabled events"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./roomplan.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::SchemaType;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["roomplan", "--format", "table", "--verbose", "catalog"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Catalog));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["roomplan", "catalog", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roomplan", "--format", "xml", "catalog"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn allocate_overrides_parse() {
        let cli = Cli::try_parse_from([
            "roomplan",
            "allocate",
            "--input",
            "rows.json",
            "--seed",
            "42",
            "--gap-hours",
            "4.5",
            "--output",
            "result.json",
            "--full",
        ])
        .expect("cli should parse");

        let Commands::Allocate(args) = cli.command else {
            panic!("expected allocate");
        };
        assert_eq!(args.input, Path::new("rows.json"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.gap_hours, Some(4.5));
        assert_eq!(args.output.as_deref(), Some(Path::new("result.json")));
        assert!(args.full);
    }

    #[test]
    fn sql_requires_room_ids() {
        let parsed = Cli::try_parse_from(["roomplan", "sql", "--result", "result.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_type_is_kebab_case() {
        let cli = Cli::try_parse_from(["roomplan", "schema", "allocation-result"])
            .expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, SchemaType::AllocationResult);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["roomplan", "--config", "/tmp/demo.toml", "catalog"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/demo.toml")));
    }
}
