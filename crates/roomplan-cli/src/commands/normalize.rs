use std::path::Path;

use roomplan_config::RoomplanConfig;
use roomplan_core::SourceDocument;
use roomplan_core::normalize::{NormalizedBatch, normalize_all};

use crate::cli::root_commands::NormalizeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::read_json;
use crate::output::output;

/// Handle `roomplan normalize`.
pub fn handle(
    args: &NormalizeArgs,
    config: &RoomplanConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let batch = load_batch(&args.input, config)?;
    match flags.format {
        // Skipped rows are already reported as warnings on stderr.
        OutputFormat::Table => output(&batch.events, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&batch, flags.format),
    }
}

/// Read a record-source document and normalize every source in it.
pub fn load_batch(input: &Path, config: &RoomplanConfig) -> anyhow::Result<NormalizedBatch> {
    let document: SourceDocument = read_json(input, "record sources")?;
    let batch = normalize_all(&document, &config.normalize.options())?;
    tracing::info!(
        sources = document.len(),
        events = batch.events.len(),
        skipped = batch.skipped.len(),
        "normalized input"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roomplan_config::{NormalizeConfig, RoomplanConfig};
    use tempfile::TempDir;

    use super::load_batch;

    const ROWS: &str = r#"{
        "Physics": [
            ["Optics", "exam", "10.01.2024", "09.00"],
            ["Mechanics", "exam", "10.01.2024", "13.30", "Conference hall"],
            ["Thermo", "exam", "11.01.2024", "10.00", "B-2"],
            ["Undated", "exam", "", ""]
        ]
    }"#;

    #[test]
    fn normalizes_file_with_retained_pins() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("rows.json");
        std::fs::write(&path, ROWS).expect("write rows");
        let config = RoomplanConfig {
            normalize: NormalizeConfig {
                retain_pins: vec!["Conference hall".into()],
            },
            ..RoomplanConfig::default()
        };

        let batch = load_batch(&path, &config).expect("normalizes");
        let rooms: Vec<Option<&str>> = batch.events.iter().map(|e| e.room()).collect();
        assert_eq!(rooms, vec![None, Some("Conference hall"), None]);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].title, "Undated");
    }

    #[test]
    fn bad_timestamp_fails_with_location() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("rows.json");
        std::fs::write(&path, r#"{"Law": [["Torts", "exam", "31.02.2024", "09.00"]]}"#)
            .expect("write rows");

        let err = load_batch(&path, &RoomplanConfig::default()).expect_err("bad date");
        let message = format!("{err:#}");
        assert!(message.contains("Law"), "{message}");
    }
}
