use std::path::Path;

use anyhow::Context;
use roomplan_config::RoomplanConfig;

use crate::cli::GlobalFlags;

/// Load `.env` (next to an explicit config file, else the working directory)
/// and then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RoomplanConfig> {
    load_dotenv(flags.config.as_deref())?;

    RoomplanConfig::load_from(flags.config.as_deref()).with_context(|| match &flags.config {
        Some(path) => format!("failed to load configuration from {}", path.display()),
        None => String::from("failed to load configuration"),
    })
}

fn load_dotenv(config_path: Option<&Path>) -> anyhow::Result<()> {
    let sibling = config_path
        .and_then(Path::parent)
        .map(|dir| dir.join(".env"))
        .filter(|path| path.exists());

    if let Some(env_path) = sibling {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
