use anyhow::Context;
use desk_config::DeskConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env` support) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DeskConfig> {
    let mut config = DeskConfig::load_with_dotenv().context("failed to load newsdesk config")?;

    if let Some(dir) = &flags.data_dir {
        config.storage.dir = dir.display().to_string();
    }

    Ok(config)
}
