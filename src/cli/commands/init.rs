use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Write a default configuration file at `cfg_path`.
pub fn handle(cmd: &Commands, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if cfg_path.exists() && !*force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                cfg_path.display()
            ));
            return Ok(());
        }

        Config::default().save_to(cfg_path)?;
        success(format!("Config file: {}", cfg_path.display()));
    }
    Ok(())
}
