use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            header(format!("Configuration ({})", cfg_path.display()));
            // never echo the session token
            let shown = Config {
                token: cfg.token.as_ref().map(|_| "<hidden>".to_string()),
                ..cfg.clone()
            };
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        if *edit_config {
            if !cfg_path.exists() {
                cfg.save_to(cfg_path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&requested, cfg_path) {
                success(format!("Configuration edited using '{}'", requested));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                ));
                if !run_editor(&default_editor, cfg_path) {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration with '{}'",
                        default_editor
                    )));
                }
                success(format!("Configuration edited using fallback '{}'", default_editor));
            }

            // reject edits that leave the file unreadable
            Config::load_from(cfg_path)?;
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
