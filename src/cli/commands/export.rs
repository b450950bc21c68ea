use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ScheduleReport, write_report};
use crate::input::load_recommendations;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        file,
        format,
        title,
        force,
    } = cmd
    {
        let lines = load_recommendations(&expand_tilde(input))?;
        let title = title.as_deref().unwrap_or(&cfg.report_title);

        let report = ScheduleReport::from_recommendations(title, &lines)?;
        if report.appliances.is_empty() {
            return Err(AppError::Export("no recommendations to export".to_string()));
        }

        write_report(&report, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
