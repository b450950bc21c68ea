// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::ScheduleReport;

use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `report` to `path` in the requested format.
pub fn write_report(
    report: &ScheduleReport,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;
    info(format!(
        "Exporting {} appliances to {}: {}",
        report.appliances.len(),
        format.as_str().to_uppercase(),
        path.display()
    ));

    match format {
        ExportFormat::Csv => csv::write_csv(path, report)?,
        ExportFormat::Json => json::write_json(path, report)?,
    }

    tracing::info!(path = %path.display(), format = format.as_str(), "report written");
    success(format!("{} export completed: {}", format.as_str().to_uppercase(), path.display()));
    Ok(())
}
