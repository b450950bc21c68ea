use crate::errors::AppResult;
use crate::export::model::ScheduleReport;
use std::path::Path;

/// Write the whole report (title, summary, parsed cards) as pretty JSON.
pub(crate) fn write_json(path: &Path, report: &ScheduleReport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
