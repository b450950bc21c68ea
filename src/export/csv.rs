use crate::errors::AppResult;
use crate::export::model::{ScheduleReport, get_headers};
use csv::Writer;
use std::path::Path;

/// Write the report table as CSV, one appliance per record.
pub(crate) fn write_csv(path: &Path, report: &ScheduleReport) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in report.rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
