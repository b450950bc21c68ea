use crate::core::stats::parse_duration;
use crate::errors::AppResult;
use crate::models::table::{ApplianceTable, columns};
use crate::models::{Appliance, OverusedDevice};

/// Rows whose duration is strictly above the matching appliance's average.
///
/// Matching is by exact name; the first appliance with that name wins.
/// Rows without a matching appliance are skipped, not reported.
pub fn find_overused_devices(
    table: &ApplianceTable,
    appliances: &[Appliance],
) -> AppResult<Vec<OverusedDevice>> {
    let names = table.require(columns::DEVICE_NAME)?;
    let durations = table.require(columns::DURATION)?;
    let starts = table.require(columns::USAGE_START)?;
    let ends = table.require(columns::USAGE_END)?;

    let mut overused = Vec::new();

    for (i, name) in names.iter().enumerate() {
        let Some(appliance) = appliances.iter().find(|a| &a.name == name) else {
            tracing::debug!(device = %name, "no appliance with this name, row skipped");
            continue;
        };

        let duration = parse_duration(&durations[i]);
        if duration > appliance.average_usage {
            overused.push(OverusedDevice {
                name: name.clone(),
                duration,
                average_usage: appliance.average_usage,
                usage_start_time: starts[i].clone(),
                usage_end_time: ends[i].clone(),
            });
        }
    }

    tracing::debug!(rows = names.len(), overused = overused.len(), "overuse scan done");
    Ok(overused)
}
