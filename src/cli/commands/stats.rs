use crate::cli::parser::Commands;
use crate::core::stats::{ApplianceSummary, DeviceHighlight, devices_by_location};
use crate::errors::AppResult;
use crate::input::load_table;
use crate::ui::messages::{field, header, info};
use crate::utils::formatting::MISSING;
use crate::utils::hours2readable;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Stats { table, location } = cmd {
        let table = load_table(&expand_tilde(table))?;
        let summary = ApplianceSummary::from_table(&table)?;

        header("Appliance overview");
        field("Devices", summary.device_count);
        field("Total energy", format!("{:.2} kWh", summary.total_energy));
        field("Average energy", format!("{:.2} kWh", summary.average_energy));
        field("Connected devices", summary.connected_count);
        field(
            "Highest energy",
            describe(&summary.max_energy_device, |v| format!("{:.2} kWh", v)),
        );
        field(
            "Longest usage",
            describe(&summary.max_duration_device, hours2readable),
        );

        header("Average energy by type");
        let mut by_type = Table::new(["Type", "Avg kWh"]);
        for (kind, avg) in &summary.average_energy_by_type {
            by_type.add_row(vec![kind.clone(), format!("{:.2}", avg)]);
        }
        print!("{}", by_type.render());

        header("Energy by location");
        let mut by_loc = Table::new(["Location", "Devices", "Total kWh", "Avg kWh"]);
        for (loc, g) in &summary.energy_by_location {
            by_loc.add_row(vec![
                loc.clone(),
                g.count.to_string(),
                format!("{:.2}", g.sum),
                format!("{:.2}", g.mean()),
            ]);
        }
        print!("{}", by_loc.render());

        if let Some(loc) = location {
            header(format!("Devices at {}", loc));
            let devices = devices_by_location(&table, loc)?;
            if devices.is_empty() {
                info(format!("No devices found at '{}'", loc));
            } else {
                let mut t = Table::new(["Device", "Energy (kWh)", "Duration"]);
                for d in devices {
                    t.add_row(vec![
                        d.name,
                        format!("{:.2}", d.energy),
                        hours2readable(d.duration),
                    ]);
                }
                print!("{}", t.render());
            }
        }
    }
    Ok(())
}

fn describe(device: &Option<DeviceHighlight>, fmt_value: impl Fn(f64) -> String) -> String {
    match device {
        Some(d) => format!("{} ({}) {}", d.name, d.kind, fmt_value(d.value)),
        None => MISSING.to_string(),
    }
}
