use crate::cli::parser::Commands;
use crate::core::overuse::find_overused_devices;
use crate::errors::AppResult;
use crate::input::{load_appliances, load_table};
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{RESET, color_for_excess};
use crate::utils::hours2readable;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Overused { table, appliances } = cmd {
        let table = load_table(&expand_tilde(table))?;
        let appliances = load_appliances(&expand_tilde(appliances))?;

        let overused = find_overused_devices(&table, &appliances)?;
        if overused.is_empty() {
            success("No device exceeded its average usage.");
            return Ok(());
        }

        header("Overused devices");
        let mut t = Table::new(["Device", "Duration", "Average", "Start", "End"]);
        for d in &overused {
            t.add_row(vec![
                d.name.clone(),
                hours2readable(d.duration),
                hours2readable(d.average_usage),
                d.usage_start_time.clone(),
                d.usage_end_time.clone(),
            ]);
        }
        print!("{}", t.render());

        let worst = overused
            .iter()
            .max_by(|a, b| a.excess().total_cmp(&b.excess()));
        if let Some(w) = worst {
            warning(format!(
                "{} ran {}{}{} over its average",
                w.name,
                color_for_excess(w.excess()),
                hours2readable(w.excess()),
                RESET
            ));
        }

        let over_target: Vec<&str> = appliances
            .iter()
            .filter(|a| a.exceeds_daily_target())
            .map(|a| a.name.as_str())
            .collect();
        if !over_target.is_empty() {
            warning(format!("Over daily target today: {}", over_target.join(", ")));
        }
    }
    Ok(())
}
