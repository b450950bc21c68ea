use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tariff::{TARIFF_CLASSES, days_in_month, estimate_monthly, require_tariff_rate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header};
use crate::utils::decimal_comma;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tariff {
        class,
        list,
        kwh,
        date,
    } = cmd
    {
        if *list {
            let mut t = Table::new(["Class", "Rp/kWh"]);
            for (c, rate) in TARIFF_CLASSES {
                t.add_row(vec![c.to_string(), decimal_comma(*rate)]);
            }
            print!("{}", t.render());
            return Ok(());
        }

        let class = class.as_deref().unwrap_or(&cfg.tariff_class);
        let rate = require_tariff_rate(class)?;

        header(format!("Tariff {}", class));
        field("Rate", format!("Rp{}/kWh", decimal_comma(rate)));

        if let Some(kwh) = kwh {
            let day = match date {
                Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(d.clone()))?,
                None => chrono::Local::now().date_naive(),
            };
            let days = days_in_month(day);
            let (monthly, cost) = estimate_monthly(*kwh, rate, days);

            field("Days in month", days);
            field("Monthly energy", format!("{} kWh", decimal_comma(monthly)));
            field("Estimated cost", format!("Rp{}", decimal_comma(cost)));
        }
    }
    Ok(())
}
