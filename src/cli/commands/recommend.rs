use crate::cli::parser::Commands;
use crate::core::recommendation::{LenientParser, ParseRecommendation, StrictParser, split_summary};
use crate::errors::AppResult;
use crate::input::load_recommendations;
use crate::models::{PartialRecommendation, RecommendationCard};
use crate::ui::messages::{field, header, info, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{MISSING, or_missing};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Recommend { input, strict } = cmd {
        let lines = load_recommendations(&expand_tilde(input))?;
        let (summary, records) = split_summary(&lines);

        if records.is_empty() {
            info("No recommendations in input.");
            return Ok(());
        }

        header("Recommended schedule");
        if let Some(s) = summary {
            field("Total energy", format!("{:.2} kWh", s.total_energy));
            field("Total cost", format!("Rp{:.2}", s.total_cost));
        }

        let mut table = Table::new(["Name", "Type", "Priority", "Monthly kWh", "Cost", "Schedule"]);

        if *strict {
            for card in StrictParser.parse_all(records) {
                table.add_row(card_row(&card?));
            }
        } else {
            let parsed = LenientParser.parse_all(records);
            let partial = parsed.iter().filter(|r| !r.is_complete()).count();
            for rec in &parsed {
                table.add_row(partial_row(rec));
            }
            if partial > 0 {
                warning(format!("{} recommendation(s) had missing fields", partial));
            }
        }

        print!("{}", table.render());
    }
    Ok(())
}

fn card_row(c: &RecommendationCard) -> Vec<String> {
    vec![
        c.name.clone(),
        c.kind.clone(),
        c.priority_label().to_string(),
        format!("{:.2}", c.monthly_use),
        format!("{:.2}", c.cost),
        c.schedule.join(", "),
    ]
}

fn partial_row(r: &PartialRecommendation) -> Vec<String> {
    let cells = vec![
        or_missing(r.name.as_ref()),
        or_missing(r.kind.as_ref()),
        or_missing(r.priority.map(|p| if p { "High" } else { "Low" })),
        or_missing(r.monthly_use.map(|v| format!("{:.2}", v))),
        or_missing(r.cost.map(|v| format!("{:.2}", v))),
        r.schedule
            .as_ref()
            .map_or_else(|| MISSING.to_string(), |s| s.join(", ")),
    ];
    cells.iter().map(|c| colorize_optional(c)).collect()
}
