// src/export/model.rs

use crate::core::recommendation::{ParseRecommendation, StrictParser, split_summary};
use crate::errors::AppResult;
use crate::models::{RecommendationCard, RecommendationSummary};
use crate::utils::decimal_comma;
use serde::Serialize;

/// Schedule report built from a backend recommendation set.
#[derive(Serialize, Clone, Debug)]
pub struct ScheduleReport {
    pub title: String,
    pub generated_on: String,
    pub summary: RecommendationSummary,
    pub appliances: Vec<RecommendationCard>,
}

impl ScheduleReport {
    /// Strictly parse every record line; the first malformed one aborts.
    /// A leading totals line becomes the summary, otherwise totals are summed.
    pub fn from_recommendations<S: AsRef<str>>(title: &str, lines: &[S]) -> AppResult<Self> {
        let (summary, records) = split_summary(lines);

        let appliances = StrictParser
            .parse_all(records)
            .into_iter()
            .collect::<AppResult<Vec<_>>>()?;

        let summary = summary.unwrap_or_else(|| RecommendationSummary::from_cards(&appliances));

        Ok(Self {
            title: title.to_string(),
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
            summary,
            appliances,
        })
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.appliances.iter().map(card_to_row).collect()
    }
}

/// Header for CSV and table output.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Name",
        "Type",
        "Priority",
        "Monthly Use (kWh)",
        "Cost (IDR)",
        "Schedule",
    ]
}

pub(crate) fn card_to_row(c: &RecommendationCard) -> Vec<String> {
    vec![
        c.name.clone(),
        c.kind.clone(),
        c.priority_label().to_string(),
        decimal_comma(c.monthly_use),
        decimal_comma(c.cost),
        c.schedule.join(", "),
    ]
}
