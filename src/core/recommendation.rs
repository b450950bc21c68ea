//! Parsing of backend-authored recommendation strings.
//!
//! The backend emits one line per appliance, shaped like
//! `Name: Fridge, Type: Cooling, Priority: true, Monthly Use: 12.50 kWh, Cost: Rp50000.00, Schedule: [18:00–24:00 00:00–06:00]`
//! preceded by a summary line carrying the set's totals.
//!
//! Two strategies are provided. [`StrictParser`] requires the exact shape and
//! is used where a malformed record must abort (report export).
//! [`LenientParser`] recovers whatever fields it can find and is used for
//! listing.

use crate::core::stats::leading_number;
use crate::errors::{AppError, AppResult};
use crate::models::{PartialRecommendation, RecommendationCard, RecommendationSummary};
use once_cell::sync::Lazy;
use regex::Regex;

static STRICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Name: (.+?), Type: (.+?), Priority: (true|false), Monthly Use: (.+?) kWh, Cost: Rp(.+?), Schedule: \[(.+)\]$",
    )
    .expect("strict recommendation pattern")
});

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Name: ([^,]+)").expect("name pattern"));
static TYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Type: ([^,]+)").expect("type pattern"));
static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Priority: (true|false)").expect("priority pattern"));
static MONTHLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Monthly Use: ([0-9.]+) kWh").expect("monthly use pattern"));
static COST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Cost: Rp([0-9.]+)").expect("cost pattern"));
static SCHEDULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Schedule: \[([^\]]*)\]").expect("schedule pattern"));

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(Total Energi = ([0-9.]+) kWh, Biaya = Rp([0-9.]+)\)").expect("summary pattern")
});

/// A way of turning one recommendation line into a record.
pub trait ParseRecommendation {
    type Output;

    fn parse(&self, input: &str) -> Self::Output;

    fn parse_all<'a, I>(&self, lines: I) -> Vec<Self::Output>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|l| self.parse(l)).collect()
    }
}

/// All-or-nothing parser over the exact backend format.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictParser;

impl ParseRecommendation for StrictParser {
    type Output = AppResult<RecommendationCard>;

    fn parse(&self, input: &str) -> Self::Output {
        let caps = STRICT_RE
            .captures(input)
            .ok_or_else(|| AppError::FormatMismatch(input.to_string()))?;

        let number = |i: usize| -> AppResult<f64> {
            caps[i]
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::FormatMismatch(input.to_string()))
        };

        let card = RecommendationCard {
            name: caps[1].trim().to_string(),
            kind: caps[2].trim().to_string(),
            priority: &caps[3] == "true",
            monthly_use: number(4)?,
            cost: number(5)?,
            schedule: caps[6].split(' ').map(|s| s.trim().to_string()).collect(),
        };

        tracing::debug!(name = %card.name, slots = card.schedule.len(), "strict parse ok");
        Ok(card)
    }
}

/// Field-by-field parser; missing or unreadable fields become `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientParser;

impl ParseRecommendation for LenientParser {
    type Output = PartialRecommendation;

    fn parse(&self, input: &str) -> Self::Output {
        let capture = |re: &Regex| re.captures(input).map(|c| c[1].to_string());

        let rec = PartialRecommendation {
            name: capture(&NAME_RE),
            kind: capture(&TYPE_RE),
            priority: capture(&PRIORITY_RE).map(|p| p == "true"),
            monthly_use: capture(&MONTHLY_RE).and_then(|v| leading_number(&v)),
            cost: capture(&COST_RE).and_then(|v| leading_number(&v)),
            schedule: capture(&SCHEDULE_RE).map(|inner| {
                inner
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
        };

        if !rec.is_complete() {
            tracing::debug!(missing = ?rec.missing_fields(), "lenient parse is partial");
        }
        rec
    }
}

/// Recognise the backend's leading totals line, e.g.
/// `Jadwal Penggunaan Appliances (Total Energi = 42.00 kWh, Biaya = Rp60677.40):`
pub fn parse_summary_line(input: &str) -> Option<RecommendationSummary> {
    let caps = SUMMARY_RE.captures(input)?;
    Some(RecommendationSummary {
        total_energy: leading_number(&caps[1])?,
        total_cost: leading_number(&caps[2])?,
    })
}

/// Split a backend recommendation list into its optional summary and the
/// per-appliance lines. Blank lines are dropped.
pub fn split_summary<S: AsRef<str>>(lines: &[S]) -> (Option<RecommendationSummary>, Vec<&str>) {
    let mut summary = None;
    let mut records = Vec::new();

    for line in lines.iter().map(|l| l.as_ref().trim()) {
        if line.is_empty() {
            continue;
        }
        match parse_summary_line(line) {
            Some(s) if summary.is_none() && records.is_empty() => summary = Some(s),
            _ => records.push(line),
        }
    }

    (summary, records)
}
