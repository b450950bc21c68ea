//! PLN electricity tariff classes and cost estimates.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// `(class, IDR per kWh)`.
pub const TARIFF_CLASSES: &[(&str, f64)] = &[
    ("Subsidi daya 450 VA", 415.00),
    ("Subsidi daya 900 VA", 605.00),
    ("R-1/TR daya 900 VA", 1352.00),
    ("R-1/TR daya 1300 VA", 1444.70),
    ("R-1/TR daya 2200 VA", 1444.70),
    ("R-2/TR daya 3500 VA - 5500 VA", 1699.53),
    ("R-3/TR daya 6600 VA ke atas", 1699.53),
    ("B-2/TR daya 6600 VA - 200 kVA", 1444.70),
    ("B-3/TM daya di atas 200 kVA", 1114.74),
    ("I-3/TM daya di atas 200 kVA", 1114.74),
    ("I-4/TT daya 30.000 kVA ke atas", 996.74),
    ("P-1/TR daya 6600 VA - 200 kVA", 1699.53),
    ("P-2/TM daya di atas 200 kVA", 1522.88),
    ("P-3/TR penerangan jalan umum", 1699.53),
    ("L/TR", 1644.00),
    ("L/TM", 1644.00),
    ("L/TT", 1644.00),
];

pub fn tariff_rate(class: &str) -> Option<f64> {
    TARIFF_CLASSES
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, rate)| *rate)
}

pub fn require_tariff_rate(class: &str) -> AppResult<f64> {
    tariff_rate(class).ok_or_else(|| AppError::UnknownTariff(class.to_string()))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map_or(30, |last| last.day())
}

/// Returns `(monthly kWh, monthly cost)` for a daily average consumption.
pub fn estimate_monthly(avg_daily_kwh: f64, rate: f64, days: u32) -> (f64, f64) {
    let monthly = avg_daily_kwh * days as f64;
    (monthly, monthly * rate)
}
