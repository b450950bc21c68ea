//! Formatting utilities used for CLI and export outputs.

/// Placeholder for a value the parser could not recover.
pub const MISSING: &str = "--";

/// `2.5` → `"2 H 30 M"`.
pub fn hours2readable(decimal_hours: f64) -> String {
    let mut hours = decimal_hours.floor() as i64;
    let mut minutes = ((decimal_hours - decimal_hours.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }
    format!("{} H {} M", hours, minutes)
}

/// Two decimals with a comma separator, as printed in IDR reports: `1234.5` → `"1234,50"`.
pub fn decimal_comma(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

pub fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}
