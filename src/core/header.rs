//! CSV header validation, run before an appliance file is uploaded.
//!
//! Two layouts are accepted:
//! - `Simplified`: any header naming the appliance plus an energy column
//! - `Detailed`: the full 12+ column export with name, power, duration,
//!   energy and cost columns

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Minimum column count of the detailed layout.
pub const DETAILED_MIN_COLUMNS: usize = 12;

const APPLIANCE_KEYWORDS: &[&str] = &["appliance", "device", "name"];
const ENERGY_KEYWORDS: &[&str] = &["energy", "kwh"];

/// `(concept label, keyword variants)` required by the detailed layout.
const DETAILED_CONCEPTS: &[(&str, &[&str])] = &[
    ("name/device", &["name", "device"]),
    ("power", &["power"]),
    ("duration/usage", &["duration", "usage"]),
    ("energy", &["energy", "kwh"]),
    ("cost", &["cost", "price"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeaderSchema {
    Simplified,
    Detailed,
}

/// Upload decision as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderDecision {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&AppResult<HeaderSchema>> for HeaderDecision {
    fn from(result: &AppResult<HeaderSchema>) -> Self {
        match result {
            Ok(_) => HeaderDecision {
                ok: true,
                message: None,
            },
            Err(e) => HeaderDecision {
                ok: false,
                message: Some(e.to_string()),
            },
        }
    }
}

/// Validate the header of a CSV file given its full text.
pub fn validate_header(text: &str) -> AppResult<HeaderSchema> {
    let header_line = text
        .split('\n')
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .ok_or(AppError::EmptyFile)?;

    let parts = split_header_line(header_line);
    let lowered: Vec<String> = parts.iter().map(|p| p.to_lowercase()).collect();

    if any_contains(&lowered, APPLIANCE_KEYWORDS) && any_contains(&lowered, ENERGY_KEYWORDS) {
        tracing::debug!(columns = parts.len(), "header matches simplified layout");
        return Ok(HeaderSchema::Simplified);
    }

    if parts.len() >= DETAILED_MIN_COLUMNS {
        let missing: Vec<String> = DETAILED_CONCEPTS
            .iter()
            .filter(|(_, keywords)| !any_contains(&lowered, keywords))
            .map(|(label, _)| label.to_string())
            .collect();

        if !missing.is_empty() {
            tracing::warn!(?missing, "detailed header is incomplete");
            return Err(AppError::MissingColumns(missing));
        }

        tracing::debug!(columns = parts.len(), "header matches detailed layout");
        return Ok(HeaderSchema::Detailed);
    }

    tracing::warn!(columns = parts.len(), "unrecognized csv header");
    Err(AppError::UnrecognizedHeader(parts.len()))
}

/// Split a header line on commas that sit outside double quotes.
///
/// A comma splits only when the number of `"` characters after it is even.
/// Each token then loses one leading and one trailing quote and is trimmed.
pub fn split_header_line(line: &str) -> Vec<String> {
    let total_quotes = line.bytes().filter(|&b| b == b'"').count();

    let mut parts = Vec::new();
    let mut seen_quotes = 0;
    let mut start = 0;

    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => seen_quotes += 1,
            b',' if (total_quotes - seen_quotes) % 2 == 0 => {
                parts.push(clean_token(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(clean_token(&line[start..]));

    parts
}

fn clean_token(raw: &str) -> String {
    let t = raw.strip_prefix('"').unwrap_or(raw);
    let t = t.strip_suffix('"').unwrap_or(t);
    t.trim().to_string()
}

fn any_contains(tokens: &[String], keywords: &[&str]) -> bool {
    tokens
        .iter()
        .any(|t| keywords.iter().any(|k| t.contains(k)))
}
