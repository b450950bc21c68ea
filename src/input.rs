//! Loading of the files the CLI works on: CSV tables, saved backend
//! responses and plain recommendation lists.

use crate::api::read_payload;
use crate::errors::AppResult;
use crate::models::{Appliance, ApplianceTable, Recommendations};
use crate::utils::path::is_json;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The recommendation endpoint has returned both a bare list and an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecommendationPayload {
    List(Vec<String>),
    Object(Recommendations),
}

pub fn load_table(path: &Path) -> AppResult<ApplianceTable> {
    if is_json(path) {
        let map: BTreeMap<String, Vec<String>> = read_payload(path)?;
        ApplianceTable::from_map(map)
    } else {
        ApplianceTable::from_csv_path(path)
    }
}

pub fn load_appliances(path: &Path) -> AppResult<Vec<Appliance>> {
    let appliances: Vec<Appliance> = read_payload(path)?;
    tracing::debug!(count = appliances.len(), "loaded appliances");
    Ok(appliances)
}

/// One string per recommendation; text files are read line by line.
pub fn load_recommendations(path: &Path) -> AppResult<Vec<String>> {
    if is_json(path) {
        return Ok(match read_payload::<RecommendationPayload>(path)? {
            RecommendationPayload::List(lines) => lines,
            RecommendationPayload::Object(r) => {
                if !r.message.is_empty() {
                    tracing::info!(message = %r.message, "backend recommendation message");
                }
                r.recommendations
            }
        });
    }

    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
