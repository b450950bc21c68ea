//! Aggregates over the appliance table.
//!
//! All functions are pure. Empty input is not an error: means come back as
//! NaN and arg-max as `None`.

use crate::errors::AppResult;
use crate::models::table::{ApplianceTable, columns};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Status value counted as an online device.
pub const CONNECTED: &str = "Connected";

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("number pattern")
});

/// Read the longest decimal prefix of `text`, ignoring whatever follows it:
/// `"5 h"` → 5, `"3,5"` → 3, `"1.2.3"` → 1.2. Non-finite results are `None`.
pub fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Coerce cells to numbers: blank → 0, unparseable → NaN.
pub fn parse_numbers(cells: &[String]) -> Vec<f64> {
    cells
        .iter()
        .map(|c| {
            let c = c.trim();
            if c.is_empty() {
                0.0
            } else {
                c.parse().unwrap_or(f64::NAN)
            }
        })
        .collect()
}

/// Duration cell in hours. Trailing text is ignored; anything without a
/// leading number counts as zero.
pub fn parse_duration(cell: &str) -> f64 {
    leading_number(cell).unwrap_or(0.0)
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

pub fn count_connected(statuses: &[String]) -> usize {
    statuses.iter().filter(|s| s.as_str() == CONNECTED).count()
}

/// Index of the largest value; ties go to the first occurrence.
pub fn arg_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub sum: f64,
    pub count: usize,
}

impl GroupAggregate {
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Aggregate `values` per distinct key. Extra keys or values are ignored.
pub fn group_by(keys: &[String], values: &[f64]) -> BTreeMap<String, GroupAggregate> {
    let mut groups: BTreeMap<String, GroupAggregate> = BTreeMap::new();
    for (k, v) in keys.iter().zip(values) {
        let g = groups.entry(k.clone()).or_default();
        g.sum += v;
        g.count += 1;
    }
    groups
}

/// Device with the highest value of some metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceHighlight {
    pub name: String,
    pub kind: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDevice {
    pub name: String,
    pub location: String,
    pub energy: f64,
    pub duration: f64,
}

/// Dashboard overview numbers for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceSummary {
    pub device_count: usize,
    pub total_energy: f64,
    pub average_energy: f64,
    pub connected_count: usize,
    pub max_energy_device: Option<DeviceHighlight>,
    pub max_duration_device: Option<DeviceHighlight>,
    pub average_energy_by_type: BTreeMap<String, f64>,
    pub energy_by_location: BTreeMap<String, GroupAggregate>,
}

impl ApplianceSummary {
    pub fn from_table(table: &ApplianceTable) -> AppResult<Self> {
        let names = table.require(columns::DEVICE_NAME)?;
        let kinds = table.require(columns::DEVICE_TYPE)?;
        let locations = table.require(columns::LOCATION)?;
        let statuses = table.require(columns::CONNECTIVITY)?;
        let energy = parse_numbers(table.require(columns::ENERGY)?);
        let duration = parse_numbers(table.require(columns::DURATION)?);

        let highlight = |idx: Option<usize>, values: &[f64]| {
            idx.map(|i| DeviceHighlight {
                name: names[i].clone(),
                kind: kinds[i].clone(),
                value: values[i],
            })
        };

        let total_energy = sum(&energy);

        Ok(Self {
            device_count: table.row_count(),
            total_energy,
            average_energy: mean(&energy),
            connected_count: count_connected(statuses),
            max_energy_device: highlight(arg_max(&energy), &energy),
            max_duration_device: highlight(arg_max(&duration), &duration),
            average_energy_by_type: group_by(kinds, &energy)
                .into_iter()
                .map(|(k, g)| (k, g.mean()))
                .collect(),
            energy_by_location: group_by(locations, &energy),
        })
    }
}

/// Rows of the table located at `location` (exact match).
pub fn devices_by_location(
    table: &ApplianceTable,
    location: &str,
) -> AppResult<Vec<LocationDevice>> {
    let names = table.require(columns::DEVICE_NAME)?;
    let locations = table.require(columns::LOCATION)?;
    let energy = parse_numbers(table.require(columns::ENERGY)?);
    let duration = parse_numbers(table.require(columns::DURATION)?);

    Ok(locations
        .iter()
        .enumerate()
        .filter(|(_, loc)| loc.as_str() == location)
        .map(|(i, loc)| LocationDevice {
            name: names[i].clone(),
            location: loc.clone(),
            energy: energy[i],
            duration: duration[i],
        })
        .collect())
}
