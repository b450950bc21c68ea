//! Column-oriented appliance table (the backend's "AllAppliances" payload).
//!
//! Each column is a list of raw string cells; row `i` of every column
//! describes the same device. All columns always have the same length.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, Trim};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Well-known column names of the detailed appliance CSV.
pub mod columns {
    pub const DEVICE_NAME: &str = "Device Name";
    pub const DEVICE_TYPE: &str = "Device Type";
    pub const LOCATION: &str = "Location";
    pub const CONNECTIVITY: &str = "Connectivity Status";
    pub const USAGE_START: &str = "Usage Start Time";
    pub const USAGE_END: &str = "Usage End Time";
    pub const DURATION: &str = "Duration (Hours)";
    pub const ENERGY: &str = "Energy Consumption (kWh)";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceTable {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl ApplianceTable {
    /// Build a table from `(name, cells)` pairs, keeping their order.
    pub fn from_columns<I, S>(cols: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        let mut expected: Option<usize> = None;

        for (name, cells) in cols {
            let name = name.into();
            match expected {
                None => expected = Some(cells.len()),
                Some(n) if n != cells.len() => {
                    return Err(AppError::RaggedTable {
                        column: name,
                        expected: n,
                        found: cells.len(),
                    });
                }
                Some(_) => {}
            }
            table.headers.push(name);
            table.columns.push(cells);
        }

        Ok(table)
    }

    /// JSON object form, as stored by the backend (`{"Device Name": [...], ...}`).
    pub fn from_map(map: BTreeMap<String, Vec<String>>) -> AppResult<Self> {
        Self::from_columns(map)
    }

    /// Read a CSV whose first record is the header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in rdr.records() {
            let record = record?;
            for (i, cell) in record.iter().enumerate() {
                columns[i].push(cell.to_string());
            }
        }

        tracing::debug!(
            columns = headers.len(),
            rows = columns.first().map_or(0, Vec::len),
            "loaded appliance table from csv"
        );

        Self::from_columns(headers.into_iter().zip(columns))
    }

    pub fn from_csv_path(path: &Path) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Like [`column`](Self::column) but fails with `MissingColumn`.
    pub fn require(&self, name: &str) -> AppResult<&[String]> {
        self.column(name)
            .ok_or_else(|| AppError::MissingColumn(name.to_string()))
    }

    /// Cell at `(column, row)`, if both exist.
    pub fn cell(&self, name: &str, row: usize) -> Option<&str> {
        self.column(name)
            .and_then(|c| c.get(row))
            .map(String::as_str)
    }
}
