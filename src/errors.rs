//! Unified application error type.
//! Every module (core, api, export, cli) returns AppError so callers can
//! propagate with `?` and `main` can print a single message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / decoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Header validation
    // ---------------------------
    #[error("file is empty")]
    EmptyFile,

    #[error("missing expected columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("unrecognized csv header with {0} columns")]
    UnrecognizedHeader(usize),

    // ---------------------------
    // Recommendation parsing
    // ---------------------------
    #[error("recommendation does not match the expected format: {0}")]
    FormatMismatch(String),

    // ---------------------------
    // Appliance table
    // ---------------------------
    #[error("column not found in appliance table: {0}")]
    MissingColumn(String),

    #[error("column '{column}' has {found} rows, expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    // ---------------------------
    // Tariff / dates
    // ---------------------------
    #[error("Unknown tariff class: {0}")]
    UnknownTariff(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Backend / session
    // ---------------------------
    #[error("Backend error: {0}")]
    Api(String),

    #[error("Not logged in: run `energydash session --login <TOKEN>` first")]
    NotAuthenticated,

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
