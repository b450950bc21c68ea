use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for energydash
#[derive(Parser)]
#[command(
    name = "energydash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Energy dashboard companion: validate appliance CSVs, parse schedule recommendations and compute usage analytics",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Check that a CSV file has an accepted appliance header
    Validate {
        /// CSV file to check
        file: String,

        /// Print the decision as JSON ({"ok": bool, "message": ...})
        #[arg(long)]
        json: bool,
    },

    /// Usage analytics over the bulk appliance table
    Stats {
        /// Appliance table: CSV, or saved backend JSON ({column: [cells]})
        #[arg(long, value_name = "FILE")]
        table: String,

        /// List the devices at this location
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,
    },

    /// Devices used longer than their historical average
    Overused {
        /// Appliance table: CSV, or saved backend JSON ({column: [cells]})
        #[arg(long, value_name = "FILE")]
        table: String,

        /// Saved backend appliance list (JSON)
        #[arg(long, value_name = "FILE")]
        appliances: String,
    },

    /// Parse and list backend schedule recommendations
    Recommend {
        /// Recommendations: saved backend JSON, or a text file with one per line
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Fail on the first record that does not match the exact format
        #[arg(long)]
        strict: bool,
    },

    /// Export a schedule report from backend recommendations
    Export {
        /// Recommendations: saved backend JSON, or a text file with one per line
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Report title (defaults to the configured one)
        #[arg(long)]
        title: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Look up electricity tariffs and estimate monthly cost
    Tariff {
        /// Tariff class (defaults to the configured one)
        class: Option<String>,

        /// Print every known tariff class
        #[arg(long, conflicts_with_all = ["class", "kwh"])]
        list: bool,

        /// Average daily consumption in kWh to estimate a monthly bill for
        #[arg(long)]
        kwh: Option<f64>,

        /// Month to estimate for (YYYY-MM-DD, default today)
        #[arg(long, requires = "kwh")]
        date: Option<String>,
    },

    /// Manage the backend session token
    Session {
        /// Store a bearer token
        #[arg(long, value_name = "TOKEN", conflicts_with_all = ["logout", "status"])]
        login: Option<String>,

        /// Forget the stored token
        #[arg(long, conflicts_with = "status")]
        logout: bool,

        /// Show whether a token is stored
        #[arg(long)]
        status: bool,
    },
}
