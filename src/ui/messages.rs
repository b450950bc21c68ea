//! User-facing console messages. Diagnostics go through `tracing` instead.

use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

/// `• label: value` line used by the summary views.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("{CYAN}• {label}:{RESET} {value}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{CYAN}{BOLD}=== {msg} ==={RESET}");
}
