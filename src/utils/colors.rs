/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out values the parser could not recover.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == crate::utils::formatting::MISSING {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Excess usage in red, anything at or below zero in green.
pub fn color_for_excess(excess: f64) -> &'static str {
    if excess > 0.0 { RED } else { GREEN }
}
