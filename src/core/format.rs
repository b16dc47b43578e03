//! Currency and date formatting for display
use crate::core::config::DisplayConfig;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Formats a minor-unit amount as a price, e.g. `R$ 12.000,00`.
/// Negative amounts get a leading `- `.
pub fn format_amount(minor_units: impl Into<i128>, display: &DisplayConfig) -> String {
    let minor_units = minor_units.into();
    let magnitude = minor_units.unsigned_abs();
    let int_part = (magnitude / 100).to_string();
    let frac_part = magnitude % 100;

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push_str(&display.thousands_separator);
        }
        grouped.push(digit);
    }

    let sign = if minor_units < 0 { "- " } else { "" };
    format!(
        "{sign}{} {grouped}{}{frac_part:02}",
        display.currency_symbol, display.decimal_separator
    )
}

/// Formats a date with the configured pattern, falling back to ISO
/// `%Y-%m-%d` when chrono cannot render the pattern.
pub fn format_date(date: &DateTime<Utc>, display: &DisplayConfig) -> String {
    let mut text = String::new();
    if write!(text, "{}", date.format(&display.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    text
}
