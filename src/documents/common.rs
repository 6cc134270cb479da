//! Common utilities for document generation.
//!
//! Shared helpers for location handling, date formatting and Typst escaping.

use chrono::NaiveDate;

/// Strip a single trailing `/` from a base location.
///
/// Only one character is removed, so `"a//"` becomes `"a/"`.
pub fn normalize_base_location(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

/// Format a date for display (e.g., "1 January 2024").
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_dash && !result.is_empty()
        {
            result.push('-');
            last_dash = true;
        }
    }

    let result = result.trim_matches('-');
    if result.is_empty() {
        return fallback.to_string();
    }

    result.to_string()
}
