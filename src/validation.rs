//! Validation helper functions for Wunderlist records
//!
//! This module contains the parsing and normalization logic shared by the
//! loader and the outline mapper: date parsing, line ending normalization,
//! and tag sanitization.

use crate::wunderlist::Timestamp;
use chrono::{NaiveDate, NaiveDateTime};

/// Date-time layouts found in Wunderlist exports, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a Wunderlist date or date-time string
///
/// # Arguments
/// * `date_str` - Date string (e.g., "2024-01-05" or "2016-05-04T08:00:00.000Z")
///
/// # Returns
/// The parsed timestamp, or None if the string matches no known layout
pub fn parse_timestamp(date_str: &str) -> Option<Timestamp> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(Timestamp::DateTime(dt));
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .map(Timestamp::Date)
}

/// Normalize line endings in a string to LF (\n)
///
/// Exports written on Windows carry CRLF pairs and occasionally bare CR
/// bytes inside note and comment text.
pub fn normalize_string_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapse a possibly multi-line string into a single trimmed line
pub fn single_line(s: &str) -> String {
    normalize_string_line_endings(s)
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Return the string only if it has visible content
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Turn an arbitrary label into a valid Org tag
///
/// Org tags may only contain letters, digits, `_`, `@`, `#` and `%`.
/// Every other character is replaced with `_`.
///
/// # Returns
/// The sanitized tag, or None if the label is blank
pub fn sanitize_tag(label: &str) -> Option<String> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    Some(
        label
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '%') {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
    )
}
