use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use super::dates::parse_date;

/// `01 Jan 2025, Wednesday`
pub const RICH_DATE_FORMAT: &str = "%d %b %Y, %A";
/// `01/01/2025`
pub const COMPACT_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_rich_date(raw: Option<&str>) -> String {
    format_date(raw, RICH_DATE_FORMAT)
}

pub fn format_compact_date(raw: Option<&str>) -> String {
    format_date(raw, COMPACT_DATE_FORMAT)
}

// Unparseable input is echoed back unchanged.
fn format_date(raw: Option<&str>, pattern: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match parse_date(raw) {
        Some(date) => date.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

pub fn type_label(leave_type: Option<&str>) -> String {
    match leave_type.map(str::trim) {
        Some(t) if !t.is_empty() => t.replace('_', " "),
        _ => "Leave".to_string(),
    }
}

pub fn is_sick(type_label: &str) -> bool {
    type_label.to_lowercase().contains("sick")
}

pub fn duration_label(days_taken: Option<f64>) -> String {
    let days = days_taken.unwrap_or(0.0);
    let unit = if days == 1.0 { "day" } else { "days" };
    format!("{days} {unit}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, Display, AsRefStr)]
pub enum RowStripe {
    #[serde(rename = "row-even")]
    #[strum(serialize = "row-even")]
    Even,
    #[serde(rename = "row-odd")]
    #[strum(serialize = "row-odd")]
    Odd,
}

impl RowStripe {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowStripe::Even
        } else {
            RowStripe::Odd
        }
    }
}
