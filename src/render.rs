//! Text and JSON views of a [`Snapshot`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::AgeBreakdown;
use crate::calculator::AgeError;
use crate::mask::MaskedDate;
use crate::session::{Outcome, Snapshot};

const PLACEHOLDER: &str = "DD/MM/YYYY";
const MIN_ROW_CHARS: usize = 40;

/// Today's date in long form, e.g. "05 April 2024".
pub fn today_line(today: NaiveDate) -> String {
    today.format("%d %B %Y").to_string()
}

/// One `key: ..... value` row padded with dot leaders to `align_width`.
pub fn build_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len());
    format!("{base}{}", "-".repeat(dash_count))
}

/// Renders the whole card: input, age or error, and today's date.
pub fn render_snapshot(snapshot: &Snapshot, today: NaiveDate) -> String {
    let mut input = match snapshot.input().as_str() {
        "" if !snapshot.is_focused() => PLACEHOLDER.to_string(),
        s => s.to_string(),
    };
    if snapshot.is_focused() && !snapshot.input().is_complete() {
        input.push('_');
    }

    let mut rows: Vec<(&str, String)> = vec![("Date of Birth", input)];
    match snapshot.outcome() {
        Outcome::Pending => {}
        Outcome::Age(age) => {
            rows.push(("Your Age", age.years_old_line()));
            rows.push(("Exactly", age.to_string()));
        }
        Outcome::Invalid(err) => rows.push(("Error", err.to_string())),
    }
    rows.push(("Today's Date", today_line(today)));

    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let mut out = build_header_line("Age Calculator", align_width);
    for (key, value) in &rows {
        out.push('\n');
        out.push_str(&build_row(key, value, align_width));
    }
    out
}

/// Machine-readable form of a snapshot.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub input: &'a MaskedDate,
    pub today: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<AgeError>,
}

impl<'a> JsonReport<'a> {
    pub fn new(snapshot: &'a Snapshot, today: NaiveDate) -> Self {
        let error = snapshot.error();
        Self {
            input: snapshot.input(),
            today,
            age: snapshot.result(),
            error: error.map(|e| e.to_string()),
            error_kind: error,
        }
    }
}
