//! Mapping of loosely typed data.gov.in records onto [`Bill`].
//!
//! The dataset has carried several column spellings over time, and numeric
//! columns arrive as either JSON numbers or strings. Each field is looked up
//! under a list of known keys, first match wins.

use bt_core::Bill;

use chrono::NaiveDate;
use serde_json::{Map, Value};

const ID_KEYS: &[&str] = &["id", "bill_id", "bill_no", "s_no_", "sno"];
const TITLE_KEYS: &[&str] = &["title", "bill_title", "name_of_the_bill", "bill_name"];
const MINISTRY_KEYS: &[&str] = &["ministry", "ministry_department", "ministry_name"];
const STATUS_KEYS: &[&str] = &["status", "bill_status", "current_status"];
const DATE_KEYS: &[&str] = &[
    "date_introduced",
    "date_of_introduction",
    "introduced_on",
    "introduction_date",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Status used when the record carries none
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Build a bill from one upstream record.
///
/// Fails (with a reason) only when the id or title is missing or unusable.
/// An unparseable introduction date is dropped rather than rejecting the
/// record.
pub fn bill_from_record(record: &Map<String, Value>) -> Result<Bill, String> {
    let id = match lookup(record, ID_KEYS) {
        Some(value) => parse_id(value).ok_or_else(|| format!("unusable id {}", value))?,
        None => return Err("missing id".to_string()),
    };

    let title = lookup(record, TITLE_KEYS)
        .and_then(text)
        .ok_or_else(|| format!("bill {} has no title", id))?;

    let status = lookup(record, STATUS_KEYS)
        .and_then(text)
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

    Ok(Bill {
        id,
        title,
        ministry: lookup(record, MINISTRY_KEYS).and_then(text),
        status,
        date_introduced: lookup(record, DATE_KEYS)
            .and_then(text)
            .and_then(|raw| parse_date(&raw)),
    })
}

fn lookup<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// Non-empty trimmed text of a string or number value
fn text(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    if raw.is_empty() || raw.eq_ignore_ascii_case("na") {
        None
    } else {
        Some(raw)
    }
}

fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Timestamps such as 2026-01-05T00:00:00 keep only their date part
    let candidate = match raw.split_once(['T', ' ']) {
        Some((date, _)) => date,
        None => raw,
    };

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(candidate, format).ok())
}
