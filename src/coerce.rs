// 🔧 Shape Coercer - Tolerant conversion of loosely-typed source values
// The provider stores numbers as strings, single objects where arrays are
// documented, and empty strings where null is meant. Every conversion here
// recovers locally: nothing in this module can fail the run.

use chrono::NaiveDate;
use serde_json::Value;

// ============================================================================
// SCALAR COERCION
// ============================================================================

/// Stringify and trim; empty-after-trim becomes None. Structured values are
/// unconvertible and become None as well.
pub fn as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Numeric or numeric-looking string; anything else is None. Parse failures
/// never surface to the caller.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parse an already-extracted string amount ("887", " 45.99 ", "")
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// ============================================================================
// COLLECTION COERCION
// ============================================================================

/// Normalize an object-or-array field to a sequence: a bare object becomes
/// a one-element sequence, an array yields its elements, anything else is
/// empty. Guards every extractor from shape drift at a single point.
pub fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    }
}

/// `as_list` applied to a key that may be absent
pub fn list_at<'a>(root: &'a Value, key: &str) -> Vec<&'a Value> {
    root.get(key).map(as_list).unwrap_or_default()
}

// ============================================================================
// DATE REFORMATTING
// ============================================================================

/// ISO calendar date → fixed human-readable form ("2025-07-23" → "Jul 23, 2025").
/// Reformat failures leave the original string unchanged rather than nulling it.
pub fn humanize_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
