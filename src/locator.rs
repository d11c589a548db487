// 🔎 Source Locator - Ordered fallback lookup over raw document trees
// The provider has renamed fields across schema generations, so each
// logical field carries a fixed candidate list ("try creditorName, else
// institutionName, else subscriberName"). Candidate order encodes source
// fidelity and is a domain policy, not an implementation detail: the
// extractors declare their lists as const tables and this module only
// evaluates them.

use crate::coerce;
use serde_json::Value;

/// Try each candidate key (or dotted path) in order against the root; the
/// first present, non-null, non-empty-string value wins.
pub fn locate<'a>(root: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|path| descend(root, path))
        .find(|value| is_present(value))
}

/// `locate` followed by text coercion
pub fn text(root: &Value, candidates: &[&str]) -> Option<String> {
    locate(root, candidates).and_then(coerce::as_text)
}

/// `locate` followed by numeric coercion
pub fn number(root: &Value, candidates: &[&str]) -> Option<f64> {
    locate(root, candidates).and_then(coerce::as_number)
}

/// Walk a dotted path ("Source.Bureau.symbol") segment by segment
fn descend<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}
