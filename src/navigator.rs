// 🗺️ Report Tree Navigator - Walks the bundle/partition structure
// The richest source document usually hides its real payload inside a
// JSON-encoded string under "rawReport". This module parses that payload
// (or falls back to the outer document's bundle shape), finds the merged
// report component, and exposes the borrower block plus the flat component
// list so extractors never re-check tree shape themselves.

use crate::coerce;
use serde_json::Value;

/// Component type marker of the bureau-merged report
pub const MERGED_REPORT_TYPE: &str = "MergeCreditReports";

#[derive(Debug, Clone, Default)]
pub struct ReportBundle {
    /// Every typed bundle component, in document order
    pub components: Vec<Value>,

    /// `TrueLinkCreditReportType` block of the merged report component
    pub merged: Option<Value>,

    /// Borrower identity block inside the merged report. Absent means
    /// borrower-dependent extractors degrade to "no data", never an error.
    pub borrower: Option<Value>,
}

impl ReportBundle {
    /// Explore the raw credit report document. A malformed nested payload is
    /// recovered locally: warn, treat as absent, continue with the outer
    /// document's shape. This can never abort the run.
    pub fn explore(credit_report: &Value) -> ReportBundle {
        let mut components = Vec::new();

        if let Some(Value::String(raw)) = credit_report.get("rawReport") {
            match serde_json::from_str::<Value>(raw) {
                Ok(parsed) => components = component_list(&parsed),
                Err(err) => {
                    eprintln!("⚠️ Could not parse rawReport payload: {}", err);
                }
            }
        }

        // Fallback shape: some responses carry the bundle directly
        if components.is_empty() {
            components = component_list(credit_report);
        }

        let merged = components
            .iter()
            .find(|comp| component_type(comp) == Some(MERGED_REPORT_TYPE))
            .and_then(|comp| comp.get("TrueLinkCreditReportType"))
            .cloned();

        let borrower = merged.as_ref().and_then(|m| m.get("Borrower")).cloned();

        ReportBundle {
            components,
            merged,
            borrower,
        }
    }

    /// Components whose `Type` marker equals the given value
    pub fn components_of_type<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a Value> {
        self.components
            .iter()
            .filter(move |comp| component_type(comp) == Some(marker))
    }
}

/// `Type` marker of a bundle component
pub fn component_type(component: &Value) -> Option<&str> {
    component.get("Type").and_then(Value::as_str)
}

/// `BundleComponents.BundleComponent`, tolerating object-or-array drift
fn component_list(root: &Value) -> Vec<Value> {
    root.get("BundleComponents")
        .and_then(|bc| bc.get("BundleComponent"))
        .map(|list| coerce::as_list(list).into_iter().cloned().collect())
        .unwrap_or_default()
}
