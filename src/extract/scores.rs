// 📈 Score Extractor - Per-bureau scores from typed bundle components
// Two structured passes write into the same ScoreSet keyed by bureau:
// typed score components matched by type-marker substring, then the merged
// report's CreditScore array. The externally supplied override (the score
// as shown to the user) is applied last and wins unconditionally.

use crate::coerce;
use crate::entities::{Bureau, ScoreSet};
use crate::locator;
use crate::navigator::{self, ReportBundle};
use std::collections::BTreeMap;

/// Typed score field, richest name first
const SCORE_VALUE: &[&str] = &["riskScore", "score"];

pub fn extract_scores(bundle: &ReportBundle, scores: &mut ScoreSet) {
    // Pass 1: typed score components ("TUCVantageScoreV3" and friends)
    for component in &bundle.components {
        let Some(marker) = navigator::component_type(component) else {
            continue;
        };
        let Some(bureau) = Bureau::from_component_type(marker) else {
            continue;
        };
        let Some(score_block) = component.get("CreditScoreType") else {
            continue;
        };
        if let Some(score) = locator::text(score_block, SCORE_VALUE) {
            scores.insert(bureau, score);
        }
    }

    // Pass 2: CreditScore array on the merged report's borrower
    if let Some(borrower) = &bundle.borrower {
        for credit_score in coerce::list_at(borrower, "CreditScore") {
            let Some(score) = locator::text(credit_score, &["riskScore"]) else {
                continue;
            };
            let symbol = locator::text(credit_score, &["Source.Bureau.symbol"]);
            let description = locator::text(credit_score, &["Source.Bureau.description"]);
            if let Some(bureau) = Bureau::from_source(symbol.as_deref(), description.as_deref()) {
                scores.insert(bureau, score);
            }
        }
    }
}

/// Override pass: applied last, unconditionally overwriting any structured
/// value already present for the same bureau key.
pub fn apply_overrides(overrides: &BTreeMap<Bureau, String>, scores: &mut ScoreSet) {
    for (bureau, value) in overrides {
        scores.insert(*bureau, value.clone());
    }
}
