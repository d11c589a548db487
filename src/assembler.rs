// 🧩 Report Assembler - Composes the canonical report
// Single entry point of the core: a pure function of the pre-fetched raw
// documents and the externally supplied score overrides. Missing or
// unrecognized endpoint keys degrade to empty collections — the only
// externally visible failure mode is an impoverished report.

use crate::entities::{Bureau, CanonicalReport, ScoreSet};
use crate::extract::{accounts, employers, identity, inquiries, public_records, scores};
use crate::navigator::ReportBundle;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Pre-fetched mapping from endpoint name to raw JSON payload. Recognized
/// keys: "search_results", "trades", "credit_report_json".
pub type RawDocuments = Map<String, Value>;

/// Externally supplied score overrides (e.g. page-scraped display values),
/// authoritative for "score as shown to the user".
pub type ScoreOverrides = BTreeMap<Bureau, String>;

pub fn normalize(raw: &RawDocuments, score_override: &ScoreOverrides) -> CanonicalReport {
    let credit_report = raw.get("credit_report_json");
    let search_results = raw.get("search_results");
    let trades = raw.get("trades");

    let bundle = credit_report
        .map(ReportBundle::explore)
        .unwrap_or_default();

    let personal_info = bundle.borrower.as_ref().map(identity::extract_personal_info);

    let mut score_set = ScoreSet::new();
    scores::extract_scores(&bundle, &mut score_set);
    scores::apply_overrides(score_override, &mut score_set);

    CanonicalReport {
        personal_info,
        scores: score_set,
        accounts: accounts::extract_accounts(trades, &bundle),
        inquiries: inquiries::extract_inquiries(search_results, &bundle),
        public_records: public_records::extract_public_records(search_results),
        employers: employers::extract_employers(&bundle, credit_report),
    }
}
