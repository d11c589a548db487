// 🏦 PublicRecord Extractor - Single fixed source path

use crate::coerce;
use crate::entities::PublicRecord;
use crate::locator;
use serde_json::Value;

pub fn extract_public_records(search_results: Option<&Value>) -> Vec<PublicRecord> {
    let Some(doc) = search_results else {
        return Vec::new();
    };

    coerce::list_at(doc, "publicRecords")
        .into_iter()
        .map(|pr| PublicRecord {
            record_type: locator::text(pr, &["type"]),
            date_filed: locator::text(pr, &["dateFiled"]),
            status: locator::text(pr, &["status"]),
            amount: locator::number(pr, &["amount"]),
        })
        .collect()
}
