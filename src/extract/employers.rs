// 🏢 Employer Extractor - Borrower employers plus a legacy fallback path
// The outer credit report document occasionally still carries employers
// under a top-level Borrower block from an older schema generation; both
// passes append independently, no dedup.

use crate::coerce;
use crate::entities::Employer;
use crate::locator;
use crate::navigator::ReportBundle;
use serde_json::Value;

const DATE_REPORTED: &[&str] = &["dateReported", "dateUpdated"];
const SOURCE_BUREAU: &[&str] = &["Source.Bureau.description", "Source.Bureau.symbol"];

pub fn extract_employers(bundle: &ReportBundle, credit_report: Option<&Value>) -> Vec<Employer> {
    let mut employers = Vec::new();

    if let Some(borrower) = &bundle.borrower {
        for emp in coerce::list_at(borrower, "Employer") {
            employers.push(Employer {
                name: locator::text(emp, &["name"]),
                date_reported: locator::text(emp, DATE_REPORTED),
                bureau: locator::text(emp, SOURCE_BUREAU),
            });
        }
    }

    // Legacy location on the outer document
    if let Some(legacy_borrower) = credit_report.and_then(|doc| doc.get("Borrower")) {
        for emp in coerce::list_at(legacy_borrower, "Employer") {
            employers.push(Employer {
                name: locator::text(emp, &["name", "employerName"]),
                date_reported: locator::text(emp, DATE_REPORTED),
                bureau: locator::text(emp, &["bureau"]),
            });
        }
    }

    employers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_borrower_employers() {
        let bundle = ReportBundle {
            borrower: Some(json!({
                "Employer": [{
                    "name": "Acme Corp",
                    "dateUpdated": "2024-09-01",
                    "Source": {"Bureau": {"symbol": "EQF"}}
                }]
            })),
            ..ReportBundle::default()
        };

        let employers = extract_employers(&bundle, None);
        assert_eq!(employers.len(), 1);
        assert_eq!(employers[0].name, Some("Acme Corp".to_string()));
        assert_eq!(employers[0].date_reported, Some("2024-09-01".to_string()));
        assert_eq!(employers[0].bureau, Some("EQF".to_string()));
    }

    #[test]
    fn test_legacy_outer_location() {
        let doc = json!({
            "Borrower": {
                "Employer": {"employerName": "Initech", "bureau": "TransUnion"}
            }
        });

        let employers = extract_employers(&ReportBundle::default(), Some(&doc));
        assert_eq!(employers.len(), 1);
        assert_eq!(employers[0].name, Some("Initech".to_string()));
        assert_eq!(employers[0].bureau, Some("TransUnion".to_string()));
    }

    #[test]
    fn test_both_passes_append() {
        let bundle = ReportBundle {
            borrower: Some(json!({"Employer": [{"name": "Acme Corp"}]})),
            ..ReportBundle::default()
        };
        let doc = json!({"Borrower": {"Employer": [{"name": "Acme Corp"}]}});

        let employers = extract_employers(&bundle, Some(&doc));
        assert_eq!(employers.len(), 2);
    }
}
