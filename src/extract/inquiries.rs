// 🔔 Inquiry Extractor - Three append-only passes, no dedup
// Duplicates across sources are preserved by design: dropping a legitimate
// multi-bureau inquiry is worse than over-reporting one.

use crate::coerce;
use crate::entities::Inquiry;
use crate::locator;
use crate::navigator::ReportBundle;
use serde_json::Value;

const PARTITION_BUREAU: &[&str] = &[
    "bureau",
    "Source.Bureau.description",
    "Source.Bureau.abbreviation",
];
const BORROWER_BUREAU: &[&str] = &["Source.Bureau.description", "Source.Bureau.symbol"];

pub fn extract_inquiries(search_results: Option<&Value>, bundle: &ReportBundle) -> Vec<Inquiry> {
    let mut inquiries = Vec::new();

    // Pass 1: search_results endpoint
    if let Some(doc) = search_results {
        for iq in coerce::list_at(doc, "inquiries") {
            inquiries.push(Inquiry {
                bureau: locator::text(iq, &["bureau"]),
                business_name: locator::text(iq, &["subscriberName"]),
                inquiry_date: locator::text(iq, &["inquiryDate"]),
                inquiry_type: locator::text(iq, &["inquiryType"]),
            });
        }
    }

    // Pass 2: merged report's InquiryPartition
    if let Some(merged) = &bundle.merged {
        for item in coerce::list_at(merged, "InquiryPartition") {
            for iq in coerce::list_at(item, "Inquiry") {
                inquiries.push(Inquiry {
                    bureau: locator::text(iq, PARTITION_BUREAU),
                    business_name: locator::text(iq, &["subscriberName"]),
                    inquiry_date: locator::text(iq, &["inquiryDate"]),
                    inquiry_type: locator::text(iq, &["inquiryType"]),
                });
            }
        }
    }

    // Pass 3: legacy Inquiry array on the borrower block
    if let Some(borrower) = &bundle.borrower {
        for iq in coerce::list_at(borrower, "Inquiry") {
            inquiries.push(Inquiry {
                bureau: locator::text(iq, BORROWER_BUREAU),
                business_name: locator::text(iq, &["subscriberName", "businessName"]),
                inquiry_date: locator::text(iq, &["inquiryDate", "dateReported"]),
                inquiry_type: locator::text(iq, &["inquiryType", "type"]),
            });
        }
    }

    inquiries
}
