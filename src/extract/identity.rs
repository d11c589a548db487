// 🪪 Identity Extractor - Borrower personal info
// One instance per report, built from the borrower block the navigator
// found. The composite person name lives in a structured Name array that
// may mark a "Primary" variant; if none is marked, the first element is
// used. Addresses arrive in two shapes (unparsed street line vs. parsed
// house/direction/street parts) and are composed into one display string.

use crate::coerce;
use crate::entities::{PersonalInfo, PreviousAddress};
use crate::locator;
use serde_json::Value;

const SSN: &[&str] = &["SocialSecurityNumber", "ssn", "SocialPartition.Social"];
const SOURCE_BUREAU: &[&str] = &["Source.Bureau.description", "Source.Bureau.symbol"];

pub fn extract_personal_info(borrower: &Value) -> PersonalInfo {
    PersonalInfo {
        name: resolve_name(borrower),
        ssn: locator::text(borrower, SSN),
        date_of_birth: coerce::list_at(borrower, "Birth")
            .first()
            .and_then(|birth| locator::text(birth, &["date"])),
        address: coerce::list_at(borrower, "BorrowerAddress")
            .first()
            .and_then(|addr| addr.get("CreditAddress"))
            .and_then(compose_address),
        previous_addresses: coerce::list_at(borrower, "PreviousAddress")
            .into_iter()
            .map(|prev| PreviousAddress {
                address: prev.get("CreditAddress").and_then(compose_address),
                date_reported: locator::text(prev, &["dateReported"]),
                bureau: locator::text(prev, SOURCE_BUREAU),
            })
            .collect(),
    }
}

/// Flat display name, then the structured Name array (primary variant or
/// first element), then bare first/last fields as the last resort
fn resolve_name(borrower: &Value) -> Option<String> {
    if let Some(name) = locator::text(borrower, &["BorrowerName"]) {
        return Some(name);
    }

    let names = coerce::list_at(borrower, "Name");
    let chosen = names
        .iter()
        .copied()
        .find(|entry| {
            locator::text(entry, &["NameType.abbreviation"]).as_deref() == Some("Primary")
        })
        .or_else(|| names.first().copied());

    if let Some(entry) = chosen {
        if let Some(name) = compose_name(entry) {
            return Some(name);
        }
    }

    let first = locator::text(borrower, &["firstName", "FirstName"]);
    let last = locator::text(borrower, &["lastName", "LastName"]);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        _ => None,
    }
}

fn compose_name(entry: &Value) -> Option<String> {
    let name = entry.get("Name")?;
    let parts: Vec<String> = ["first", "middle", "last"]
        .into_iter()
        .filter_map(|key| locator::text(name, &[key]))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Compose a CreditAddress into "street, city, state, postal", handling
/// both the unparsed and the parsed street forms
fn compose_address(addr: &Value) -> Option<String> {
    let street = locator::text(addr, &["unparsedStreet"]).or_else(|| {
        let parts: Vec<String> = ["houseNumber", "direction", "streetName", "streetType"]
            .into_iter()
            .filter_map(|key| locator::text(addr, &[key]))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    });

    let mut parts = Vec::new();
    if let Some(street) = street {
        parts.push(street);
    }
    for key in ["city", "stateCode", "postalCode"] {
        if let Some(value) = locator::text(addr, &[key]) {
            parts.push(value);
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
