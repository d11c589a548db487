// 📋 Inquiry / PublicRecord / Employer - Simple canonical records
// None of these are deduplicated: multiple source passes append
// independently. Over-reporting is the accepted failure mode — safer than
// silently dropping a legitimate multi-bureau entry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub bureau: Option<String>,
    pub business_name: Option<String>,
    pub inquiry_date: Option<String>,

    #[serde(rename = "type")]
    pub inquiry_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicRecord {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub date_filed: Option<String>,
    pub status: Option<String>,

    /// Filed amount; unparseable values become None, never zero
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub name: Option<String>,
    pub date_reported: Option<String>,
    pub bureau: Option<String>,
}
