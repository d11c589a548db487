// 👤 Personal Info - Borrower identity block
// Built once per run from the first source that parses; never merged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub ssn: Option<String>,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,

    /// Current address, composed into one display string
    pub address: Option<String>,

    /// Prior addresses, each tagged with the reporting bureau
    pub previous_addresses: Vec<PreviousAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousAddress {
    pub address: Option<String>,
    pub date_reported: Option<String>,
    pub bureau: Option<String>,
}
