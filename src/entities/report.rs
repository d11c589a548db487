// 📄 Canonical Report - The system's sole externally visible output
// Immutable once assembled; re-running normalization builds a fresh one
// with no merge against prior output.

use super::{Account, Bureau, Employer, Inquiry, PersonalInfo, PublicRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores keyed by bureau. BTreeMap so serialization order is stable and
/// normalizing the same input twice yields byte-identical output.
pub type ScoreSet = BTreeMap<Bureau, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReport {
    pub personal_info: Option<PersonalInfo>,
    pub scores: ScoreSet,
    pub accounts: Vec<Account>,
    pub inquiries: Vec<Inquiry>,
    pub public_records: Vec<PublicRecord>,
    pub employers: Vec<Employer>,
}
