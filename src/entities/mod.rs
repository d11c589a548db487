// Canonical entity models

pub mod account;
pub mod bureau;
pub mod personal;
pub mod record;
pub mod report;

pub use account::{Account, AccountTypeObj, Institution, LegacyFields, ProviderFields};
pub use bureau::Bureau;
pub use personal::{PersonalInfo, PreviousAddress};
pub use record::{Employer, Inquiry, PublicRecord};
pub use report::{CanonicalReport, ScoreSet};
