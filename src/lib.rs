// Credit Normalizer - Core Library
// Reconciles heterogeneous, redundant provider documents into one
// canonical, de-duplicated credit report. Pure computation: no process
// environment, filesystem, or network access — retrieval and export live
// in the driver binary.

pub mod assembler;
pub mod coerce;
pub mod entities;
pub mod extract;
pub mod locator;
pub mod navigator;
pub mod reconciliation;

// Re-export commonly used types
pub use assembler::{normalize, RawDocuments, ScoreOverrides};
pub use entities::{
    Account, AccountTypeObj, Bureau, CanonicalReport, Employer, Inquiry, Institution,
    LegacyFields, PersonalInfo, PreviousAddress, ProviderFields, PublicRecord, ScoreSet,
};
pub use navigator::ReportBundle;
pub use reconciliation::AccountReconciler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
