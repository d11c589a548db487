// 💳 Account - Canonical tradeline record
// Emits a dual field convention: the provider's original camelCase names
// (backward compatibility with existing consumers) and a parallel set of
// normalized snake_case names carrying the same values, side by side.
//
// Identity for deduplication is the exact tuple
// (maskedAccountNumber, institution name, bureau symbol) — partial matches
// never merge, they coexist.

use crate::coerce;
use serde::{Deserialize, Serialize};

// ============================================================================
// PROVIDER-NAMED FIELDS (camelCase, string amounts as the provider sends them)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTypeObj {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFields {
    pub institution: Institution,
    pub account_type_obj: Option<AccountTypeObj>,
    pub account_type: Option<String>,
    pub account_status: Option<String>,
    pub current_balance_amount: Option<String>,
    pub credit_limit_amount: Option<String>,
    pub current_account_rating_display: Option<String>,
    pub open_date_formatted: Option<String>,
    pub masked_account_number: Option<String>,
    pub high_credit_amount: Option<String>,
    pub terms_monthly_payment: Option<String>,
    pub payment_history: Option<String>,
    pub times30_late: Option<f64>,
    pub times60_late: Option<f64>,
    pub times90_late: Option<f64>,
    pub creditor_contact_source: Option<String>,
    pub bureau: Option<String>,
    pub last_reported: Option<String>,
    pub account_age: Option<String>,
    pub date_closed: Option<String>,
    pub member_code: Option<String>,
}

// ============================================================================
// LEGACY FIELDS (snake_case mirrors, numeric amounts)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyFields {
    pub account_type: Option<String>,
    pub status: Option<String>,
    pub balance: Option<f64>,
    pub credit_limit: Option<f64>,
    pub high_balance: Option<f64>,
    pub open_date: Option<String>,
    pub closed_date: Option<String>,
    pub payment_amount: Option<f64>,
    pub account_number: Option<String>,
    pub last_reported: Option<String>,
    pub account_age: Option<String>,
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub provider: ProviderFields,

    #[serde(flatten)]
    pub legacy: LegacyFields,
}

impl Account {
    /// Build an account from provider-named fields, deriving the legacy
    /// mirrors. One constructor keeps the two conventions from drifting
    /// apart. Amounts that fail numeric coercion become None, never zero —
    /// zero is a legitimate balance.
    pub fn from_provider(provider: ProviderFields) -> Account {
        let legacy = LegacyFields {
            account_type: provider.account_type.clone(),
            status: provider.account_status.clone(),
            balance: parse_amount(&provider.current_balance_amount),
            credit_limit: parse_amount(&provider.credit_limit_amount),
            high_balance: parse_amount(&provider.high_credit_amount),
            open_date: provider.open_date_formatted.clone(),
            closed_date: provider.date_closed.clone(),
            payment_amount: parse_amount(&provider.terms_monthly_payment),
            account_number: provider.masked_account_number.clone(),
            last_reported: provider.last_reported.clone(),
            account_age: provider.account_age.clone(),
        };

        Account { provider, legacy }
    }

    /// Dedup key: (masked account number, institution name, bureau symbol).
    /// Values were trimmed at extraction, so plain equality is post-trim.
    pub fn dedup_key(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            self.provider.masked_account_number.as_deref(),
            self.provider.institution.name.as_deref(),
            self.provider.bureau.as_deref(),
        )
    }

    /// True when both identity fields a guarded pass requires were resolved
    pub fn has_identity(&self) -> bool {
        self.provider.institution.name.is_some() && self.provider.masked_account_number.is_some()
    }
}

fn parse_amount(text: &Option<String>) -> Option<f64> {
    text.as_deref().and_then(coerce::parse_number)
}
