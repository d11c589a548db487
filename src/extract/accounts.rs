// 🧾 Account Extractor - Three source passes of differing fidelity
// Pass 1 seeds from the dedicated trades endpoint (richest per-account
// detail: delinquency counts, payment history, member code). Pass 2 walks
// the merged report's TradeLinePartition, pass 3 the individual per-bureau
// report components. Passes 2 and 3 only admit records with a resolved
// creditor name and account number whose full dedup key is new.
//
// Fields a pass cannot see stay None for that record — no cross-pass
// backfill, only whole-record dedup.

use crate::coerce;
use crate::entities::{Account, AccountTypeObj, Bureau, Institution, ProviderFields};
use crate::locator;
use crate::navigator::ReportBundle;
use crate::reconciliation::AccountReconciler;
use serde_json::Value;

// ============================================================================
// FIELD POLICY TABLES
// Ordered candidate names per logical field, highest fidelity first. The
// order is domain policy carried over from the provider's schema history.
// ============================================================================

/// Creditor name across bundle schema generations
const CREDITOR_NAME: &[&str] = &[
    "creditorName",
    "creditor_name",
    "institutionName",
    "institution_name",
    "lenderName",
    "subscriberName",
];

const ACCOUNT_NUMBER: &[&str] = &["accountNumber", "maskedAccountNumber"];
const BUNDLE_ACCOUNT_TYPE: &[&str] = &["accountType", "accountTypeDescription"];
const BUNDLE_ACCOUNT_STATUS: &[&str] = &["accountStatus", "accountCondition.description"];
const BUNDLE_BALANCE: &[&str] = &["currentBalance", "balanceAmount"];
const BUNDLE_CREDIT_LIMIT: &[&str] = &["creditLimit", "creditLimitAmount"];
const BUNDLE_HIGH_BALANCE: &[&str] = &["highBalance", "highCreditAmount"];
const BUNDLE_OPEN_DATE: &[&str] = &["dateOpened", "openDate"];
const BUNDLE_CLOSE_DATE: &[&str] = &["dateClosed", "closedDate"];
const BUNDLE_LAST_REPORTED: &[&str] = &["dateReported", "lastReported"];

/// Trades endpoint: display form beats the typed object, beats the raw code
const TRADE_ACCOUNT_TYPE: &[&str] = &[
    "accountTypeDisplay",
    "accountTypeObj.description",
    "accountType",
];

const TRADE_ACCOUNT_STATUS: &[&str] = &["accountStatus", "currentAccountRatingDisplay"];

/// Bureau of a trade record: the nested member-code contact is
/// authoritative, then the direct contact, then generic fallbacks
const TRADE_BUREAU: &[&str] = &[
    "memberCodeAccount.creditorContact.creditorContactSource",
    "creditorContact.creditorContactSource",
    "bureau",
    "source",
    "reportingBureau",
];

const TRADE_OPEN_DATE: &[&str] = &["openDateFormatted", "openDate"];
const TRADE_MONTHLY_PAYMENT: &[&str] = &["termsMonthlyPayment", "scheduledMonthlyPayment"];

// ============================================================================
// EXTRACTION
// ============================================================================

pub fn extract_accounts(trades_doc: Option<&Value>, bundle: &ReportBundle) -> Vec<Account> {
    let mut reconciler = AccountReconciler::new();

    if let Some(doc) = trades_doc {
        collect_primary_trades(doc, &mut reconciler);
    }
    collect_partition_tradelines(bundle, &mut reconciler);
    collect_bureau_report_tradelines(bundle, &mut reconciler);

    reconciler.into_accounts()
}

/// Pass 1: primary trade list, one entry per tradeline. Seed set.
fn collect_primary_trades(doc: &Value, reconciler: &mut AccountReconciler) {
    for trade in coerce::list_at(doc, "trades") {
        let account_type = locator::text(trade, TRADE_ACCOUNT_TYPE);
        let status = locator::text(trade, TRADE_ACCOUNT_STATUS);
        let bureau = locator::text(trade, TRADE_BUREAU);

        let provider = ProviderFields {
            institution: Institution {
                name: locator::text(trade, &["institution.name"]),
            },
            account_type_obj: account_type.clone().map(|description| AccountTypeObj {
                description: Some(description),
            }),
            account_type,
            account_status: status.clone(),
            current_balance_amount: locator::text(trade, &["currentBalanceAmount"]),
            credit_limit_amount: locator::text(trade, &["creditLimitAmount"]),
            current_account_rating_display: status,
            open_date_formatted: locator::text(trade, TRADE_OPEN_DATE),
            masked_account_number: locator::text(trade, &["maskedAccountNumber"]),
            high_credit_amount: locator::text(trade, &["highCreditAmount"]),
            terms_monthly_payment: locator::text(trade, TRADE_MONTHLY_PAYMENT),
            payment_history: locator::text(trade, &["paymentHistory"]),
            times30_late: locator::number(trade, &["times30Late"]),
            times60_late: locator::number(trade, &["times60Late"]),
            times90_late: locator::number(trade, &["times90Late"]),
            creditor_contact_source: bureau.clone(),
            bureau,
            last_reported: locator::text(trade, &["lastReported"]),
            account_age: locator::text(trade, &["accountAge"]),
            date_closed: locator::text(trade, &["closedDate"]),
            member_code: locator::text(trade, &["memberCode"]),
        };

        reconciler.seed(Account::from_provider(provider));
    }
}

/// Pass 2: per-bureau duplicates of the same logical accounts inside the
/// merged report's TradeLinePartition.
fn collect_partition_tradelines(bundle: &ReportBundle, reconciler: &mut AccountReconciler) {
    let Some(merged) = &bundle.merged else {
        return;
    };

    for partition in coerce::list_at(merged, "TradeLinePartition") {
        for tradeline in coerce::list_at(partition, "Tradeline") {
            // The partition wrapper sometimes carries the type when the
            // tradeline itself does not
            let account_type = locator::text(tradeline, BUNDLE_ACCOUNT_TYPE)
                .or_else(|| locator::text(partition, &["accountTypeDescription"]));
            let bureau = locator::text(tradeline, &["Source.Bureau.symbol"]);

            let account = bundle_tradeline(tradeline, account_type, bureau);
            reconciler.admit(account);
        }
    }
}

/// Pass 3: individual bureau report components. Dedup runs against the
/// full accumulated list, so duplicates already contributed by passes 1–2
/// are still excluded.
fn collect_bureau_report_tradelines(bundle: &ReportBundle, reconciler: &mut AccountReconciler) {
    for bureau in Bureau::ALL {
        for component in bundle.components_of_type(bureau.report_component_type()) {
            let Some(report) = component.get("CreditReportType") else {
                continue;
            };

            for tradeline in tradeline_list(report) {
                let account_type = locator::text(tradeline, BUNDLE_ACCOUNT_TYPE);
                let account = bundle_tradeline(
                    tradeline,
                    account_type,
                    Some(bureau.symbol().to_string()),
                );
                reconciler.admit(account);
            }
        }
    }
}

/// Shared field resolution for bundle-shaped tradelines (passes 2 and 3)
fn bundle_tradeline(
    tradeline: &Value,
    account_type: Option<String>,
    bureau: Option<String>,
) -> Account {
    let status = locator::text(tradeline, BUNDLE_ACCOUNT_STATUS);

    let provider = ProviderFields {
        institution: Institution {
            name: locator::text(tradeline, CREDITOR_NAME),
        },
        account_type_obj: account_type.clone().map(|description| AccountTypeObj {
            description: Some(description),
        }),
        account_type,
        account_status: status.clone(),
        current_balance_amount: locator::text(tradeline, BUNDLE_BALANCE),
        credit_limit_amount: locator::text(tradeline, BUNDLE_CREDIT_LIMIT),
        current_account_rating_display: status,
        open_date_formatted: locator::text(tradeline, BUNDLE_OPEN_DATE)
            .map(|d| coerce::humanize_date(&d)),
        masked_account_number: locator::text(tradeline, ACCOUNT_NUMBER),
        high_credit_amount: locator::text(tradeline, BUNDLE_HIGH_BALANCE),
        creditor_contact_source: bureau.clone(),
        bureau,
        last_reported: locator::text(tradeline, BUNDLE_LAST_REPORTED),
        date_closed: locator::text(tradeline, BUNDLE_CLOSE_DATE)
            .map(|d| coerce::humanize_date(&d)),
        ..ProviderFields::default()
    };

    Account::from_provider(provider)
}

/// First non-empty of the historically-used tradeline list keys
fn tradeline_list(report: &Value) -> Vec<&Value> {
    for key in ["Tradeline", "Trade", "Account"] {
        let list = coerce::list_at(report, key);
        if !list.is_empty() {
            return list;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chase_trades_doc() -> Value {
        json!({
            "trades": [{
                "institution": {"name": "Chase Bank"},
                "maskedAccountNumber": "438854XXXXXXXXXX",
                "memberCodeAccount": {
                    "creditorContact": {"creditorContactSource": "TUC"}
                },
                "currentBalanceAmount": "887",
                "accountTypeDisplay": "Credit Card",
                "accountStatus": "Open",
                "paymentHistory": "CCCCCCCC",
                "times30Late": 1,
                "memberCode": "0235"
            }]
        })
    }

    fn partition_bundle(tradeline: Value) -> ReportBundle {
        ReportBundle {
            merged: Some(json!({"TradeLinePartition": [{"Tradeline": tradeline}]})),
            ..ReportBundle::default()
        }
    }

    #[test]
    fn test_trades_only_yields_one_account() {
        let doc = chase_trades_doc();
        let accounts = extract_accounts(Some(&doc), &ReportBundle::default());

        assert_eq!(accounts.len(), 1);
        let account = &accounts[0];
        assert_eq!(
            account.provider.institution.name,
            Some("Chase Bank".to_string())
        );
        assert_eq!(account.legacy.balance, Some(887.0));
        assert_eq!(account.provider.bureau, Some("TUC".to_string()));
        assert_eq!(account.provider.times30_late, Some(1.0));
        assert_eq!(account.provider.member_code, Some("0235".to_string()));
    }

    #[test]
    fn test_trade_account_type_display_beats_typed_object() {
        let doc = json!({
            "trades": [{
                "institution": {"name": "Chase Bank"},
                "maskedAccountNumber": "1234",
                "accountTypeDisplay": "Credit Card",
                "accountTypeObj": {"description": "Revolving"},
                "accountType": "CC"
            }]
        });

        let accounts = extract_accounts(Some(&doc), &ReportBundle::default());
        assert_eq!(
            accounts[0].provider.account_type,
            Some("Credit Card".to_string())
        );
    }

    #[test]
    fn test_partition_duplicate_of_trade_is_dropped() {
        let doc = chase_trades_doc();
        let bundle = partition_bundle(json!({
            "creditorName": "Chase Bank",
            "accountNumber": "438854XXXXXXXXXX",
            "Source": {"Bureau": {"symbol": "TUC"}},
            "currentBalance": "900"
        }));

        let accounts = extract_accounts(Some(&doc), &bundle);

        // Precedence invariant: only the trades version survives
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].legacy.balance, Some(887.0));
        assert_eq!(
            accounts[0].provider.payment_history,
            Some("CCCCCCCC".to_string())
        );
    }

    #[test]
    fn test_partition_different_bureau_coexists() {
        let doc = chase_trades_doc();
        let bundle = partition_bundle(json!({
            "creditorName": "Chase Bank",
            "accountNumber": "438854XXXXXXXXXX",
            "Source": {"Bureau": {"symbol": "EQF"}},
            "currentBalance": "890"
        }));

        let accounts = extract_accounts(Some(&doc), &bundle);

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].provider.bureau, Some("EQF".to_string()));
        // Delinquency detail is unavailable from partitions and stays None
        assert_eq!(accounts[1].provider.payment_history, None);
        assert_eq!(accounts[1].provider.times30_late, None);
    }

    #[test]
    fn test_partition_without_account_number_excluded() {
        let bundle = partition_bundle(json!({
            "creditorName": "Chase Bank",
            "Source": {"Bureau": {"symbol": "TUC"}}
        }));

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(accounts.len(), 0);
    }

    #[test]
    fn test_partition_without_creditor_excluded() {
        let bundle = partition_bundle(json!({
            "accountNumber": "1234",
            "Source": {"Bureau": {"symbol": "TUC"}}
        }));

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(accounts.len(), 0);
    }

    #[test]
    fn test_partition_dates_humanized() {
        let bundle = partition_bundle(json!({
            "creditorName": "Chase Bank",
            "accountNumber": "1234",
            "dateOpened": "2020-01-15",
            "dateClosed": "2025-07-23"
        }));

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(
            accounts[0].provider.open_date_formatted,
            Some("Jan 15, 2020".to_string())
        );
        assert_eq!(
            accounts[0].provider.date_closed,
            Some("Jul 23, 2025".to_string())
        );
    }

    #[test]
    fn test_partition_tradeline_may_be_array() {
        let bundle = partition_bundle(json!([
            {"creditorName": "Chase Bank", "accountNumber": "1111",
             "Source": {"Bureau": {"symbol": "TUC"}}},
            {"creditorName": "Chase Bank", "accountNumber": "1111",
             "Source": {"Bureau": {"symbol": "EQF"}}}
        ]));

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(accounts.len(), 2);
    }

    #[test]
    fn test_partition_account_type_falls_back_to_wrapper() {
        let bundle = ReportBundle {
            merged: Some(json!({
                "TradeLinePartition": [{
                    "accountTypeDescription": "Installment",
                    "Tradeline": {
                        "creditorName": "Toyota Financial",
                        "accountNumber": "9001"
                    }
                }]
            })),
            ..ReportBundle::default()
        };

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(
            accounts[0].provider.account_type,
            Some("Installment".to_string())
        );
    }

    #[test]
    fn test_bureau_report_pass_dedups_against_earlier_passes() {
        let doc = chase_trades_doc();
        let bundle = ReportBundle {
            components: vec![json!({
                "Type": "TUCReportV6",
                "CreditReportType": {
                    "Tradeline": [
                        // Duplicate of the trades seed: excluded
                        {"creditorName": "Chase Bank",
                         "accountNumber": "438854XXXXXXXXXX"},
                        // New account: admitted with the component's bureau
                        {"creditorName": "Discover",
                         "accountNumber": "601100XXXXXXXXXX",
                         "currentBalance": "0"}
                    ]
                }
            })],
            ..ReportBundle::default()
        };

        let accounts = extract_accounts(Some(&doc), &bundle);

        assert_eq!(accounts.len(), 2);
        assert_eq!(
            accounts[1].provider.institution.name,
            Some("Discover".to_string())
        );
        assert_eq!(accounts[1].provider.bureau, Some("TUC".to_string()));
        assert_eq!(accounts[1].legacy.balance, Some(0.0));
    }

    #[test]
    fn test_bureau_report_alternate_list_keys() {
        let bundle = ReportBundle {
            components: vec![json!({
                "Type": "EXPReportV6",
                "CreditReportType": {
                    "Tradeline": [],
                    "Trade": [{"creditorName": "Amex", "accountNumber": "3712"}]
                }
            })],
            ..ReportBundle::default()
        };

        let accounts = extract_accounts(None, &bundle);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].provider.bureau, Some("EXP".to_string()));
    }

    #[test]
    fn test_missing_everything_is_empty_not_error() {
        let accounts = extract_accounts(None, &ReportBundle::default());
        assert!(accounts.is_empty());
    }
}
