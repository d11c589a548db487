// ⚖️ Reconciler - Whole-record account deduplication across source passes
// The same real-world account surfaces through up to three source paths of
// differing fidelity. The first pass to contribute a record wins; later
// passes may only add records whose full identity key is new. Field-level
// backfill between duplicates is deliberately not performed.

use crate::entities::Account;

pub struct AccountReconciler {
    accounts: Vec<Account>,
}

impl AccountReconciler {
    pub fn new() -> Self {
        AccountReconciler {
            accounts: Vec::new(),
        }
    }

    /// Seed pass: append unconditionally. The primary trade list is the
    /// richest source and defines the seed set — no dedup needed.
    pub fn seed(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Guarded pass: reject records missing either identity field
    /// (creditor name or account number), and reject records whose dedup
    /// key matches any entry already accumulated — including entries from
    /// earlier passes. Returns whether the record was admitted.
    pub fn admit(&mut self, account: Account) -> bool {
        if !account.has_identity() {
            return false;
        }
        if self.contains_key(&account) {
            return false;
        }
        self.accounts.push(account);
        true
    }

    fn contains_key(&self, candidate: &Account) -> bool {
        let key = candidate.dedup_key();
        self.accounts.iter().any(|existing| existing.dedup_key() == key)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }
}

impl Default for AccountReconciler {
    fn default() -> Self {
        Self::new()
    }
}
