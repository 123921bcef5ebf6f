//! Ledger aggregation engine
//!
//! The [`Aggregator`] borrows a [`LedgerSnapshot`] and indexes the reference
//! tables once. Each report lives in its own module as an `impl` block on
//! this type; none of them mutate the snapshot or touch storage.
//!
//! Joins are inner joins. A transaction whose account, category or owner is
//! missing from the snapshot is skipped and logged at `debug`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Category, CategoryId, Money, Transaction, User, UserId};

use super::snapshot::LedgerSnapshot;

/// Read-only view over a snapshot with id lookups
#[derive(Debug, Clone)]
pub struct Aggregator<'a> {
    snapshot: &'a LedgerSnapshot,
    users: HashMap<UserId, &'a User>,
    accounts: HashMap<AccountId, &'a Account>,
    categories: HashMap<CategoryId, &'a Category>,
}

impl<'a> Aggregator<'a> {
    /// Index a snapshot for reporting
    pub fn new(snapshot: &'a LedgerSnapshot) -> Self {
        Self {
            snapshot,
            users: snapshot.users.iter().map(|u| (u.id, u)).collect(),
            accounts: snapshot.accounts.iter().map(|a| (a.id, a)).collect(),
            categories: snapshot.categories.iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// The snapshot being aggregated
    pub fn snapshot(&self) -> &'a LedgerSnapshot {
        self.snapshot
    }

    pub(crate) fn user(&self, id: UserId) -> Option<&'a User> {
        self.users.get(&id).copied()
    }

    pub(crate) fn category(&self, id: CategoryId) -> Option<&'a Category> {
        self.categories.get(&id).copied()
    }

    /// Owner of the account a transaction was posted to
    pub(crate) fn owner_of(&self, txn: &Transaction) -> Option<UserId> {
        match self.accounts.get(&txn.account_id) {
            Some(account) => Some(account.user_id),
            None => {
                debug!(
                    transaction = %txn.id,
                    account = %txn.account_id,
                    "skipping transaction with unknown account"
                );
                None
            }
        }
    }

    /// Whether a transaction passes an optional owner filter
    ///
    /// With no filter every transaction passes without an account lookup.
    pub(crate) fn owned_by(&self, txn: &Transaction, user_filter: Option<UserId>) -> bool {
        match user_filter {
            None => true,
            Some(user_id) => self.owner_of(txn) == Some(user_id),
        }
    }

    /// Transactions satisfying a predicate, in snapshot order
    pub(crate) fn transactions_where<F>(
        &self,
        predicate: F,
    ) -> impl Iterator<Item = &'a Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        self.snapshot.transactions.iter().filter(move |t| predicate(t))
    }
}

/// Add `amount` into a running total
///
/// Overflow is reported as an invalid argument naming the total.
pub(crate) fn accumulate(total: &mut Money, amount: Money, what: &str) -> LedgerResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| LedgerError::amount_overflow(what))?;
    Ok(())
}
