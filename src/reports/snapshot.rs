//! Report inputs
//!
//! Reports never talk to storage directly. A [`LedgerSource`] hands out rows,
//! and a [`LedgerSnapshot`] is the immutable copy of those rows that the
//! aggregator borrows for the duration of one report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Account, Budget, BudgetPeriod, Category, Transaction, User, UserId};

/// Inclusive date bounds for fetching transactions
///
/// A missing bound leaves that side of the range open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl TransactionFilter {
    /// No restriction
    pub fn all() -> Self {
        Self::default()
    }

    /// Transactions dated from `start` through `end`
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Check if a date passes the filter
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Anything that can supply ledger rows to the reporting engine
pub trait LedgerSource {
    /// All users
    fn users(&self) -> LedgerResult<Vec<User>>;

    /// Accounts, optionally restricted to one owner
    fn accounts(&self, user_id: Option<UserId>) -> LedgerResult<Vec<Account>>;

    /// All categories
    fn categories(&self) -> LedgerResult<Vec<Category>>;

    /// Transactions passing a date filter
    fn transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>>;

    /// Budgets, optionally restricted to one period
    fn budgets(&self, period: Option<BudgetPeriod>) -> LedgerResult<Vec<Budget>>;
}

/// An already-fetched, read-only copy of the ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl LedgerSnapshot {
    /// Read every table from a source in one pass
    ///
    /// Only transactions are filtered. Everything else is small reference
    /// data the joins need in full.
    pub fn capture(source: &dyn LedgerSource, filter: &TransactionFilter) -> LedgerResult<Self> {
        let snapshot = Self {
            users: source.users()?,
            accounts: source.accounts(None)?,
            categories: source.categories()?,
            transactions: source.transactions(filter)?,
            budgets: source.budgets(None)?,
        };

        debug!(
            users = snapshot.users.len(),
            accounts = snapshot.accounts.len(),
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            "captured ledger snapshot"
        );
        Ok(snapshot)
    }

    /// Check if the snapshot holds no rows at all
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.accounts.is_empty()
            && self.categories.is_empty()
            && self.transactions.is_empty()
            && self.budgets.is_empty()
    }
}

impl LedgerSource for LedgerSnapshot {
    fn users(&self) -> LedgerResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn accounts(&self, user_id: Option<UserId>) -> LedgerResult<Vec<Account>> {
        Ok(self
            .accounts
            .iter()
            .filter(|a| user_id.map_or(true, |id| a.user_id == id))
            .cloned()
            .collect())
    }

    fn categories(&self) -> LedgerResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| filter.matches(t.transaction_date))
            .cloned()
            .collect())
    }

    fn budgets(&self, period: Option<BudgetPeriod>) -> LedgerResult<Vec<Budget>> {
        Ok(self
            .budgets
            .iter()
            .filter(|b| period.map_or(true, |p| b.period == p))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType, CategoryId, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> LedgerSnapshot {
        LedgerSnapshot {
            users: vec![User::new("ana@example.com", "Ana").with_id(UserId::new(1))],
            accounts: vec![
                Account::new(UserId::new(1), "Checking", AccountType::Checking)
                    .with_id(AccountId::new(1)),
                Account::new(UserId::new(2), "Cash", AccountType::Cash).with_id(AccountId::new(2)),
            ],
            categories: vec![Category::expense("Groceries").with_id(CategoryId::new(1))],
            transactions: vec![
                Transaction::new(
                    AccountId::new(1),
                    CategoryId::new(1),
                    date(2024, 9, 30),
                    Money::from_cents(-100),
                ),
                Transaction::new(
                    AccountId::new(1),
                    CategoryId::new(1),
                    date(2024, 10, 1),
                    Money::from_cents(-200),
                ),
            ],
            budgets: Vec::new(),
        }
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = TransactionFilter::between(date(2024, 10, 1), date(2024, 10, 31));
        assert!(filter.matches(date(2024, 10, 1)));
        assert!(filter.matches(date(2024, 10, 31)));
        assert!(!filter.matches(date(2024, 11, 1)));
        assert!(TransactionFilter::all().matches(date(1999, 1, 1)));
    }

    #[test]
    fn test_capture_applies_transaction_filter_only() {
        let source = sample();
        let filter = TransactionFilter {
            start: Some(date(2024, 10, 1)),
            end: None,
        };

        let captured = LedgerSnapshot::capture(&source, &filter).unwrap();
        assert_eq!(captured.transactions.len(), 1);
        assert_eq!(captured.accounts.len(), 2);
        assert!(!captured.is_empty());
    }

    #[test]
    fn test_accounts_user_filter() {
        let source = sample();
        assert_eq!(source.accounts(None).unwrap().len(), 2);
        assert_eq!(source.accounts(Some(UserId::new(2))).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(LedgerSnapshot::default().is_empty());
    }
}
