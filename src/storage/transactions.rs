//! Transaction table queries

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{AccountId, CategoryId, Transaction};

use super::repository::Repository;

/// Repository for transaction persistence
pub type TransactionRepository = Repository<Transaction>;

impl Repository<Transaction> {
    /// Get the ledger of one account, ordered by date then id
    pub fn get_by_account(&self, account_id: AccountId) -> LedgerResult<Vec<Transaction>> {
        let mut ledger = self.find(|t| t.account_id == account_id)?;
        ledger.sort_by_key(|t| (t.transaction_date, t.id));
        Ok(ledger)
    }

    /// Get transactions dated within an optional inclusive range
    pub fn get_by_date_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> LedgerResult<Vec<Transaction>> {
        self.find(|t| {
            from.map_or(true, |start| t.transaction_date >= start)
                && to.map_or(true, |end| t.transaction_date <= end)
        })
    }

    /// Whether any transaction references a category
    pub fn references_category(&self, category_id: CategoryId) -> LedgerResult<bool> {
        self.any(|t| t.category_id == category_id)
    }
}
