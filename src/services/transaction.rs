//! Transaction service
//!
//! Provides business logic for recording transactions. The account and the
//! category must both exist before a transaction can reference them.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, CategoryId, Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionListOptions {
    /// Only transactions posted to this account
    pub account_id: Option<AccountId>,
    /// Only transactions in this category
    pub category_id: Option<CategoryId>,
    /// Earliest date, inclusive
    pub from: Option<NaiveDate>,
    /// Latest date, inclusive
    pub to: Option<NaiveDate>,
    /// Keep at most this many of the most recent matches
    pub limit: Option<usize>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
        transaction_date: NaiveDate,
        amount: Money,
        description: Option<&str>,
    ) -> LedgerResult<Transaction> {
        let mut txn = Transaction::new(account_id, category_id, transaction_date, amount);
        txn.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        self.check(&txn)?;

        let txn = self.storage.transactions.insert(txn)?;
        self.storage.transactions.save()?;

        info!(
            transaction = %txn.id,
            account = %txn.account_id,
            amount = %txn.amount,
            "created transaction"
        );
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Get a transaction by ID, failing if missing
    pub fn require(&self, id: TransactionId) -> LedgerResult<Transaction> {
        self.get(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))
    }

    /// List transactions, newest first
    pub fn list(&self, options: &TransactionListOptions) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.find(|t| {
            options.account_id.map_or(true, |id| t.account_id == id)
                && options.category_id.map_or(true, |id| t.category_id == id)
                && options.from.map_or(true, |from| t.transaction_date >= from)
                && options.to.map_or(true, |to| t.transaction_date <= to)
        })?;

        transactions.sort_by(|a, b| {
            b.transaction_date
                .cmp(&a.transaction_date)
                .then(b.id.cmp(&a.id))
        });
        if let Some(limit) = options.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Replace a stored transaction
    pub fn update(&self, txn: Transaction) -> LedgerResult<Transaction> {
        self.require(txn.id)?;
        self.check(&txn)?;

        self.storage.transactions.update(txn.clone())?;
        self.storage.transactions.save()?;

        info!(transaction = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        self.require(id)?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        info!(transaction = %id, "deleted transaction");
        Ok(())
    }

    fn check(&self, txn: &Transaction) -> LedgerResult<()> {
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.storage.accounts.exists(txn.account_id)? {
            return Err(LedgerError::account_not_found(txn.account_id.to_string()));
        }
        if !self.storage.categories.exists(txn.category_id)? {
            return Err(LedgerError::category_not_found(txn.category_id.to_string()));
        }

        Ok(())
    }
}
