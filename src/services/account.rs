//! Account service
//!
//! Provides business logic for account management. Every account belongs to
//! an existing user, and deleting an account deletes its ledger.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, AccountType, Money, UserId};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    ///
    /// `currency` defaults to USD when not given.
    pub fn create(
        &self,
        user_id: UserId,
        name: &str,
        account_type: AccountType,
        balance: Money,
        currency: Option<&str>,
    ) -> LedgerResult<Account> {
        let mut account = Account::with_balance(user_id, name.trim(), account_type, balance);
        if let Some(code) = currency {
            account.currency = code.trim().to_uppercase();
        }

        self.check(&account)?;

        let account = self.storage.accounts.insert(account)?;
        self.storage.accounts.save()?;

        info!(
            account = %account.id,
            user = %account.user_id,
            account_type = %account.account_type,
            "created account"
        );
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Get an account by ID, failing if missing
    pub fn require(&self, id: AccountId) -> LedgerResult<Account> {
        self.get(id)?
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))
    }

    /// List accounts, optionally for a single user
    pub fn list(&self, user_id: Option<UserId>) -> LedgerResult<Vec<Account>> {
        match user_id {
            Some(user_id) => self.storage.accounts.get_by_user(user_id),
            None => self.storage.accounts.get_all(),
        }
    }

    /// Replace a stored account
    pub fn update(&self, account: Account) -> LedgerResult<Account> {
        self.require(account.id)?;
        self.check(&account)?;

        self.storage.accounts.update(account.clone())?;
        self.storage.accounts.save()?;

        info!(account = %account.id, "updated account");
        Ok(account)
    }

    /// Delete an account and its transactions
    ///
    /// Returns the number of transactions removed with it.
    pub fn delete(&self, id: AccountId) -> LedgerResult<usize> {
        self.require(id)?;

        let removed = self
            .storage
            .transactions
            .delete_where(|t| t.account_id == id)?;
        self.storage.accounts.delete(id)?;

        self.storage.accounts.save()?;
        self.storage.transactions.save()?;

        info!(account = %id, transactions = removed.len(), "deleted account");
        Ok(removed.len())
    }

    fn check(&self, account: &Account) -> LedgerResult<()> {
        account
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.storage.users.exists(account.user_id)? {
            return Err(LedgerError::user_not_found(account.user_id.to_string()));
        }

        Ok(())
    }
}
