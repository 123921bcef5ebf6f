//! User service
//!
//! Provides business logic for user management. Deleting a user removes
//! everything they own: accounts, the transactions posted to them, and
//! budgets.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{User, UserId};
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

/// Rows removed by a cascading user delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDeletion {
    pub accounts: usize,
    pub transactions: usize,
    pub budgets: usize,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new user
    pub fn create(&self, email: &str, name: &str) -> LedgerResult<User> {
        let user = User::new(email.trim(), name.trim());
        user.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.ensure_email_free(&user.email, None)?;

        let user = self.storage.users.insert(user)?;
        self.storage.users.save()?;

        info!(user = %user.id, email = %user.email, "created user");
        Ok(user)
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> LedgerResult<Option<User>> {
        self.storage.users.get(id)
    }

    /// Get a user by ID, failing if missing
    pub fn require(&self, id: UserId) -> LedgerResult<User> {
        self.get(id)?
            .ok_or_else(|| LedgerError::user_not_found(id.to_string()))
    }

    /// Find a user by email or ID string
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<User>> {
        if let Some(user) = self.storage.users.get_by_email(identifier)? {
            return Ok(Some(user));
        }

        if let Ok(id) = identifier.trim().parse::<UserId>() {
            return self.get(id);
        }

        Ok(None)
    }

    /// Get all users
    pub fn list(&self) -> LedgerResult<Vec<User>> {
        self.storage.users.get_all()
    }

    /// Replace a stored user
    pub fn update(&self, user: User) -> LedgerResult<User> {
        user.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.require(user.id)?;
        self.ensure_email_free(&user.email, Some(user.id))?;

        self.storage.users.update(user.clone())?;
        self.storage.users.save()?;

        info!(user = %user.id, "updated user");
        Ok(user)
    }

    /// Delete a user and everything they own
    pub fn delete(&self, id: UserId) -> LedgerResult<UserDeletion> {
        let user = self.require(id)?;

        let account_ids = self.storage.accounts.delete_where(|a| a.user_id == id)?;
        let transactions = self
            .storage
            .transactions
            .delete_where(|t| account_ids.contains(&t.account_id))?;
        let budgets = self.storage.budgets.delete_where(|b| b.user_id == id)?;
        self.storage.users.delete(id)?;

        self.storage.save_all()?;

        let removed = UserDeletion {
            accounts: account_ids.len(),
            transactions: transactions.len(),
            budgets: budgets.len(),
        };
        info!(
            user = %id,
            email = %user.email,
            accounts = removed.accounts,
            transactions = removed.transactions,
            budgets = removed.budgets,
            "deleted user"
        );
        Ok(removed)
    }

    fn ensure_email_free(&self, email: &str, exclude: Option<UserId>) -> LedgerResult<()> {
        match self.storage.users.get_by_email(email)? {
            Some(existing) if Some(existing.id) != exclude => Err(LedgerError::Duplicate {
                entity_type: "User",
                identifier: email.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
