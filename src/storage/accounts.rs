//! Account table queries

use crate::error::LedgerResult;
use crate::models::{Account, UserId};

use super::repository::Repository;

/// Repository for account persistence
pub type AccountRepository = Repository<Account>;

impl Repository<Account> {
    /// Get all accounts owned by a user
    pub fn get_by_user(&self, user_id: UserId) -> LedgerResult<Vec<Account>> {
        self.find(|a| a.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;
    use tempfile::TempDir;

    #[test]
    fn test_get_by_user() {
        let temp_dir = TempDir::new().unwrap();
        let accounts = AccountRepository::new(temp_dir.path().join("accounts.json"));
        accounts
            .insert(Account::new(UserId::new(1), "Checking", AccountType::Checking))
            .unwrap();
        accounts
            .insert(Account::new(UserId::new(2), "Savings", AccountType::Savings))
            .unwrap();

        let owned = accounts.get_by_user(UserId::new(1)).unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "Checking");
    }
}
