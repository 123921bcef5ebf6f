//! User table queries

use crate::error::LedgerResult;
use crate::models::User;

use super::repository::Repository;

/// Repository for user persistence
pub type UserRepository = Repository<User>;

impl Repository<User> {
    /// Get a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> LedgerResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .find(|u| u.email.eq_ignore_ascii_case(email))?
            .into_iter()
            .next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_by_email_ignores_case() {
        let temp_dir = TempDir::new().unwrap();
        let users = UserRepository::new(temp_dir.path().join("users.json"));
        let ana = users.insert(User::new("Ana@Example.com", "Ana")).unwrap();

        assert_eq!(users.get_by_email("ana@example.com").unwrap(), Some(ana));
        assert_eq!(users.get_by_email("bo@example.com").unwrap(), None);
    }
}
