//! User model
//!
//! The owner of accounts and budgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A person tracking their finances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key assigned by storage
    pub id: UserId,

    /// Email address, unique across users
    pub email: String,

    /// Display name
    pub name: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet stored, user
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::unassigned(),
            email: email.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Set the surrogate key
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(UserValidationError::InvalidEmail(self.email.clone())),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("User name cannot be empty")]
    EmptyName,
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}
