//! Account model
//!
//! Represents financial accounts (checking, savings, credit cards, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, UserId};
use super::money::Money;

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    CreditCard,
    /// Cash/wallet
    Cash,
    /// Investment account
    Investment,
}

impl AccountType {
    /// All account types in storage code order
    pub const ALL: [AccountType; 5] = [
        Self::Checking,
        Self::Savings,
        Self::CreditCard,
        Self::Cash,
        Self::Investment,
    ];

    /// Integer code used by the storage layer
    pub const fn code(&self) -> i16 {
        match self {
            Self::Checking => 0,
            Self::Savings => 1,
            Self::CreditCard => 2,
            Self::Cash => 3,
            Self::Investment => 4,
        }
    }

    /// Decode a storage code
    pub fn from_code(code: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Returns true if this account type typically carries debt
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::CreditCard)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" | "credit-card" => Some(Self::CreditCard),
            "cash" => Some(Self::Cash),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Checking
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// A financial account owned by exactly one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Surrogate key assigned by storage
    pub id: AccountId,

    /// Owning user
    pub user_id: UserId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance
    pub balance: Money,

    /// ISO 4217 currency code
    pub currency: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance in the default currency
    pub fn new(user_id: UserId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::unassigned(),
            user_id,
            name: name.into(),
            account_type,
            balance: Money::zero(),
            currency: DEFAULT_CURRENCY.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Create a new account with a balance
    pub fn with_balance(
        user_id: UserId,
        name: impl Into<String>,
        account_type: AccountType,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(user_id, name, account_type);
        account.balance = balance;
        account
    }

    /// Set the surrogate key
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AccountValidationError::InvalidCurrency(self.currency.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    #[error("Account name cannot be empty")]
    EmptyName,
    #[error("Account name too long ({0} chars, max 100)")]
    NameTooLong(usize),
    #[error("Invalid currency code '{0}' (expected three uppercase letters)")]
    InvalidCurrency(String),
}
