//! Transaction model
//!
//! A single signed movement of money on an account: positive amounts are
//! income/credits, negative amounts are expenses/debits.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Surrogate key assigned by storage
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Category of the transaction
    pub category_id: CategoryId,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Money,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date the transaction happened (no time component)
    pub transaction_date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        account_id: AccountId,
        category_id: CategoryId,
        transaction_date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::unassigned(),
            account_id,
            category_id,
            amount,
            description: None,
            transaction_date,
            created_at: Utc::now(),
        }
    }

    /// Set the surrogate key
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this is an inflow
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an outflow
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if let Some(description) = &self.description {
            if description.len() > 500 {
                return Err(TransactionValidationError::DescriptionTooLong(
                    description.len(),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.transaction_date, self.amount)?;
        if let Some(description) = &self.description {
            write!(f, " {}", description)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Description too long ({0} chars, max 500)")]
    DescriptionTooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_income_and_expense() {
        let expense = Transaction::new(
            AccountId::new(1),
            CategoryId::new(1),
            date(2024, 10, 5),
            Money::from_cents(-12550),
        );
        assert!(expense.is_expense());
        assert!(!expense.is_income());

        let income = Transaction::new(
            AccountId::new(1),
            CategoryId::new(2),
            date(2024, 10, 1),
            Money::from_cents(450000),
        );
        assert!(income.is_income());
    }

    #[test]
    fn test_zero_amount_is_neither() {
        let txn = Transaction::new(
            AccountId::new(1),
            CategoryId::new(1),
            date(2024, 10, 5),
            Money::zero(),
        );
        assert!(!txn.is_income());
        assert!(!txn.is_expense());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            AccountId::new(1),
            CategoryId::new(1),
            date(2024, 10, 5),
            Money::from_cents(-12550),
        )
        .with_description("Weekly shop");
        assert_eq!(txn.to_string(), "2024-10-05 -$125.50 Weekly shop");
    }

    #[test]
    fn test_validation() {
        let txn = Transaction::new(
            AccountId::new(1),
            CategoryId::new(1),
            date(2024, 10, 5),
            Money::from_cents(-100),
        )
        .with_description("x".repeat(501));
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::DescriptionTooLong(501))
        ));
    }
}
