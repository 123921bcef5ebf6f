//! Budget model
//!
//! A spending limit for one category of one user, recurring monthly or yearly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId, UserId};
use super::money::Money;

/// Recurrence window of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// Integer code used by the storage layer
    pub const fn code(&self) -> i16 {
        match self {
            Self::Monthly => 0,
            Self::Yearly => 1,
        }
    }

    /// Decode a storage code
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Monthly),
            1 => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Parse a budget period from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A spending limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Surrogate key assigned by storage
    pub id: BudgetId,

    /// The user this budget belongs to
    pub user_id: UserId,

    /// The category being limited
    pub category_id: CategoryId,

    /// Limit per period (always positive)
    pub amount: Money,

    /// Recurrence window
    pub period: BudgetPeriod,

    /// First day the budget applies
    pub start_date: NaiveDate,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: BudgetId::unassigned(),
            user_id,
            category_id,
            amount,
            period,
            start_date,
        }
    }

    /// Set the surrogate key
    pub fn with_id(mut self, id: BudgetId) -> Self {
        self.id = id;
        self
    }

    /// Whether this budget occupies the same (user, category, period) slot
    pub fn same_slot(&self, other: &Budget) -> bool {
        self.user_id == other.user_id
            && self.category_id == other.category_id
            && self.period == other.period
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} from {}",
            self.period, self.amount, self.start_date
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Budget amount must be greater than zero")]
    NonPositiveAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries_budget(amount: Money) -> Budget {
        Budget::new(
            UserId::new(1),
            CategoryId::new(3),
            amount,
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_validation() {
        assert!(groceries_budget(Money::from_cents(50000)).validate().is_ok());
        assert_eq!(
            groceries_budget(Money::zero()).validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );
        assert!(groceries_budget(Money::from_cents(-1)).validate().is_err());
    }

    #[test]
    fn test_same_slot() {
        let a = groceries_budget(Money::from_cents(50000));
        let mut b = groceries_budget(Money::from_cents(10000));
        assert!(a.same_slot(&b));

        b.period = BudgetPeriod::Yearly;
        assert!(!a.same_slot(&b));
    }

    #[test]
    fn test_period_parse_and_codes() {
        assert_eq!(BudgetPeriod::parse("Monthly"), Some(BudgetPeriod::Monthly));
        assert_eq!(BudgetPeriod::parse("annual"), Some(BudgetPeriod::Yearly));
        assert_eq!(BudgetPeriod::parse("weekly"), None);
        assert_eq!(BudgetPeriod::from_code(1), Some(BudgetPeriod::Yearly));
        assert_eq!(BudgetPeriod::from_code(2), None);
    }
}
