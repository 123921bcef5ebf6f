//! Budget service
//!
//! Provides business logic for spending limits. A user can hold at most one
//! budget per category and period.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetId, BudgetPeriod, CategoryId, Money, UserId};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new budget
    pub fn create(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> LedgerResult<Budget> {
        let budget = Budget::new(user_id, category_id, amount, period, start_date);
        self.check(&budget)?;

        let budget = self.storage.budgets.insert(budget)?;
        self.storage.budgets.save()?;

        info!(
            budget = %budget.id,
            user = %budget.user_id,
            category = %budget.category_id,
            amount = %budget.amount,
            "created budget"
        );
        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> LedgerResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// Get a budget by ID, failing if missing
    pub fn require(&self, id: BudgetId) -> LedgerResult<Budget> {
        self.get(id)?
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))
    }

    /// List budgets, optionally for a single user
    pub fn list(&self, user_id: Option<UserId>) -> LedgerResult<Vec<Budget>> {
        self.storage
            .budgets
            .find(|b| user_id.map_or(true, |id| b.user_id == id))
    }

    /// Replace a stored budget
    pub fn update(&self, budget: Budget) -> LedgerResult<Budget> {
        self.require(budget.id)?;
        self.check(&budget)?;

        self.storage.budgets.update(budget.clone())?;
        self.storage.budgets.save()?;

        info!(budget = %budget.id, "updated budget");
        Ok(budget)
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> LedgerResult<()> {
        self.require(id)?;

        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()?;

        info!(budget = %id, "deleted budget");
        Ok(())
    }

    fn check(&self, budget: &Budget) -> LedgerResult<()> {
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.storage.users.exists(budget.user_id)? {
            return Err(LedgerError::user_not_found(budget.user_id.to_string()));
        }
        if !self.storage.categories.exists(budget.category_id)? {
            return Err(LedgerError::category_not_found(budget.category_id.to_string()));
        }

        if let Some(existing) = self.storage.budgets.get_in_slot(budget)? {
            return Err(LedgerError::Duplicate {
                entity_type: "Budget",
                identifier: format!(
                    "{} {} budget for {} ({})",
                    budget.user_id, budget.period, budget.category_id, existing.id
                ),
            });
        }

        Ok(())
    }
}
