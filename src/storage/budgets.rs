//! Budget table queries

use crate::error::LedgerResult;
use crate::models::{Budget, BudgetPeriod, CategoryId};

use super::repository::Repository;

/// Repository for budget persistence
pub type BudgetRepository = Repository<Budget>;

impl Repository<Budget> {
    /// Find the budget occupying the same (user, category, period) slot
    pub fn get_in_slot(&self, budget: &Budget) -> LedgerResult<Option<Budget>> {
        Ok(self
            .find(|b| b.same_slot(budget) && b.id != budget.id)?
            .into_iter()
            .next())
    }

    /// Get budgets, optionally restricted to one period
    pub fn get_by_period(&self, period: Option<BudgetPeriod>) -> LedgerResult<Vec<Budget>> {
        self.find(|b| period.map_or(true, |p| b.period == p))
    }

    /// Whether any budget references a category
    pub fn references_category(&self, category_id: CategoryId) -> LedgerResult<bool> {
        self.any(|b| b.category_id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UserId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_slot_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let budgets = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stored = budgets
            .insert(Budget::new(
                UserId::new(1),
                CategoryId::new(1),
                Money::from_cents(50000),
                BudgetPeriod::Monthly,
                start,
            ))
            .unwrap();

        let candidate = Budget::new(
            UserId::new(1),
            CategoryId::new(1),
            Money::from_cents(1000),
            BudgetPeriod::Monthly,
            start,
        );
        assert_eq!(budgets.get_in_slot(&candidate).unwrap(), Some(stored.clone()));

        // A record never collides with itself
        assert_eq!(budgets.get_in_slot(&stored).unwrap(), None);

        assert_eq!(budgets.get_by_period(Some(BudgetPeriod::Yearly)).unwrap().len(), 0);
        assert!(budgets.references_category(CategoryId::new(1)).unwrap());
    }
}
