//! Budget versus actual
//!
//! Monthly budgets are joined to the month's expense totals for the same
//! user and category. A budget with no matching spend still appears, with
//! zero spent. Yearly budgets are not reported here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetId, BudgetPeriod, CategoryId, Money, ReportPeriod, UserId};

use super::aggregator::{accumulate, Aggregator};

/// Consumption of one monthly budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget_id: BudgetId,
    pub user_id: UserId,
    pub user_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    /// The limit
    pub budget_amount: Money,
    /// Sum of absolute expense amounts in the month
    pub spent_amount: Money,
    /// Limit minus spent; negative once over budget
    pub remaining_amount: Money,
    /// Spent as a percentage of the limit, unrounded
    pub percent_used: Decimal,
    pub is_over_budget: bool,
}

impl<'a> Aggregator<'a> {
    /// Budget consumption for one calendar month
    ///
    /// Ordered by user name, then category name.
    pub fn budget_status(&self, year: i32, month: u32) -> LedgerResult<Vec<BudgetStatus>> {
        let period = ReportPeriod::month(year, month)?;

        let mut spent: HashMap<(UserId, CategoryId), Money> = HashMap::new();
        for txn in self.transactions_where(|t| {
            t.amount.is_negative() && period.contains(t.transaction_date)
        }) {
            if let Some(owner) = self.owner_of(txn) {
                let total = spent.entry((owner, txn.category_id)).or_insert(Money::zero());
                accumulate(total, txn.amount.abs(), "budget spend")?;
            }
        }

        let mut rows = Vec::new();
        for budget in &self.snapshot().budgets {
            if budget.period != BudgetPeriod::Monthly {
                continue;
            }
            let (Some(user), Some(category)) =
                (self.user(budget.user_id), self.category(budget.category_id))
            else {
                debug!(budget = %budget.id, "skipping budget with unknown user or category");
                continue;
            };

            let spent_amount = spent
                .get(&(budget.user_id, budget.category_id))
                .copied()
                .unwrap_or_else(Money::zero);
            let remaining_amount = budget
                .amount
                .checked_sub(spent_amount)
                .ok_or_else(|| LedgerError::amount_overflow("remaining budget"))?;

            rows.push(BudgetStatus {
                budget_id: budget.id,
                user_id: budget.user_id,
                user_name: user.name.clone(),
                category_id: budget.category_id,
                category_name: category.name.clone(),
                budget_amount: budget.amount,
                spent_amount,
                remaining_amount,
                percent_used: percent_of(spent_amount, budget.amount)?,
                is_over_budget: spent_amount > budget.amount,
            });
        }

        rows.sort_by(|a, b| {
            a.user_name
                .cmp(&b.user_name)
                .then_with(|| a.category_name.cmp(&b.category_name))
                .then(a.budget_id.cmp(&b.budget_id))
        });

        debug!(%period, budgets = rows.len(), "computed budget status");
        Ok(rows)
    }
}

/// `part / whole * 100`, or zero when `whole` is not positive
fn percent_of(part: Money, whole: Money) -> LedgerResult<Decimal> {
    if !whole.is_positive() {
        return Ok(Decimal::ZERO);
    }
    part.amount()
        .checked_div(whole.amount())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| LedgerError::amount_overflow("percent used"))
}
