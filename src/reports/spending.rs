//! Spending by category
//!
//! Sums `abs(amount)` per category over a period. Income categories are
//! included too, so a month's salary shows up next to its groceries.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{CategoryId, CategoryType, Money, ReportPeriod, Transaction, UserId};

use super::aggregator::{accumulate, Aggregator};
use super::DEFAULT_TOP_COUNT;

/// Spending breakdown for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    /// Category ID
    pub category_id: CategoryId,
    /// Category name
    pub category_name: String,
    /// Expense or Income
    pub category_type: CategoryType,
    /// Sum of absolute amounts
    pub total_amount: Money,
    /// Number of transactions
    pub transaction_count: usize,
}

impl<'a> Aggregator<'a> {
    /// Spending per category over any report period
    pub fn spending_by_category(
        &self,
        period: &ReportPeriod,
        user_filter: Option<UserId>,
    ) -> LedgerResult<Vec<SpendingByCategory>> {
        let rows = self.group_by_category(|t| {
            period.contains(t.transaction_date) && self.owned_by(t, user_filter)
        })?;
        debug!(%period, categories = rows.len(), "computed spending by category");
        Ok(rows)
    }

    /// Spending per category for one calendar month
    pub fn monthly_spending_by_category(
        &self,
        year: i32,
        month: u32,
        user_filter: Option<UserId>,
    ) -> LedgerResult<Vec<SpendingByCategory>> {
        let period = ReportPeriod::month(year, month)?;
        self.spending_by_category(&period, user_filter)
    }

    /// Spending per category for one calendar year
    pub fn yearly_spending_by_category(
        &self,
        year: i32,
        user_filter: Option<UserId>,
    ) -> LedgerResult<Vec<SpendingByCategory>> {
        let period = ReportPeriod::year(year)?;
        self.spending_by_category(&period, user_filter)
    }

    /// A user's largest expense categories across the whole snapshot
    ///
    /// A `top_count` of zero or less means [`DEFAULT_TOP_COUNT`].
    pub fn top_spending_categories(
        &self,
        user_id: UserId,
        top_count: i32,
    ) -> LedgerResult<Vec<SpendingByCategory>> {
        let limit = if top_count <= 0 {
            DEFAULT_TOP_COUNT
        } else {
            top_count as usize
        };

        let mut rows = self.group_by_category(|t| {
            t.amount.is_negative() && self.owner_of(t) == Some(user_id)
        })?;
        rows.truncate(limit);
        Ok(rows)
    }

    /// Group matching transactions by category, largest total first
    ///
    /// Categories without a matching transaction never appear.
    fn group_by_category<F>(&self, predicate: F) -> LedgerResult<Vec<SpendingByCategory>>
    where
        F: Fn(&Transaction) -> bool,
    {
        let mut totals: BTreeMap<CategoryId, (Money, usize)> = BTreeMap::new();
        for txn in self.transactions_where(predicate) {
            let entry = totals.entry(txn.category_id).or_insert((Money::zero(), 0));
            accumulate(&mut entry.0, txn.amount.abs(), "category total")?;
            entry.1 += 1;
        }

        let mut rows: Vec<SpendingByCategory> = totals
            .into_iter()
            .filter_map(|(category_id, (total_amount, transaction_count))| {
                let Some(category) = self.category(category_id) else {
                    debug!(category = %category_id, "skipping spending for unknown category");
                    return None;
                };
                Some(SpendingByCategory {
                    category_id,
                    category_name: category.name.clone(),
                    category_type: category.category_type,
                    total_amount,
                    transaction_count,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then(a.category_id.cmp(&b.category_id))
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountId, AccountType, Category, User};
    use crate::reports::LedgerSnapshot;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(account: i64, category: i64, on: NaiveDate, cents: i64) -> Transaction {
        Transaction::new(
            AccountId::new(account),
            CategoryId::new(category),
            on,
            Money::from_cents(cents),
        )
    }

    /// Ana owns account 1, Bo owns account 2
    fn ledger(transactions: Vec<Transaction>) -> LedgerSnapshot {
        LedgerSnapshot {
            users: vec![
                User::new("ana@example.com", "Ana").with_id(UserId::new(1)),
                User::new("bo@example.com", "Bo").with_id(UserId::new(2)),
            ],
            accounts: vec![
                Account::new(UserId::new(1), "Checking", AccountType::Checking)
                    .with_id(AccountId::new(1)),
                Account::new(UserId::new(2), "Checking", AccountType::Checking)
                    .with_id(AccountId::new(2)),
            ],
            categories: vec![
                Category::expense("Groceries").with_id(CategoryId::new(1)),
                Category::income("Salary").with_id(CategoryId::new(2)),
                Category::expense("Rent").with_id(CategoryId::new(3)),
                Category::expense("Fuel").with_id(CategoryId::new(4)),
            ],
            transactions,
            budgets: Vec::new(),
        }
    }

    #[test]
    fn test_october_groceries_and_salary() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 10, 5), -12550),
            txn(1, 1, date(2024, 10, 15), -9875),
            txn(1, 2, date(2024, 10, 1), 450000),
        ]);
        let rows = Aggregator::new(&snapshot)
            .monthly_spending_by_category(2024, 10, None)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_name, "Salary");
        assert_eq!(rows[0].total_amount, Money::from_cents(450000));
        assert_eq!(rows[0].transaction_count, 1);
        assert_eq!(rows[0].category_type, CategoryType::Income);
        assert_eq!(rows[1].category_name, "Groceries");
        assert_eq!(rows[1].total_amount, Money::from_cents(22425));
        assert_eq!(rows[1].transaction_count, 2);
        assert_eq!(rows[1].category_type, CategoryType::Expense);
    }

    #[test]
    fn test_month_boundaries_and_user_filter() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 9, 30), -1000),
            txn(1, 1, date(2024, 10, 1), -2000),
            txn(2, 1, date(2024, 10, 31), -4000),
            txn(1, 1, date(2024, 11, 1), -8000),
        ]);
        let aggregator = Aggregator::new(&snapshot);

        let everyone = aggregator.monthly_spending_by_category(2024, 10, None).unwrap();
        assert_eq!(everyone[0].total_amount, Money::from_cents(6000));
        assert_eq!(everyone[0].transaction_count, 2);

        let bo = aggregator
            .monthly_spending_by_category(2024, 10, Some(UserId::new(2)))
            .unwrap();
        assert_eq!(bo.len(), 1);
        assert_eq!(bo[0].total_amount, Money::from_cents(4000));

        let nobody = aggregator
            .monthly_spending_by_category(2024, 10, Some(UserId::new(99)))
            .unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_counts_cover_every_matching_transaction() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 3, 2), -500),
            txn(1, 3, date(2024, 3, 3), -150000),
            txn(2, 4, date(2024, 3, 9), -4000),
            txn(2, 1, date(2024, 3, 9), -700),
            txn(1, 2, date(2024, 3, 28), 300000),
        ]);
        let rows = Aggregator::new(&snapshot)
            .monthly_spending_by_category(2024, 3, None)
            .unwrap();

        let counted: usize = rows.iter().map(|r| r.transaction_count).sum();
        assert_eq!(counted, 5);
        assert!(rows.iter().all(|r| r.transaction_count > 0));
    }

    #[test]
    fn test_equal_totals_order_by_category_id() {
        let snapshot = ledger(vec![
            txn(1, 4, date(2024, 5, 1), -1000),
            txn(1, 3, date(2024, 5, 1), -1000),
            txn(1, 1, date(2024, 5, 1), -1000),
        ]);
        let rows = Aggregator::new(&snapshot)
            .monthly_spending_by_category(2024, 5, None)
            .unwrap();

        let ids: Vec<i64> = rows.iter().map(|r| r.category_id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let snapshot = ledger(Vec::new());
        let err = Aggregator::new(&snapshot)
            .monthly_spending_by_category(2024, 13, None)
            .unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::InvalidArgument(_)));
    }

    #[test]
    fn test_yearly_spans_whole_year() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 1, 1), -1000),
            txn(1, 1, date(2024, 12, 31), -1000),
            txn(1, 1, date(2025, 1, 1), -1000),
        ]);
        let rows = Aggregator::new(&snapshot)
            .yearly_spending_by_category(2024, None)
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transaction_count, 2);
    }

    #[test]
    fn test_top_two_of_three() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 1, 1), -50000),
            txn(1, 3, date(2024, 2, 1), -30000),
            txn(1, 4, date(2024, 3, 1), -10000),
        ]);
        let rows = Aggregator::new(&snapshot)
            .top_spending_categories(UserId::new(1), 2)
            .unwrap();

        let totals: Vec<Money> = rows.iter().map(|r| r.total_amount).collect();
        assert_eq!(totals, vec![Money::from_cents(50000), Money::from_cents(30000)]);
    }

    #[test]
    fn test_top_ignores_income_and_other_users() {
        let snapshot = ledger(vec![
            txn(1, 2, date(2024, 1, 1), 900000),
            txn(2, 3, date(2024, 1, 1), -900000),
            txn(1, 1, date(2024, 1, 2), -100),
        ]);
        let rows = Aggregator::new(&snapshot)
            .top_spending_categories(UserId::new(1), 5)
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name, "Groceries");
    }

    #[test]
    fn test_top_count_non_positive_uses_default() {
        let transactions = (1..=7)
            .map(|i| txn(1, 1 + (i % 4), date(2024, 1, i as u32), -(i * 100)))
            .collect();
        let mut snapshot = ledger(transactions);
        for id in 5..=8 {
            snapshot
                .categories
                .push(Category::expense(format!("Extra {}", id)).with_id(CategoryId::new(id)));
        }
        for (i, category) in (5..=8).enumerate() {
            snapshot
                .transactions
                .push(txn(1, category, date(2024, 2, 1 + i as u32), -5));
        }

        let aggregator = Aggregator::new(&snapshot);
        let top = |count| aggregator.top_spending_categories(UserId::new(1), count).unwrap();
        assert_eq!(top(0).len(), DEFAULT_TOP_COUNT);
        assert_eq!(top(-3).len(), DEFAULT_TOP_COUNT);
        assert_eq!(top(2).len(), 2);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let snapshot = ledger(vec![
            txn(1, 1, date(2024, 6, 1), -300),
            txn(2, 3, date(2024, 6, 2), -300),
            txn(1, 4, date(2024, 6, 3), -300),
        ]);
        let aggregator = Aggregator::new(&snapshot);

        let first = aggregator.monthly_spending_by_category(2024, 6, None).unwrap();
        let second = aggregator.monthly_spending_by_category(2024, 6, None).unwrap();
        assert_eq!(first, second);

        let top_first = aggregator.top_spending_categories(UserId::new(1), 2).unwrap();
        let top_second = aggregator.top_spending_categories(UserId::new(1), 2).unwrap();
        assert_eq!(top_first, top_second);
    }

    #[test]
    fn test_category_total_overflow_is_an_error() {
        let mut snapshot = ledger(vec![
            txn(1, 1, date(2024, 6, 1), 0),
            txn(1, 1, date(2024, 6, 2), 0),
        ]);
        for t in &mut snapshot.transactions {
            t.amount = Money::new(-Decimal::MAX);
        }
        let aggregator = Aggregator::new(&snapshot);

        assert!(matches!(
            aggregator.monthly_spending_by_category(2024, 6, None),
            Err(crate::error::LedgerError::InvalidArgument(_))
        ));
        assert!(matches!(
            aggregator.top_spending_categories(UserId::new(1), 5),
            Err(crate::error::LedgerError::InvalidArgument(_))
        ));
    }
}
