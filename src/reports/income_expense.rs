//! Income versus expenses over a date range

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, UserId};

use super::aggregator::{accumulate, Aggregator};

/// Income, expense and net totals for a date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeExpenseSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Sum of positive amounts
    pub total_income: Money,
    /// Sum of absolute negative amounts
    pub total_expenses: Money,
    /// Income minus expenses, equal to the raw sum of amounts
    pub net_amount: Money,
}

impl<'a> Aggregator<'a> {
    /// Totals over `[start, end]`, both days included
    ///
    /// A range with `start` after `end` matches nothing and yields zeros.
    /// Totals beyond the decimal range are an `InvalidArgument` error.
    pub fn income_expense_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_filter: Option<UserId>,
    ) -> LedgerResult<IncomeExpenseSummary> {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in self.transactions_where(|t| {
            t.transaction_date >= start
                && t.transaction_date <= end
                && self.owned_by(t, user_filter)
        }) {
            if txn.amount.is_positive() {
                accumulate(&mut total_income, txn.amount, "total income")?;
            } else {
                accumulate(&mut total_expenses, txn.amount.abs(), "total expenses")?;
            }
        }

        let net_amount = total_income
            .checked_sub(total_expenses)
            .ok_or_else(|| LedgerError::amount_overflow("net amount"))?;

        Ok(IncomeExpenseSummary {
            start_date: start,
            end_date: end,
            total_income,
            total_expenses,
            net_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountId, AccountType, CategoryId, Transaction, User};
    use crate::reports::LedgerSnapshot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(account: i64, on: NaiveDate, cents: i64) -> Transaction {
        Transaction::new(
            AccountId::new(account),
            CategoryId::new(1),
            on,
            Money::from_cents(cents),
        )
    }

    fn snapshot(transactions: Vec<Transaction>) -> LedgerSnapshot {
        LedgerSnapshot {
            users: vec![
                User::new("ana@example.com", "Ana").with_id(UserId::new(1)),
                User::new("bo@example.com", "Bo").with_id(UserId::new(2)),
            ],
            accounts: vec![
                Account::new(UserId::new(1), "Checking", AccountType::Checking)
                    .with_id(AccountId::new(1)),
                Account::new(UserId::new(2), "Cash", AccountType::Cash).with_id(AccountId::new(2)),
            ],
            transactions,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_is_all_zero() {
        let snapshot = LedgerSnapshot::default();
        let summary = Aggregator::new(&snapshot).income_expense_summary(
            date(2024, 1, 1),
            date(2024, 12, 31),
            None,
        )
        .unwrap();
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.net_amount, Money::zero());
    }

    #[test]
    fn test_net_equals_raw_sum() {
        let transactions = vec![
            txn(1, date(2024, 10, 1), 450000),
            txn(1, date(2024, 10, 5), -12550),
            txn(2, date(2024, 10, 15), -9875),
            txn(2, date(2024, 10, 31), 1999),
            txn(1, date(2024, 11, 1), -100000),
        ];
        let snapshot = snapshot(transactions.clone());
        let (start, end) = (date(2024, 10, 1), date(2024, 10, 31));
        let summary = Aggregator::new(&snapshot)
            .income_expense_summary(start, end, None)
            .unwrap();

        let raw = Money::checked_sum(
            transactions
                .iter()
                .filter(|t| t.transaction_date >= start && t.transaction_date <= end)
                .map(|t| t.amount),
        );

        assert_eq!(summary.total_income, Money::from_cents(451999));
        assert_eq!(summary.total_expenses, Money::from_cents(22425));
        assert_eq!(
            summary.total_income.checked_sub(summary.total_expenses),
            Some(summary.net_amount)
        );
        assert_eq!(Some(summary.net_amount), raw);
    }

    #[test]
    fn test_user_filter() {
        let snapshot = snapshot(vec![
            txn(1, date(2024, 10, 1), 1000),
            txn(2, date(2024, 10, 1), -500),
        ]);
        let summary = Aggregator::new(&snapshot).income_expense_summary(
            date(2024, 10, 1),
            date(2024, 10, 1),
            Some(UserId::new(2)),
        )
        .unwrap();
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::from_cents(500));
        assert_eq!(summary.net_amount, Money::from_cents(-500));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let snapshot = snapshot(vec![txn(1, date(2024, 10, 1), 1000)]);
        let summary = Aggregator::new(&snapshot).income_expense_summary(
            date(2024, 12, 31),
            date(2024, 1, 1),
            None,
        )
        .unwrap();
        assert_eq!(summary.net_amount, Money::zero());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let snapshot = snapshot(vec![
            txn(1, date(2024, 10, 1), 450000),
            txn(2, date(2024, 10, 5), -12550),
        ]);
        let aggregator = Aggregator::new(&snapshot);
        let (start, end) = (date(2024, 10, 1), date(2024, 10, 31));

        let first = aggregator.income_expense_summary(start, end, None).unwrap();
        let second = aggregator.income_expense_summary(start, end, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expense_overflow_is_an_error() {
        let huge = Money::parse("-70000000000000000000000000000").unwrap();
        let mut transactions = vec![txn(1, date(2024, 10, 1), 0); 2];
        for t in &mut transactions {
            t.amount = huge;
        }
        let snapshot = snapshot(transactions);

        let result = Aggregator::new(&snapshot).income_expense_summary(
            date(2024, 10, 1),
            date(2024, 10, 31),
            None,
        );
        assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
    }
}
