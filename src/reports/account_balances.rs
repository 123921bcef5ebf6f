//! Account balance rollup
//!
//! Groups accounts by owner and account type.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{AccountType, Money, UserId};

use super::aggregator::{accumulate, Aggregator};

/// Balance total for one (user, account type) group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalanceSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub account_type: AccountType,
    /// Number of accounts in the group
    pub account_count: usize,
    /// Sum of signed balances
    pub total_balance: Money,
}

impl<'a> Aggregator<'a> {
    /// Balance rollup for every user
    pub fn account_balance_summary(&self) -> LedgerResult<Vec<AccountBalanceSummary>> {
        self.account_balances(None)
    }

    /// Balance totals per user and account type
    ///
    /// Ordered by user name, then account type.
    pub fn account_balances(
        &self,
        user_filter: Option<UserId>,
    ) -> LedgerResult<Vec<AccountBalanceSummary>> {
        let mut groups: BTreeMap<(UserId, AccountType), (usize, Money)> = BTreeMap::new();
        for account in &self.snapshot().accounts {
            if user_filter.map_or(false, |id| account.user_id != id) {
                continue;
            }
            let entry = groups
                .entry((account.user_id, account.account_type))
                .or_insert((0, Money::zero()));
            entry.0 += 1;
            accumulate(&mut entry.1, account.balance, "account balance total")?;
        }

        let mut rows: Vec<AccountBalanceSummary> = groups
            .into_iter()
            .filter_map(|((user_id, account_type), (account_count, total_balance))| {
                let Some(user) = self.user(user_id) else {
                    debug!(user = %user_id, "skipping accounts of unknown user");
                    return None;
                };
                Some(AccountBalanceSummary {
                    user_id,
                    user_name: user.name.clone(),
                    account_type,
                    account_count,
                    total_balance,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.user_name
                .cmp(&b.user_name)
                .then(a.account_type.code().cmp(&b.account_type.code()))
                .then(a.user_id.cmp(&b.user_id))
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::{Account, AccountId, User};
    use crate::reports::LedgerSnapshot;
    use rust_decimal::Decimal;

    fn account(id: i64, user: i64, account_type: AccountType, cents: i64) -> Account {
        Account::with_balance(
            UserId::new(user),
            format!("Account {}", id),
            account_type,
            Money::from_cents(cents),
        )
        .with_id(AccountId::new(id))
    }

    fn snapshot() -> LedgerSnapshot {
        LedgerSnapshot {
            users: vec![
                User::new("zed@example.com", "Zed").with_id(UserId::new(1)),
                User::new("ana@example.com", "Ana").with_id(UserId::new(2)),
            ],
            accounts: vec![
                account(1, 1, AccountType::Checking, 10000),
                account(2, 2, AccountType::Savings, 250000),
                account(3, 2, AccountType::Checking, 5000),
                account(4, 2, AccountType::Checking, 7500),
                account(5, 2, AccountType::CreditCard, -42000),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_and_order() {
        let snapshot = snapshot();
        let rows = Aggregator::new(&snapshot).account_balances(None).unwrap();

        let keys: Vec<(&str, AccountType)> = rows
            .iter()
            .map(|r| (r.user_name.as_str(), r.account_type))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Ana", AccountType::Checking),
                ("Ana", AccountType::Savings),
                ("Ana", AccountType::CreditCard),
                ("Zed", AccountType::Checking),
            ]
        );

        assert_eq!(rows[0].account_count, 2);
        assert_eq!(rows[0].total_balance, Money::from_cents(12500));
        assert_eq!(rows[2].total_balance, Money::from_cents(-42000));
    }

    #[test]
    fn test_user_filter() {
        let snapshot = snapshot();
        let rows = Aggregator::new(&snapshot)
            .account_balances(Some(UserId::new(1)))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_name, "Zed");
    }

    #[test]
    fn test_accounts_without_owner_are_skipped() {
        let mut snapshot = snapshot();
        snapshot.accounts.push(account(6, 9, AccountType::Cash, 100));
        let rows = Aggregator::new(&snapshot).account_balances(None).unwrap();
        assert!(rows.iter().all(|r| r.user_id != UserId::new(9)));
    }

    #[test]
    fn test_empty_input() {
        let snapshot = LedgerSnapshot::default();
        assert!(Aggregator::new(&snapshot)
            .account_balance_summary()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let snapshot = snapshot();
        let aggregator = Aggregator::new(&snapshot);
        assert_eq!(
            aggregator.account_balance_summary().unwrap(),
            aggregator.account_balance_summary().unwrap()
        );
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let mut snapshot = snapshot();
        for account in &mut snapshot.accounts {
            account.balance = Money::new(Decimal::MAX);
        }
        let result = Aggregator::new(&snapshot).account_balance_summary();
        assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
    }
}
