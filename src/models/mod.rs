//! Core data models for Ledger Lens
//!
//! This module contains the records the aggregation engine reads: users,
//! accounts, categories, transactions and budgets, plus the money, id and
//! period value types they are built from.

pub mod account;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountType, DEFAULT_CURRENCY};
pub use budget::{Budget, BudgetPeriod};
pub use category::{Category, CategoryType};
pub use ids::{AccountId, BudgetId, CategoryId, RecordId, TransactionId, UserId};
pub use money::Money;
pub use period::{PeriodKind, ReportPeriod};
pub use transaction::Transaction;
pub use user::User;
