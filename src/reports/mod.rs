//! Reports module for Ledger Lens
//!
//! The aggregation engine: spending by category (monthly, yearly, top-N),
//! account balance rollups, budget status and income/expense summaries.
//! Every report reads a [`LedgerSnapshot`] through an [`Aggregator`].

pub mod account_balances;
pub mod aggregator;
pub mod budget_status;
pub mod income_expense;
pub mod snapshot;
pub mod spending;

pub use account_balances::AccountBalanceSummary;
pub use aggregator::Aggregator;
pub use budget_status::BudgetStatus;
pub use income_expense::IncomeExpenseSummary;
pub use snapshot::{LedgerSnapshot, LedgerSource, TransactionFilter};
pub use spending::SpendingByCategory;

/// Number of categories returned by top spending when none is requested
pub const DEFAULT_TOP_COUNT: usize = 5;
