//! Service layer for Ledger Lens
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, uniqueness, parent existence and delete cascades. Services
//! are the only writers; reports only read.

pub mod account;
pub mod budget;
pub mod category;
pub mod transaction;
pub mod user;

pub use account::AccountService;
pub use budget::BudgetService;
pub use category::CategoryService;
pub use transaction::{TransactionListOptions, TransactionService};
pub use user::{UserDeletion, UserService};
