//! Storage layer for Ledger Lens
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The [`Storage`] coordinator is also the production
//! [`LedgerSource`] that reports read from.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod records;
pub mod repository;
pub mod transactions;
pub mod users;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use records::StoredRecord;
pub use repository::Repository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use tracing::debug;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{Account, Budget, BudgetPeriod, Category, Transaction, User, UserId};
use crate::reports::{LedgerSource, TransactionFilter};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub users: UserRepository,
    pub accounts: AccountRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.table_file("users")),
            accounts: AccountRepository::new(paths.table_file("accounts")),
            categories: CategoryRepository::new(paths.table_file("categories")),
            transactions: TransactionRepository::new(paths.table_file("transactions")),
            budgets: BudgetRepository::new(paths.table_file("budgets")),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> LedgerResult<()> {
        self.users.load()?;
        self.accounts.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.budgets.load()?;
        debug!(base = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> LedgerResult<()> {
        self.users.save()?;
        self.accounts.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl LedgerSource for Storage {
    fn users(&self) -> LedgerResult<Vec<User>> {
        self.users.get_all()
    }

    fn accounts(&self, user_id: Option<UserId>) -> LedgerResult<Vec<Account>> {
        match user_id {
            Some(user_id) => self.accounts.get_by_user(user_id),
            None => self.accounts.get_all(),
        }
    }

    fn categories(&self) -> LedgerResult<Vec<Category>> {
        self.categories.get_all()
    }

    fn transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        self.transactions.get_by_date_range(filter.start, filter.end)
    }

    fn budgets(&self, period: Option<BudgetPeriod>) -> LedgerResult<Vec<Budget>> {
        self.budgets.get_by_period(period)
    }
}
