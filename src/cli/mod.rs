//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;
pub mod user;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, User};
use crate::services::UserService;
use crate::storage::Storage;

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD.", s))
    })
}

/// Parse a money argument such as `-125.50` or `$1,000`
pub(crate) fn parse_money(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '-125.50'. Error: {}",
            s, e
        ))
    })
}

/// Resolve a user given by email or ID
pub(crate) fn resolve_user(storage: &Storage, identifier: &str) -> LedgerResult<User> {
    UserService::new(storage)
        .find(identifier)?
        .ok_or_else(|| LedgerError::user_not_found(identifier))
}

/// Open the output destination: a file when given, stdout otherwise
pub(crate) fn open_output(path: Option<&Path>) -> LedgerResult<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            LedgerError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?)),
        None => Box::new(io::stdout().lock()),
    })
}
