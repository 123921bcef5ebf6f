//! Ledger Lens - personal finance ledger with reporting
//!
//! This library stores users, their accounts, spending categories,
//! transactions and budgets, and aggregates them into reports: spending by
//! category, account balances, budget status and income/expense summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, accounts, transactions, etc.)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and business logic over storage
//! - `reports`: Read-only aggregations over a ledger snapshot
//! - `display`: Table formatting for the terminal
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `ledger` binary
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_lens::config::{LedgerPaths, Settings};
//! use ledger_lens::reports::{Aggregator, LedgerSnapshot, TransactionFilter};
//! use ledger_lens::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let snapshot = LedgerSnapshot::capture(&storage, &TransactionFilter::all())?;
//! let rows = Aggregator::new(&snapshot).monthly_spending_by_category(2025, 1, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
