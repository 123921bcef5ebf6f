//! JSON Export functionality
//!
//! Exports the complete ledger to JSON with schema versioning, and report
//! rows as a JSON array.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::{LedgerSnapshot, LedgerSource, TransactionFilter};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Every table
    #[serde(flatten)]
    pub ledger: LedgerSnapshot,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub user_count: usize,
    pub account_count: usize,
    pub category_count: usize,
    pub transaction_count: usize,
    pub budget_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from any ledger source
    pub fn from_source(source: &dyn LedgerSource) -> LedgerResult<Self> {
        let ledger = LedgerSnapshot::capture(source, &TransactionFilter::all())?;

        let dates = ledger.transactions.iter().map(|t| t.transaction_date);
        let earliest_transaction = dates.clone().min().map(|d| d.to_string());
        let latest_transaction = dates.max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            user_count: ledger.users.len(),
            account_count: ledger.accounts.len(),
            category_count: ledger.categories.len(),
            transaction_count: ledger.transactions.len(),
            budget_count: ledger.budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger,
            metadata,
        })
    }

    /// Check referential integrity of the exported tables
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let user_ids: HashSet<_> = self.ledger.users.iter().map(|u| u.id).collect();
        let account_ids: HashSet<_> = self.ledger.accounts.iter().map(|a| a.id).collect();
        let category_ids: HashSet<_> = self.ledger.categories.iter().map(|c| c.id).collect();

        for account in &self.ledger.accounts {
            if !user_ids.contains(&account.user_id) {
                return Err(format!(
                    "Account {} references unknown user {}",
                    account.id, account.user_id
                ));
            }
        }

        for txn in &self.ledger.transactions {
            if !account_ids.contains(&txn.account_id) {
                return Err(format!(
                    "Transaction {} references unknown account {}",
                    txn.id, txn.account_id
                ));
            }
            if !category_ids.contains(&txn.category_id) {
                return Err(format!(
                    "Transaction {} references unknown category {}",
                    txn.id, txn.category_id
                ));
            }
        }

        for budget in &self.ledger.budgets {
            if !user_ids.contains(&budget.user_id) || !category_ids.contains(&budget.category_id) {
                return Err(format!(
                    "Budget {} references an unknown user or category",
                    budget.id
                ));
            }
        }

        Ok(())
    }

    /// Build an export, warning about dangling references
    pub(crate) fn checked(source: &dyn LedgerSource) -> LedgerResult<Self> {
        let export = Self::from_source(source)?;
        if let Err(problem) = export.validate() {
            warn!(%problem, "exporting ledger with integrity problems");
        }
        Ok(export)
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    source: &dyn LedgerSource,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::checked(source)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Write report rows as a pretty JSON array
pub fn write_rows_json<T: Serialize, W: Write>(rows: &[T], writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
