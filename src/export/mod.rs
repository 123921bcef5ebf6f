//! Export module for Ledger Lens
//!
//! Provides machine-readable output in multiple formats:
//! - CSV: report rows (spreadsheet-compatible)
//! - JSON: report rows, or the full ledger with schema versioning
//! - YAML: report rows, or the full ledger for human-readable backup

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::write_rows_csv;
pub use json::{
    export_full_json, write_rows_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_full_yaml, write_rows_yaml};

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::LedgerResult;

/// Machine-readable output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write report rows in the requested format
pub fn write_rows<T: Serialize, W: Write>(
    rows: &[T],
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => write_rows_csv(rows, writer),
        ExportFormat::Json => write_rows_json(rows, writer),
        ExportFormat::Yaml => write_rows_yaml(rows, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UserId};
    use crate::reports::AccountBalanceSummary;

    #[test]
    fn test_write_rows_dispatch() {
        let rows = vec![AccountBalanceSummary {
            user_id: UserId::new(1),
            user_name: "Ana".into(),
            account_type: crate::models::AccountType::Savings,
            account_count: 2,
            total_balance: Money::from_cents(123456),
        }];

        let mut csv_out = Vec::new();
        write_rows(&rows, ExportFormat::Csv, &mut csv_out).unwrap();
        assert!(String::from_utf8(csv_out).unwrap().contains("Ana,Savings,2,1234.56"));

        let mut json_out = Vec::new();
        write_rows(&rows, ExportFormat::Json, &mut json_out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
        assert_eq!(value[0]["total_balance"], "1234.56");

        let mut yaml_out = Vec::new();
        write_rows(&rows, ExportFormat::Yaml, &mut yaml_out).unwrap();
        assert!(String::from_utf8(yaml_out).unwrap().contains("user_name: Ana"));
    }
}
