//! CSV Export functionality
//!
//! Writes report rows to CSV (spreadsheet-compatible). Each serialized field
//! becomes a column and the header comes from the field names.

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// Write report rows as CSV with a header line
pub fn write_rows_csv<T: Serialize, W: Write>(rows: &[T], writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
