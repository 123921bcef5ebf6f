//! YAML Export functionality
//!
//! Exports the complete ledger to YAML for human-readable backup, and
//! report rows as a YAML sequence.

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::reports::LedgerSource;

fn export_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(source: &dyn LedgerSource, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::checked(source)?;

    writeln!(writer, "# Ledger Lens Full Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}

/// Write report rows as a YAML sequence
pub fn write_rows_yaml<T: Serialize, W: Write>(rows: &[T], writer: &mut W) -> LedgerResult<()> {
    serde_yaml::to_writer(writer, rows).map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId};
    use crate::reports::LedgerSnapshot;

    #[test]
    fn test_yaml_export_has_header_and_tables() {
        let ledger = LedgerSnapshot {
            categories: vec![Category::income("Salary").with_id(CategoryId::new(1))],
            ..Default::default()
        };

        let mut output = Vec::new();
        export_full_yaml(&ledger, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Ledger Lens Full Export"));
        assert!(text.contains("schema_version"));
        assert!(text.contains("Salary"));
    }

    #[test]
    fn test_write_rows_yaml() {
        let mut output = Vec::new();
        write_rows_yaml(&["one", "two"], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("- one"));
    }
}
