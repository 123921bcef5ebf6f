//! CLI command for exporting the whole ledger
//!
//! Writes every table with schema versioning so the output can be
//! archived or loaded by other tools.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::LedgerResult;
use crate::export::{export_full_json, export_full_yaml};
use crate::storage::Storage;

use super::open_output;

/// Full export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FullExportFormat {
    /// JSON (machine-readable)
    #[default]
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value_t = FullExportFormat::Json)]
    pub format: FullExportFormat,
    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    let mut writer = open_output(args.output.as_deref())?;

    match args.format {
        FullExportFormat::Json => {
            export_full_json(storage, &mut writer, !args.compact)?;
            writeln!(writer)?;
        }
        FullExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Exported ledger to {}", path.display());
    }

    Ok(())
}
