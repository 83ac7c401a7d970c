//! Export CLI commands
//!
//! Writes the spend history to `expenses-<today>.json` or
//! `expenses-<today>.csv`. Unlike ledger persistence, export failures
//! surface to the user.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SpendError, SpendResult};
use crate::export::{export_entries_csv, export_entries_json, ExportFormat};
use crate::models::DayKey;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the full history as pretty-printed JSON
    Json {
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export the full history as CSV
    Csv {
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> SpendResult<()> {
    let today = DayKey::now();
    let ledger = storage.ledger.snapshot()?;

    let (format, out) = match cmd {
        ExportCommands::Json { out } => (ExportFormat::Json, out),
        ExportCommands::Csv { out } => (ExportFormat::Csv, out),
    };

    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(format.filename(today));

    let file = File::create(&path)
        .map_err(|e| SpendError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_entries_json(&ledger, &mut writer)?,
        ExportFormat::Csv => export_entries_csv(&ledger, &settings.date_format, &mut writer)?,
    }

    println!("Exported to {}", path.display());
    Ok(())
}
