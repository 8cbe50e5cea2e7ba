//! CLI command for CSV import

use std::fs::File;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{SejourError, SejourResult};
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    file: PathBuf,
    date_format: Option<String>,
) -> SejourResult<()> {
    let reader = File::open(&file).map_err(|e| {
        SejourError::Import(format!("Failed to open {}: {}", file.display(), e))
    })?;

    let mut service = ImportService::new(storage);
    if let Some(format) = date_format {
        service = service.with_date_format(&format);
    }

    let summary = service.import_csv(reader, &settings.currency_code)?;

    println!(
        "Imported {} transactions ({} duplicates skipped)",
        summary.imported, summary.duplicates
    );
    if !summary.errors.is_empty() {
        println!("{} rows failed:", summary.errors.len());
        for error in &summary.errors {
            println!("  {}", error);
        }
    }

    Ok(())
}
