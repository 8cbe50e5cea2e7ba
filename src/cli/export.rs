//! CLI commands for data export

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{SejourError, SejourResult};
use crate::export::{
    export_income_csv, export_json, export_shared_expenses_csv, export_subscriptions_csv,
    export_transactions_csv, export_yaml,
};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export one collection to CSV
    Csv {
        /// Collection: transactions, income, subscriptions, shared
        collection: String,

        /// Output file path
        output: PathBuf,
    },

    /// Export all data to JSON
    Json {
        /// Output file path
        output: PathBuf,
    },

    /// Export all data to YAML
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SejourResult<()> {
    match cmd {
        ExportCommands::Csv { collection, output } => {
            let mut writer = open(&output)?;
            match collection.as_str() {
                "transactions" => export_transactions_csv(storage, &mut writer)?,
                "income" => export_income_csv(storage, &mut writer)?,
                "subscriptions" => export_subscriptions_csv(storage, &mut writer)?,
                "shared" => export_shared_expenses_csv(storage, &mut writer)?,
                other => {
                    return Err(SejourError::Export(format!(
                        "Unknown collection: {}. Use transactions, income, subscriptions, or shared",
                        other
                    )))
                }
            }
            println!("Exported {} to: {}", collection, output.display());
        }

        ExportCommands::Json { output } => {
            let mut writer = open(&output)?;
            export_json(storage, &mut writer)?;
            println!("Exported all data to: {}", output.display());
        }

        ExportCommands::Yaml { output } => {
            let mut writer = open(&output)?;
            export_yaml(storage, &mut writer)?;
            println!("Exported all data to: {}", output.display());
        }
    }

    Ok(())
}

fn open(path: &PathBuf) -> SejourResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SejourError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
