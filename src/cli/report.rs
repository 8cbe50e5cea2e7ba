//! CLI commands for reports

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{SejourError, SejourResult};
use crate::reports::{CategoryReport, ComparisonReport, DailyReport, DashboardReport};
use crate::storage::Storage;

use super::parse_period;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly dashboard: totals, savings rate, fund progress
    #[command(alias = "stats")]
    Dashboard {
        /// Period to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending breakdown by category (top 8)
    Categories {
        /// Period to report on (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Day-by-day income and expenses
    Daily {
        /// Period to report on (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Month-over-month comparison with advice
    Compare {
        /// Period to compare against the month before it (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> SejourResult<()> {
    match cmd {
        ReportCommands::Dashboard { period, output } => {
            let period = parse_period(period.as_deref())?;
            let report = DashboardReport::generate(storage, &period)?;
            emit(output, report.format_terminal(), |w| report.export_csv(w))
        }
        ReportCommands::Categories { period, output } => {
            let period = parse_period(period.as_deref())?;
            let report = CategoryReport::generate(storage, &period)?;
            emit(output, report.format_terminal(), |w| report.export_csv(w))
        }
        ReportCommands::Daily { period, output } => {
            let period = parse_period(period.as_deref())?;
            let report = DailyReport::generate(storage, &period)?;
            emit(output, report.format_terminal(), |w| report.export_csv(w))
        }
        ReportCommands::Compare { period, output } => {
            let period = parse_period(period.as_deref())?;
            let report = ComparisonReport::generate(storage, &period)?;
            emit(output, report.format_terminal(), |w| report.export_csv(w))
        }
    }
}

/// Print the report, or write it as CSV when an output path is given
fn emit<F>(output: Option<PathBuf>, terminal: String, export: F) -> SejourResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> SejourResult<()>,
{
    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            SejourError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export(&mut writer)?;
        println!("Report exported to: {}", path.display());
    } else {
        println!("{}", terminal);
    }
    Ok(())
}
