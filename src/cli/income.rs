//! CLI commands for income sources

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income_table;
use crate::error::SejourResult;
use crate::models::{Frequency, IncomeSourceId};
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_date, parse_money, parse_period};

/// Income source subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Add a new income source
    Add {
        /// Name of the source (e.g., "Scholarship")
        name: String,

        /// Amount per payout (e.g., "500.00")
        amount: String,

        /// Payout frequency: weekly, monthly, quarterly, yearly, one-time
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Date of the (first) payout (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List income sources
    List {
        /// Restrict to a period (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Delete an income source
    Delete {
        /// Income source ID
        id: String,
    },
}

/// Handle income commands
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SejourResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let frequency = Frequency::parse(&frequency)
                .map_err(|e| crate::error::SejourError::Validation(e.to_string()))?;
            let date = parse_date(date.as_deref())?;

            let source =
                service.add(name, amount, frequency, date, settings.currency_code.clone())?;
            println!(
                "Added income source {}: {} ({} {})",
                source.id, source.source_name, source.amount, source.frequency
            );
        }

        IncomeCommands::List { period } => {
            let sources = if period.is_some() {
                let period = parse_period(period.as_deref())?;
                service.list_for_period(&period)?
            } else {
                service.list()?
            };
            print!("{}", format_income_table(&sources));
        }

        IncomeCommands::Delete { id } => {
            let parsed: IncomeSourceId = id
                .parse()
                .map_err(|_| crate::error::SejourError::income_source_not_found(&id))?;
            service.delete(parsed)?;
            println!("Deleted income source {}", id);
        }
    }

    Ok(())
}
