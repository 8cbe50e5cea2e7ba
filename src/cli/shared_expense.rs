//! CLI commands for shared expenses

use clap::Subcommand;

use crate::display::format_shared_expense_table;
use crate::error::SejourResult;
use crate::models::SharedExpenseId;
use crate::services::SharedExpenseService;
use crate::storage::Storage;

use super::{parse_date, parse_money, parse_period};

/// Shared expense subcommands
#[derive(Subcommand, Debug)]
pub enum SharedCommands {
    /// Add a new shared expense
    Add {
        /// What the bill was for
        description: String,

        /// Full amount of the bill (e.g., "45.00")
        total: String,

        /// Your share of the bill (e.g., "15.00")
        share: String,

        /// Participants, comma-separated (e.g., "Léa,Tom")
        #[arg(short, long)]
        with: Option<String>,

        /// Date of the bill (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List shared expenses
    List {
        /// Restrict to a period (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,

        /// Show only unsettled expenses
        #[arg(short, long)]
        unsettled: bool,
    },

    /// Mark a shared expense as settled
    Settle {
        /// Shared expense ID
        id: String,
    },

    /// Delete a shared expense
    Delete {
        /// Shared expense ID
        id: String,
    },
}

/// Handle shared expense commands
pub fn handle_shared_command(storage: &Storage, cmd: SharedCommands) -> SejourResult<()> {
    let service = SharedExpenseService::new(storage);

    match cmd {
        SharedCommands::Add {
            description,
            total,
            share,
            with,
            date,
        } => {
            let total = parse_money(&total)?;
            let share = parse_money(&share)?;
            let date = parse_date(date.as_deref())?;
            let participants: Vec<String> = with
                .map(|w| {
                    w.split(',')
                        .map(|p| p.trim().to_string())
                        .filter(|p| !p.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            let exp = service.add(description, total, share, participants, date)?;
            println!(
                "Added shared expense {}: {} (your share {})",
                exp.id, exp.description, exp.your_share
            );
        }

        SharedCommands::List { period, unsettled } => {
            let mut expenses = if period.is_some() {
                let period = parse_period(period.as_deref())?;
                service.list_for_period(&period)?
            } else {
                service.list()?
            };
            if unsettled {
                expenses.retain(|e| !e.settled);
            }
            print!("{}", format_shared_expense_table(&expenses));

            let outstanding = service.outstanding_share()?;
            if !outstanding.is_zero() {
                println!("\nOutstanding (your share, unsettled): {}", outstanding);
            }
        }

        SharedCommands::Settle { id } => {
            let parsed: SharedExpenseId = id
                .parse()
                .map_err(|_| crate::error::SejourError::shared_expense_not_found(&id))?;
            let exp = service.settle(parsed)?;
            println!("Settled {}: {}", exp.id, exp.description);
        }

        SharedCommands::Delete { id } => {
            let parsed: SharedExpenseId = id
                .parse()
                .map_err(|_| crate::error::SejourError::shared_expense_not_found(&id))?;
            service.delete(parsed)?;
            println!("Deleted shared expense {}", id);
        }
    }

    Ok(())
}
