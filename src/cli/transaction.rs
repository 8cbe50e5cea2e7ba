//! CLI commands for transactions

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_table;
use crate::error::SejourResult;
use crate::models::{TransactionId, TransactionKind};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::{parse_date, parse_money, parse_period};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "12.50")
        amount: String,

        /// What the money was for
        description: String,

        /// Category label
        #[arg(short, long, default_value = "Uncategorized")]
        category: String,

        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,

        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions
    List {
        /// Restrict to a period (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Edit fields of a transaction
    Edit {
        /// Transaction ID
        id: String,

        #[arg(long)]
        amount: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SejourResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            kind,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let kind = TransactionKind::parse(&kind)
                .map_err(|e| crate::error::SejourError::Validation(e.to_string()))?;
            let date = parse_date(date.as_deref())?;

            let txn = service.add(
                amount,
                description,
                category,
                kind,
                date,
                settings.currency_code.clone(),
            )?;
            println!("Added {} {}: {} ({})", txn.kind, txn.id, txn.description, txn.amount);
        }

        TransactionCommands::List { period } => {
            let transactions = if period.is_some() {
                let period = parse_period(period.as_deref())?;
                service.list_for_period(&period)?
            } else {
                service.list()?
            };
            print!("{}", format_transaction_table(&transactions));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| crate::error::SejourError::transaction_not_found(&id))?;

            let amount = amount.as_deref().map(parse_money).transpose()?;
            let date = date.map(|d| parse_date(Some(&d))).transpose()?;

            let txn = service.update(id, amount, description, category, date)?;
            println!("Updated {}: {} ({})", txn.id, txn.description, txn.amount);
        }

        TransactionCommands::Delete { id } => {
            let parsed: TransactionId = id
                .parse()
                .map_err(|_| crate::error::SejourError::transaction_not_found(&id))?;
            service.delete(parsed)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}
