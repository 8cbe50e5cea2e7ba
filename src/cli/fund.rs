//! CLI commands for the emergency fund

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::progress_bar;
use crate::error::SejourResult;
use crate::services::FundService;
use crate::storage::Storage;

use super::parse_money;

/// Emergency fund subcommands
#[derive(Subcommand, Debug)]
pub enum FundCommands {
    /// Show fund balance and progress
    Status,

    /// Set (or change) the savings target
    Target {
        /// Target amount (e.g., "1000.00")
        amount: String,
    },

    /// Add money to the fund
    Add {
        /// Amount to deposit
        amount: String,
    },

    /// Withdraw money from the fund
    Withdraw {
        /// Amount to withdraw
        amount: String,
    },
}

/// Handle emergency fund commands
pub fn handle_fund_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FundCommands,
) -> SejourResult<()> {
    let service = FundService::new(storage);

    match cmd {
        FundCommands::Status => match service.get()? {
            Some(fund) => print_status(&fund),
            None => {
                println!("No emergency fund set up yet.");
                println!("Run 'sejour fund target <amount>' to create one.");
            }
        },

        FundCommands::Target { amount } => {
            let amount = parse_money(&amount)?;
            let fund = service.set_target(amount, settings.currency_code.clone())?;
            println!("Target set to {}", fund.target_amount);
            print_status(&fund);
        }

        FundCommands::Add { amount } => {
            let amount = parse_money(&amount)?;
            let fund = service.deposit(amount)?;
            println!("Deposited {}", amount);
            print_status(&fund);
        }

        FundCommands::Withdraw { amount } => {
            let amount = parse_money(&amount)?;
            let fund = service.withdraw(amount)?;
            println!("Withdrew {}", amount);
            print_status(&fund);
        }
    }

    Ok(())
}

fn print_status(fund: &crate::models::EmergencyFund) {
    let pct = fund.progress_percentage();
    println!(
        "Emergency fund: {} / {} ({:.1}%)",
        fund.current_amount, fund.target_amount, pct
    );
    println!("[{}]", progress_bar(pct, 40));
    if fund.is_fully_funded() {
        println!("Fully funded!");
    } else {
        println!("Remaining: {}", fund.remaining());
    }
}
