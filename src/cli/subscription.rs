//! CLI commands for subscriptions

use clap::Subcommand;

use crate::display::format_subscription_table;
use crate::error::{SejourError, SejourResult};
use crate::models::BillingCycle;
use crate::services::SubscriptionService;
use crate::storage::Storage;

use super::{parse_date, parse_money};

/// Subscription subcommands
#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// Add a new subscription
    Add {
        /// Subscription name (must be unique)
        name: String,

        /// Amount per billing cycle (e.g., "13.49")
        amount: String,

        /// Billing cycle: weekly, monthly, yearly
        #[arg(short, long, default_value = "monthly")]
        cycle: String,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Whether the charge is auto-debited
        #[arg(long)]
        automatic: bool,
    },

    /// List subscriptions
    List {
        /// Show only active, unpaused subscriptions
        #[arg(short, long)]
        billable: bool,
    },

    /// Record a payment, advancing the next due date by one cycle
    Pay {
        /// Subscription name or ID
        name: String,
    },

    /// Pause a subscription (excluded from totals until resumed)
    Pause {
        /// Subscription name or ID
        name: String,
    },

    /// Resume a paused subscription
    Resume {
        /// Subscription name or ID
        name: String,
    },

    /// Cancel a subscription (kept on file, never billed again)
    Cancel {
        /// Subscription name or ID
        name: String,
    },

    /// Delete a subscription entirely
    Delete {
        /// Subscription name or ID
        name: String,
    },
}

/// Handle subscription commands
pub fn handle_subscription_command(
    storage: &Storage,
    cmd: SubscriptionCommands,
) -> SejourResult<()> {
    let service = SubscriptionService::new(storage);

    match cmd {
        SubscriptionCommands::Add {
            name,
            amount,
            cycle,
            start,
            automatic,
        } => {
            let amount = parse_money(&amount)?;
            let cycle = BillingCycle::parse(&cycle)
                .map_err(|e| SejourError::Validation(e.to_string()))?;
            let start = parse_date(start.as_deref())?;

            let sub = service.add(name, amount, cycle, start, automatic)?;
            println!(
                "Added subscription {}: {} ({} {})",
                sub.id, sub.name, sub.amount, sub.billing_cycle
            );
        }

        SubscriptionCommands::List { billable } => {
            let subs = if billable {
                service.list_billable()?
            } else {
                service.list()?
            };
            print!("{}", format_subscription_table(&subs));
        }

        SubscriptionCommands::Pay { name } => {
            let sub = find(&service, &name)?;
            let next = service.record_payment(sub.id)?;
            println!("Recorded payment for {}; next due {}", sub.name, next);
        }

        SubscriptionCommands::Pause { name } => {
            let sub = find(&service, &name)?;
            service.pause(sub.id)?;
            println!("Paused {}", sub.name);
        }

        SubscriptionCommands::Resume { name } => {
            let sub = find(&service, &name)?;
            service.resume(sub.id)?;
            println!("Resumed {}", sub.name);
        }

        SubscriptionCommands::Cancel { name } => {
            let sub = find(&service, &name)?;
            service.cancel(sub.id)?;
            println!("Cancelled {}", sub.name);
        }

        SubscriptionCommands::Delete { name } => {
            let sub = find(&service, &name)?;
            service.delete(sub.id)?;
            println!("Deleted {}", sub.name);
        }
    }

    Ok(())
}

fn find(
    service: &SubscriptionService,
    name_or_id: &str,
) -> SejourResult<crate::models::Subscription> {
    service
        .find(name_or_id)?
        .ok_or_else(|| SejourError::subscription_not_found(name_or_id))
}
