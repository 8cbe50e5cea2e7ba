use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sejour::cli::{
    handle_export_command, handle_fund_command, handle_import_command, handle_income_command,
    handle_report_command, handle_shared_command, handle_subscription_command,
    handle_transaction_command,
};
use sejour::config::{paths::SejourPaths, settings::Settings};
use sejour::storage::Storage;

#[derive(Parser)]
#[command(
    name = "sejour",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based finance tracker for students living abroad",
    long_about = "Séjour tracks your money while you study abroad: everyday \
                  transactions, scholarships and other income, subscriptions, \
                  expenses shared with flatmates, and an emergency fund, with \
                  monthly reports and advice built on top."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(sejour::cli::TransactionCommands),

    /// Income source management commands
    #[command(subcommand)]
    Income(sejour::cli::IncomeCommands),

    /// Subscription management commands
    #[command(subcommand, alias = "sub")]
    Subscription(sejour::cli::SubscriptionCommands),

    /// Shared expense management commands
    #[command(subcommand)]
    Shared(sejour::cli::SharedCommands),

    /// Emergency fund commands
    #[command(subcommand)]
    Fund(sejour::cli::FundCommands),

    /// Reports: dashboard, categories, daily series, month-over-month
    #[command(subcommand)]
    Report(sejour::cli::ReportCommands),

    /// Export data to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(sejour::cli::ExportCommands),

    /// Import transactions from a CSV file
    Import {
        /// Path to CSV file (columns: date, type, amount, description, category)
        file: PathBuf,

        /// Date format of the date column (strftime, default %Y-%m-%d)
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SejourPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Subscription(cmd)) => {
            handle_subscription_command(&storage, cmd)?;
        }
        Some(Commands::Shared(cmd)) => {
            handle_shared_command(&storage, cmd)?;
        }
        Some(Commands::Fund(cmd)) => {
            handle_fund_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file, date_format }) => {
            handle_import_command(&storage, &settings, file, date_format)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Séjour at: {}", paths.data_dir().display());
            sejour::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Get started:");
            println!("  sejour txn add 12.50 \"Groceries\" --category Food");
            println!("  sejour income add \"Scholarship\" 500 --frequency monthly");
            println!("  sejour fund target 1000");
            println!("  sejour report dashboard");
        }
        Some(Commands::Config) => {
            println!("Séjour Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency: {} ({})", settings.currency_code, settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
        }
        None => {
            println!("Séjour - finance tracking for students abroad");
            println!();
            println!("Run 'sejour --help' for usage information.");
            println!("Run 'sejour init' to set up a new data directory.");
        }
    }

    Ok(())
}
