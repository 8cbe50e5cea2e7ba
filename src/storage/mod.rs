//! Storage layer for Séjour
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod fund;
pub mod income;
pub mod init;
pub mod shared_expenses;
pub mod subscriptions;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use fund::FundRepository;
pub use income::IncomeSourceRepository;
pub use init::initialize_storage;
pub use shared_expenses::SharedExpenseRepository;
pub use subscriptions::SubscriptionRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::SejourPaths;
use crate::error::SejourError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SejourPaths,
    pub transactions: TransactionRepository,
    pub income_sources: IncomeSourceRepository,
    pub subscriptions: SubscriptionRepository,
    pub shared_expenses: SharedExpenseRepository,
    pub fund: FundRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SejourPaths) -> Result<Self, SejourError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            income_sources: IncomeSourceRepository::new(paths.income_sources_file()),
            subscriptions: SubscriptionRepository::new(paths.subscriptions_file()),
            shared_expenses: SharedExpenseRepository::new(paths.shared_expenses_file()),
            fund: FundRepository::new(paths.fund_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SejourPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SejourError> {
        self.transactions.load()?;
        self.income_sources.load()?;
        self.subscriptions.load()?;
        self.shared_expenses.load()?;
        self.fund.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SejourError> {
        self.transactions.save()?;
        self.income_sources.save()?;
        self.subscriptions.save()?;
        self.shared_expenses.save()?;
        self.fund.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
