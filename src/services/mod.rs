//! Business logic layer
//!
//! Services wrap validation and persistence around the repositories.
//! Aggregation lives in `reports` and never reaches through a service.

pub mod fund;
pub mod import;
pub mod income;
pub mod shared_expense;
pub mod subscription;
pub mod transaction;

pub use fund::FundService;
pub use import::{ImportService, ImportSummary};
pub use income::IncomeService;
pub use shared_expense::SharedExpenseService;
pub use subscription::SubscriptionService;
pub use transaction::TransactionService;
