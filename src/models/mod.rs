//! Core data models for Séjour

pub mod fund;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod shared_expense;
pub mod subscription;
pub mod transaction;

pub use fund::{EmergencyFund, FundError};
pub use ids::{IncomeSourceId, SharedExpenseId, SubscriptionId, TransactionId};
pub use income::{Frequency, IncomeSource};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use shared_expense::SharedExpense;
pub use subscription::{BillingCycle, Subscription};
pub use transaction::{Transaction, TransactionKind};
