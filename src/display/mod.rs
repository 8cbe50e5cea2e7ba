//! Terminal display helpers

pub mod report;
pub mod transaction;

pub use report::{format_change, format_money_colored, progress_bar, separator, trend_arrow};
pub use transaction::{
    format_income_table, format_shared_expense_table, format_subscription_table,
    format_transaction_table,
};
