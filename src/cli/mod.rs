//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod fund;
pub mod import;
pub mod income;
pub mod report;
pub mod shared_expense;
pub mod subscription;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands};
pub use fund::{handle_fund_command, FundCommands};
pub use import::handle_import_command;
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use shared_expense::{handle_shared_command, SharedCommands};
pub use subscription::{handle_subscription_command, SubscriptionCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{Money, Period};

/// Parse a money argument, mapping failures to validation errors
pub(crate) fn parse_money(s: &str) -> SejourResult<Money> {
    Money::parse(s).map_err(|e| SejourError::Validation(e.to_string()))
}

/// Parse a date argument (YYYY-MM-DD), defaulting to today when absent
pub(crate) fn parse_date(s: Option<&str>) -> SejourResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            SejourError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a period argument (YYYY-MM), defaulting to the current month
pub(crate) fn parse_period(s: Option<&str>) -> SejourResult<Period> {
    match s {
        Some(s) => Period::parse(s).map_err(|e| {
            SejourError::Validation(format!(
                "Invalid period format: {}. Use YYYY-MM (e.g., 2026-01)",
                e
            ))
        }),
        None => Ok(Period::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert!(parse_money("12.50").is_ok());
        assert!(parse_money("abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2026-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
        assert!(parse_date(Some("15/01/2026")).is_err());
        assert!(parse_date(None).is_ok());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period(Some("2026-01")).unwrap(),
            Period::new(2026, 1).unwrap()
        );
        assert!(parse_period(Some("January")).is_err());
    }
}
