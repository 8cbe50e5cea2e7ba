//! Daily cash-flow series
//!
//! One entry per calendar day of the month, income and expenses summed per
//! day, zero-filled for quiet days. Days are never skipped or merged.

use std::io::Write;

use chrono::Datelike;

use crate::error::SejourResult;
use crate::models::{Money, Period, Transaction};
use crate::storage::Storage;

/// Income and expense totals for a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    /// Zero-padded day of month ("01" through "31")
    pub day: String,
    pub income: Money,
    pub expenses: Money,
}

/// Build the day-by-day series for a month.
///
/// The result always has exactly `period.days_in_month()` entries.
/// Transactions dated outside the period are ignored.
pub fn daily_series(transactions: &[Transaction], period: &Period) -> Vec<DailyEntry> {
    let days = period.days_in_month();

    let mut entries: Vec<DailyEntry> = (1..=days)
        .map(|day| DailyEntry {
            day: format!("{:02}", day),
            income: Money::zero(),
            expenses: Money::zero(),
        })
        .collect();

    for txn in transactions.iter().filter(|t| period.contains(t.date)) {
        let index = (txn.date.day() - 1) as usize;
        if txn.is_income() {
            entries[index].income += txn.amount;
        } else {
            entries[index].expenses += txn.amount;
        }
    }

    entries
}

/// Daily series report for one month
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub period: Period,
    pub entries: Vec<DailyEntry>,
}

impl DailyReport {
    /// Generate the daily series for a period
    pub fn generate(storage: &Storage, period: &Period) -> SejourResult<Self> {
        let transactions = storage.transactions.get_by_period(period)?;
        Ok(Self {
            period: *period,
            entries: daily_series(&transactions, period),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Daily cash flow: {}\n", self.period));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>14} {:>14}\n",
            "Day", "Income", "Expenses"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for entry in &self.entries {
            // Quiet days print as blanks to keep the busy days readable
            if entry.income.is_zero() && entry.expenses.is_zero() {
                output.push_str(&format!("{:<6} {:>14} {:>14}\n", entry.day, "-", "-"));
            } else {
                output.push_str(&format!(
                    "{:<6} {:>14} {:>14}\n",
                    entry.day,
                    entry.income.to_string(),
                    entry.expenses.to_string()
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SejourResult<()> {
        writeln!(writer, "Period,Day,Income,Expenses")
            .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{},{:.2},{:.2}",
                self.period,
                entry.day,
                entry.income.cents() as f64 / 100.0,
                entry.expenses.cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(day: u32, amount: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            Money::from_cents(amount),
            "entry",
            "General",
            kind,
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            "EUR",
        )
    }

    #[test]
    fn test_exact_day_counts() {
        let january = Period::new(2026, 1).unwrap();
        assert_eq!(daily_series(&[], &january).len(), 31);

        let feb_non_leap = Period::new(2026, 2).unwrap();
        assert_eq!(daily_series(&[], &feb_non_leap).len(), 28);

        let feb_leap = Period::new(2024, 2).unwrap();
        assert_eq!(daily_series(&[], &feb_leap).len(), 29);

        let april = Period::new(2026, 4).unwrap();
        assert_eq!(daily_series(&[], &april).len(), 30);
    }

    #[test]
    fn test_days_are_zero_padded_and_contiguous() {
        let january = Period::new(2026, 1).unwrap();
        let series = daily_series(&[], &january);

        assert_eq!(series[0].day, "01");
        assert_eq!(series[8].day, "09");
        assert_eq!(series[30].day, "31");
    }

    #[test]
    fn test_quiet_days_default_to_zero() {
        let january = Period::new(2026, 1).unwrap();
        let txns = vec![txn(15, 5000, TransactionKind::Expense)];
        let series = daily_series(&txns, &january);

        assert!(series[0].income.is_zero());
        assert!(series[0].expenses.is_zero());
        assert_eq!(series[14].expenses.cents(), 5000);
    }

    #[test]
    fn test_same_day_amounts_accumulate() {
        let january = Period::new(2026, 1).unwrap();
        let txns = vec![
            txn(10, 1000, TransactionKind::Expense),
            txn(10, 2000, TransactionKind::Expense),
            txn(10, 50000, TransactionKind::Income),
        ];
        let series = daily_series(&txns, &january);

        assert_eq!(series[9].expenses.cents(), 3000);
        assert_eq!(series[9].income.cents(), 50000);
    }

    #[test]
    fn test_out_of_period_transactions_ignored() {
        let february = Period::new(2026, 2).unwrap();
        let txns = vec![txn(15, 5000, TransactionKind::Expense)]; // dated January
        let series = daily_series(&txns, &february);

        assert!(series.iter().all(|e| e.expenses.is_zero()));
    }
}
