//! Dashboard report
//!
//! Monthly totals: income, expenses, net balance, and savings rate, plus
//! emergency fund progress. The aggregation itself is a pure function over
//! in-memory slices; `generate` only gathers the record lists and hands
//! them over.

use std::io::Write;

use crate::error::SejourResult;
use crate::models::{EmergencyFund, IncomeSource, Money, Period, SharedExpense, Subscription, Transaction};
use crate::storage::Storage;

/// Aggregated totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotals {
    /// Income transactions plus income sources dated in the period
    pub income: Money,
    /// Expense transactions, billable subscriptions, and shared-expense shares
    pub expenses: Money,
    /// income − expenses (may be negative)
    pub balance: Money,
    /// balance / income × 100; exactly 0 when there is no income
    pub savings_rate: f64,
}

/// Compute the period totals from fully-materialized record lists.
///
/// Transactions, income sources, and shared expenses must already be
/// filtered to the target period by the caller. Subscriptions are filtered
/// here instead, on `active && !is_paused`: a billable subscription counts
/// its full cycle amount toward every period, wherever its due date falls.
pub fn period_totals(
    transactions: &[Transaction],
    income_sources: &[IncomeSource],
    subscriptions: &[Subscription],
    shared_expenses: &[SharedExpense],
) -> PeriodTotals {
    let transaction_income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let source_income: Money = income_sources.iter().map(|s| s.amount).sum();

    let transaction_expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let subscription_expenses: Money = subscriptions
        .iter()
        .filter(|s| s.is_billable())
        .map(|s| s.amount)
        .sum();

    let shared_expense_total: Money = shared_expenses.iter().map(|e| e.your_share).sum();

    let income = transaction_income + source_income;
    let expenses = transaction_expenses + subscription_expenses + shared_expense_total;
    let balance = income - expenses;

    let savings_rate = if income.is_zero() {
        0.0
    } else {
        balance.cents() as f64 / income.cents() as f64 * 100.0
    };

    PeriodTotals {
        income,
        expenses,
        balance,
        savings_rate,
    }
}

/// Gather the month's records from storage and compute its totals
pub fn totals_for_period(storage: &Storage, period: &Period) -> SejourResult<PeriodTotals> {
    let transactions = storage.transactions.get_by_period(period)?;
    let income_sources = storage.income_sources.get_by_period(period)?;
    let subscriptions = storage.subscriptions.get_all()?;
    let shared_expenses = storage.shared_expenses.get_by_period(period)?;

    Ok(period_totals(
        &transactions,
        &income_sources,
        &subscriptions,
        &shared_expenses,
    ))
}

/// Dashboard report for one month
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub period: Period,
    pub totals: PeriodTotals,
    pub transaction_count: usize,
    pub fund: Option<EmergencyFund>,
}

impl DashboardReport {
    /// Generate the dashboard for a period
    pub fn generate(storage: &Storage, period: &Period) -> SejourResult<Self> {
        let transactions = storage.transactions.get_by_period(period)?;
        let income_sources = storage.income_sources.get_by_period(period)?;
        let subscriptions = storage.subscriptions.get_all()?;
        let shared_expenses = storage.shared_expenses.get_by_period(period)?;

        let totals = period_totals(
            &transactions,
            &income_sources,
            &subscriptions,
            &shared_expenses,
        );

        Ok(Self {
            period: *period,
            totals,
            transaction_count: transactions.len(),
            fund: storage.fund.get()?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Income:", self.totals.income));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Expenses:", self.totals.expenses
        ));
        output.push_str(&format!("{:<20} {:>14}\n", "Balance:", self.totals.balance));
        output.push_str(&format!(
            "{:<20} {:>13.1}%\n",
            "Savings rate:", self.totals.savings_rate
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Transactions:", self.transaction_count
        ));

        if let Some(fund) = &self.fund {
            output.push('\n');
            output.push_str("Emergency fund\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>14}\n",
                "Saved:", fund.current_amount
            ));
            output.push_str(&format!("{:<20} {:>14}\n", "Target:", fund.target_amount));
            output.push_str(&format!(
                "{:<20} {:>13.1}%\n",
                "Progress:",
                fund.progress_percentage()
            ));
            if fund.is_fully_funded() {
                output.push_str("Fully funded!\n");
            } else {
                output.push_str(&format!(
                    "{:<20} {:>14}\n",
                    "Remaining:",
                    fund.remaining()
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SejourResult<()> {
        writeln!(
            writer,
            "Period,Income,Expenses,Balance,Savings Rate,Transactions"
        )
        .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},{:.2},{}",
            self.period,
            self.totals.income.cents() as f64 / 100.0,
            self.totals.expenses.cents() as f64 / 100.0,
            self.totals.balance.cents() as f64 / 100.0,
            self.totals.savings_rate,
            self.transaction_count
        )
        .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, Frequency, TransactionKind};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(amount: i64, kind: TransactionKind, desc: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(amount),
            desc,
            "General",
            kind,
            ymd(2026, 1, 10),
            "EUR",
        )
    }

    #[test]
    fn test_totals_match_manual_sums() {
        let transactions = vec![
            txn(50000, TransactionKind::Income, "Salary"),
            txn(12000, TransactionKind::Expense, "Groceries"),
            txn(3000, TransactionKind::Expense, "Coffee"),
        ];
        let income_sources = vec![IncomeSource::new(
            "CAF",
            Money::from_cents(20000),
            Frequency::Monthly,
            ymd(2026, 1, 5),
            "EUR",
        )];

        let totals = period_totals(&transactions, &income_sources, &[], &[]);
        assert_eq!(totals.income.cents(), 70000);
        assert_eq!(totals.expenses.cents(), 15000);
        assert_eq!(totals.balance.cents(), 55000);
    }

    #[test]
    fn test_savings_rate_zero_when_no_income() {
        let transactions = vec![txn(99900, TransactionKind::Expense, "Rent")];
        let totals = period_totals(&transactions, &[], &[], &[]);

        assert!(totals.income.is_zero());
        assert_eq!(totals.savings_rate, 0.0);
        assert!(totals.savings_rate.is_finite());
    }

    #[test]
    fn test_paused_and_cancelled_subscriptions_excluded() {
        let active = Subscription::new(
            "Netflix",
            Money::from_cents(1000),
            BillingCycle::Monthly,
            ymd(2026, 1, 1),
        );

        let mut paused = active.clone();
        paused.pause();

        let mut cancelled = active.clone();
        cancelled.cancel();

        let totals = period_totals(&[], &[], &[active, paused, cancelled], &[]);
        assert_eq!(totals.expenses.cents(), 1000);
    }

    #[test]
    fn test_subscription_counts_regardless_of_due_date() {
        // Due date far outside any period still bills the full cycle amount
        let mut sub = Subscription::new(
            "Gym",
            Money::from_cents(2500),
            BillingCycle::Yearly,
            ymd(2024, 6, 1),
        );
        sub.next_due_date = ymd(2027, 6, 1);

        let totals = period_totals(&[], &[], &[sub], &[]);
        assert_eq!(totals.expenses.cents(), 2500);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Rent 600 out, salary 800 in, one 10 subscription, one 25 share
        let transactions = vec![
            txn(60000, TransactionKind::Expense, "Rent"),
            txn(80000, TransactionKind::Income, "Salary"),
        ];
        let subscriptions = vec![Subscription::new(
            "Streaming",
            Money::from_cents(1000),
            BillingCycle::Monthly,
            ymd(2026, 1, 1),
        )];
        let shared = vec![SharedExpense::new(
            "Utilities",
            Money::from_cents(7500),
            Money::from_cents(2500),
            vec!["Léa".to_string(), "Tom".to_string()],
            ymd(2026, 1, 15),
        )];

        let totals = period_totals(&transactions, &[], &subscriptions, &shared);
        assert_eq!(totals.income.cents(), 80000);
        assert_eq!(totals.expenses.cents(), 63500);
        assert_eq!(totals.balance.cents(), 16500);
        assert!((totals.savings_rate - 20.625).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let transactions = vec![
            txn(80000, TransactionKind::Income, "Salary"),
            txn(60000, TransactionKind::Expense, "Rent"),
        ];

        let a = period_totals(&transactions, &[], &[], &[]);
        let b = period_totals(&transactions, &[], &[], &[]);
        assert_eq!(a, b);
    }
}
