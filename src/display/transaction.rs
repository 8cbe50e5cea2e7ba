//! Table formatting for record listings

use crate::models::{IncomeSource, SharedExpense, Subscription, Transaction};

use super::report::truncate;

/// Format a list of transactions as a terminal table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<12} {:<8} {:<24} {:<16} {:>12}\n",
        "ID", "Date", "Type", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format!(
            "{:<12} {:<12} {:<8} {:<24} {:<16} {:>12}\n",
            txn.id.to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            truncate(&txn.description, 24),
            truncate(&txn.category, 16),
            txn.amount.to_string()
        ));
    }

    if transactions.is_empty() {
        output.push_str("(no transactions)\n");
    }

    output
}

/// Format a list of income sources as a terminal table
pub fn format_income_table(sources: &[IncomeSource]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<12} {:<24} {:<12} {:>12}\n",
        "ID", "Date", "Source", "Frequency", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for source in sources {
        output.push_str(&format!(
            "{:<12} {:<12} {:<24} {:<12} {:>12}\n",
            source.id.to_string(),
            source.date.to_string(),
            truncate(&source.source_name, 24),
            source.frequency.to_string(),
            source.amount.to_string()
        ));
    }

    if sources.is_empty() {
        output.push_str("(no income sources)\n");
    }

    output
}

/// Format a list of subscriptions as a terminal table
pub fn format_subscription_table(subscriptions: &[Subscription]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<20} {:<9} {:<12} {:>10} {:<8}\n",
        "ID", "Name", "Cycle", "Next due", "Amount", "Status"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for sub in subscriptions {
        let status = if !sub.active {
            "cancelled"
        } else if sub.is_paused {
            "paused"
        } else {
            "active"
        };

        output.push_str(&format!(
            "{:<12} {:<20} {:<9} {:<12} {:>10} {:<8}\n",
            sub.id.to_string(),
            truncate(&sub.name, 20),
            sub.billing_cycle.to_string(),
            sub.next_due_date.to_string(),
            sub.amount.to_string(),
            status
        ));
    }

    if subscriptions.is_empty() {
        output.push_str("(no subscriptions)\n");
    }

    output
}

/// Format a list of shared expenses as a terminal table
pub fn format_shared_expense_table(expenses: &[SharedExpense]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<12} {:<24} {:>10} {:>10} {:<8}\n",
        "ID", "Date", "Description", "Total", "Share", "Settled"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for exp in expenses {
        output.push_str(&format!(
            "{:<12} {:<12} {:<24} {:>10} {:>10} {:<8}\n",
            exp.id.to_string(),
            exp.date.to_string(),
            truncate(&exp.description, 24),
            exp.total_amount.to_string(),
            exp.your_share.to_string(),
            if exp.settled { "yes" } else { "no" }
        ));
    }

    if expenses.is_empty() {
        output.push_str("(no shared expenses)\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, Money, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_transaction_table_contains_fields() {
        let txn = Transaction::new(
            Money::from_cents(4500),
            "Groceries",
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            "EUR",
        );
        let table = format_transaction_table(&[txn]);

        assert!(table.contains("Groceries"));
        assert!(table.contains("Food"));
        assert!(table.contains("€45.00"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let table = format_transaction_table(&[]);
        assert!(table.contains("(no transactions)"));
    }

    #[test]
    fn test_subscription_status_column() {
        let mut sub = Subscription::new(
            "Netflix",
            Money::from_cents(1349),
            BillingCycle::Monthly,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        sub.pause();

        let table = format_subscription_table(&[sub]);
        assert!(table.contains("paused"));
    }
}
