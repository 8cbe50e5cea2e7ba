//! Category breakdown report
//!
//! Expense spending grouped by category label, sorted by amount, truncated
//! to the top 8, with a chart color assigned per rank.

use std::collections::HashMap;
use std::io::Write;

use crate::error::SejourResult;
use crate::models::{Money, Period, Transaction};
use crate::storage::Storage;

/// Fixed chart palette; colors cycle by rank index
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// At most this many categories are reported
pub const MAX_CATEGORIES: usize = 8;

/// One category's share of the month's spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Category label, exactly as entered (case-sensitive)
    pub category: String,
    pub amount: Money,
    /// Share of all expense spending, before truncation to the top 8
    pub percentage: f64,
    /// Palette color for charts, assigned by rank
    pub color: &'static str,
}

/// Group expense transactions by category.
///
/// Categories are compared as exact strings. The result is sorted by amount
/// descending (ties keep first-encounter order), truncated to
/// [`MAX_CATEGORIES`], and colored by rank. Empty input yields an empty
/// breakdown.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    // Preserve first-encounter order so ties sort deterministically
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Money> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        if !sums.contains_key(&txn.category) {
            order.push(txn.category.clone());
        }
        *sums.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
    }

    let total: Money = sums.values().copied().sum();

    let mut slices: Vec<(String, Money)> = order
        .into_iter()
        .map(|category| {
            let amount = sums[&category];
            (category, amount)
        })
        .collect();

    // Stable sort keeps encounter order for equal amounts
    slices.sort_by(|a, b| b.1.cmp(&a.1));

    slices
        .into_iter()
        .take(MAX_CATEGORIES)
        .enumerate()
        .map(|(rank, (category, amount))| {
            let percentage = if total.is_zero() {
                0.0
            } else {
                amount.cents() as f64 / total.cents() as f64 * 100.0
            };
            CategorySlice {
                category,
                amount,
                percentage,
                color: CATEGORY_PALETTE[rank % CATEGORY_PALETTE.len()],
            }
        })
        .collect()
}

/// Category breakdown report for one month
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub period: Period,
    pub slices: Vec<CategorySlice>,
    pub total_expenses: Money,
}

impl CategoryReport {
    /// Generate the breakdown for a period
    pub fn generate(storage: &Storage, period: &Period) -> SejourResult<Self> {
        let transactions = storage.transactions.get_by_period(period)?;
        let slices = category_breakdown(&transactions);
        let total_expenses = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Ok(Self {
            period: *period,
            slices,
            total_expenses,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by category: {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.slices.is_empty() {
            output.push_str("No expenses recorded for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>12} {:>8}\n",
            "Category", "Amount", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<28} {:>12} {:>7.1}%\n",
                slice.category, slice.amount, slice.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12}\n",
            "Total expenses", self.total_expenses
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SejourResult<()> {
        writeln!(writer, "Period,Category,Amount,Percentage,Color")
            .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        for slice in &self.slices {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{}",
                self.period,
                escape_csv(&slice.category),
                slice.amount.cents() as f64 / 100.0,
                slice.percentage,
                slice.color
            )
            .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

/// Quote a CSV field if it contains a delimiter or quote
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
