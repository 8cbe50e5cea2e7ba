//! Month-over-month comparison
//!
//! Compares a month's totals against the previous month and classifies the
//! spending trend, with a rule-based suggestion picked from a fixed
//! priority ladder.

use std::io::Write;

use crate::error::SejourResult;
use crate::models::{Money, Period};
use crate::storage::Storage;

use super::dashboard::{totals_for_period, PeriodTotals};

/// Expense change above this percentage reads as an upward trend
const TREND_UP_THRESHOLD: f64 = 5.0;
/// Expense change below this percentage reads as a downward trend
const TREND_DOWN_THRESHOLD: f64 = -5.0;

/// Balance above this qualifies for the surplus suggestion
const SURPLUS_THRESHOLD: Money = Money::from_cents(30_000);

/// Income/expense/balance snapshot of one month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSnapshot {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl From<&PeriodTotals> for PeriodSnapshot {
    fn from(totals: &PeriodTotals) -> Self {
        Self {
            income: totals.income,
            expenses: totals.expenses,
            balance: totals.balance,
        }
    }
}

/// Direction of spending relative to the previous month.
///
/// Classified from the expense change alone; income movement is reported
/// but never drives the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingTrend {
    Up,
    Down,
    Same,
}

impl std::fmt::Display for SpendingTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Same => write!(f, "same"),
        }
    }
}

/// Which rule produced the suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    HighSpendingAlert,
    Caution,
    SavingsSuccess,
    SurplusOpportunity,
    Balanced,
    DeficitWarning,
}

/// A rule-based piece of advice with fixed tips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub headline: &'static str,
    pub tips: &'static [&'static str],
}

const HIGH_SPENDING: Suggestion = Suggestion {
    kind: SuggestionKind::HighSpendingAlert,
    headline: "Spending is up sharply compared to last month",
    tips: &[
        "Go through this month's biggest categories and find the outliers",
        "Pause subscriptions you are not using right now",
        "Set a weekly spending cap for the rest of the month",
    ],
};

const CAUTION: Suggestion = Suggestion {
    kind: SuggestionKind::Caution,
    headline: "Spending is trending up",
    tips: &[
        "Compare this month's category breakdown with last month's",
        "Plan meals ahead to keep food costs steady",
    ],
};

const SAVINGS_SUCCESS: Suggestion = Suggestion {
    kind: SuggestionKind::SavingsSuccess,
    headline: "Nice work, you spent noticeably less than last month",
    tips: &[
        "Move the difference into your emergency fund",
        "Keep the habits that made the difference this month",
    ],
};

const SURPLUS_OPPORTUNITY: Suggestion = Suggestion {
    kind: SuggestionKind::SurplusOpportunity,
    headline: "You have a comfortable surplus this month",
    tips: &[
        "Top up your emergency fund while you are ahead",
        "Set aside money for the next semester's fees or deposits",
    ],
};

const BALANCED: Suggestion = Suggestion {
    kind: SuggestionKind::Balanced,
    headline: "Income and spending are roughly in balance",
    tips: &[
        "A small buffer each month adds up; try rounding expenses up",
        "Check whether any aid or grants you qualify for are unclaimed",
    ],
};

const DEFICIT_WARNING: Suggestion = Suggestion {
    kind: SuggestionKind::DeficitWarning,
    headline: "You spent more than you earned this month",
    tips: &[
        "List the expenses you could drop next month",
        "Check your unsettled shared expenses and collect what you are owed",
        "Avoid dipping into the emergency fund for everyday costs",
    ],
};

/// Full month-over-month comparison result
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyComparison {
    pub current: PeriodSnapshot,
    pub previous: PeriodSnapshot,
    /// Percent change in expenses against the previous month; 0 when the
    /// previous month had none
    pub expense_change: f64,
    /// Percent change in income against the previous month; 0 when the
    /// previous month had none
    pub income_change: f64,
    pub trend: SpendingTrend,
    pub suggestion: Suggestion,
}

/// Percent change from `previous` to `current`, zero-guarded
fn percent_change(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        0.0
    } else {
        (current.cents() - previous.cents()) as f64 / previous.cents() as f64 * 100.0
    }
}

/// First matching branch wins; the order is part of the contract
fn suggest(expense_change: f64, balance: Money) -> Suggestion {
    if expense_change > 20.0 {
        HIGH_SPENDING
    } else if expense_change > 10.0 {
        CAUTION
    } else if expense_change < -10.0 {
        SAVINGS_SUCCESS
    } else if balance > SURPLUS_THRESHOLD {
        SURPLUS_OPPORTUNITY
    } else if balance.is_positive() {
        BALANCED
    } else {
        DEFICIT_WARNING
    }
}

/// Compare two month snapshots
pub fn month_over_month(
    current: PeriodSnapshot,
    previous: PeriodSnapshot,
) -> MonthlyComparison {
    let expense_change = percent_change(current.expenses, previous.expenses);
    let income_change = percent_change(current.income, previous.income);

    let trend = if expense_change > TREND_UP_THRESHOLD {
        SpendingTrend::Up
    } else if expense_change < TREND_DOWN_THRESHOLD {
        SpendingTrend::Down
    } else {
        SpendingTrend::Same
    };

    let suggestion = suggest(expense_change, current.balance);

    MonthlyComparison {
        current,
        previous,
        expense_change,
        income_change,
        trend,
        suggestion,
    }
}

/// Month-over-month report
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub period: Period,
    pub previous_period: Period,
    pub comparison: MonthlyComparison,
}

impl ComparisonReport {
    /// Generate the comparison for a period against the month before it
    pub fn generate(storage: &Storage, period: &Period) -> SejourResult<Self> {
        let previous_period = period.prev();

        let current = totals_for_period(storage, period)?;
        let previous = totals_for_period(storage, &previous_period)?;

        Ok(Self {
            period: *period,
            previous_period,
            comparison: month_over_month((&current).into(), (&previous).into()),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let cmp = &self.comparison;
        let mut output = String::new();

        output.push_str(&format!(
            "Month over month: {} vs {}\n",
            self.period, self.previous_period
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            "", self.period.to_string(), self.previous_period.to_string()
        ));
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            "Income",
            cmp.current.income.to_string(),
            cmp.previous.income.to_string()
        ));
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            "Expenses",
            cmp.current.expenses.to_string(),
            cmp.previous.expenses.to_string()
        ));
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            "Balance",
            cmp.current.balance.to_string(),
            cmp.previous.balance.to_string()
        ));
        output.push('\n');
        output.push_str(&format!(
            "Expense change: {:+.1}%   Income change: {:+.1}%   Trend: {}\n",
            cmp.expense_change, cmp.income_change, cmp.trend
        ));
        output.push('\n');
        output.push_str(&format!("{}\n", cmp.suggestion.headline));
        for tip in cmp.suggestion.tips {
            output.push_str(&format!("  - {}\n", tip));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SejourResult<()> {
        let cmp = &self.comparison;

        writeln!(
            writer,
            "Period,Income,Expenses,Balance,Expense Change,Income Change,Trend"
        )
        .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            self.period,
            cmp.current.income.cents() as f64 / 100.0,
            cmp.current.expenses.cents() as f64 / 100.0,
            cmp.current.balance.cents() as f64 / 100.0,
            cmp.expense_change,
            cmp.income_change,
            cmp.trend
        )
        .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},,,",
            self.previous_period,
            cmp.previous.income.cents() as f64 / 100.0,
            cmp.previous.expenses.cents() as f64 / 100.0,
            cmp.previous.balance.cents() as f64 / 100.0,
        )
        .map_err(|e| crate::error::SejourError::Export(e.to_string()))?;

        Ok(())
    }
}
