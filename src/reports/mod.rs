//! Report generation
//!
//! All aggregation is pure and synchronous: reports take fully-materialized
//! record lists and return values, with `generate` constructors gathering
//! the lists from storage first.

pub mod categories;
pub mod comparison;
pub mod daily;
pub mod dashboard;

pub use categories::{category_breakdown, CategoryReport, CategorySlice, CATEGORY_PALETTE};
pub use comparison::{
    month_over_month, ComparisonReport, MonthlyComparison, PeriodSnapshot, SpendingTrend,
    Suggestion, SuggestionKind,
};
pub use daily::{daily_series, DailyEntry, DailyReport};
pub use dashboard::{period_totals, totals_for_period, DashboardReport, PeriodTotals};
