//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::reports::SpendingTrend;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format a signed percentage change ("+12.5%", "-3.0%")
pub fn format_change(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

/// Arrow glyph for a spending trend
pub fn trend_arrow(trend: SpendingTrend) -> &'static str {
    match trend {
        SpendingTrend::Up => "↑",
        SpendingTrend::Down => "↓",
        SpendingTrend::Same => "→",
    }
}

/// Render a progress bar, filled proportionally to `pct` (0-100)
pub fn progress_bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
