//! CSV export functionality
//!
//! Exports the raw record collections to CSV format.

use crate::error::{SejourError, SejourResult};
use crate::storage::Storage;
use std::io::Write;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> SejourResult<()> {
    writeln!(writer, "ID,Date,Type,Description,Category,Amount,Currency")
        .map_err(|e| SejourError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{}",
            txn.id,
            txn.date,
            txn.kind,
            escape_csv(&txn.description),
            escape_csv(&txn.category),
            txn.amount.cents() as f64 / 100.0,
            txn.currency
        )
        .map_err(|e| SejourError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all income sources to CSV
pub fn export_income_csv<W: Write>(storage: &Storage, writer: &mut W) -> SejourResult<()> {
    writeln!(writer, "ID,Date,Source,Frequency,Amount,Currency")
        .map_err(|e| SejourError::Export(e.to_string()))?;

    for source in storage.income_sources.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{:.2},{}",
            source.id,
            source.date,
            escape_csv(&source.source_name),
            source.frequency,
            source.amount.cents() as f64 / 100.0,
            source.currency
        )
        .map_err(|e| SejourError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all subscriptions to CSV
pub fn export_subscriptions_csv<W: Write>(storage: &Storage, writer: &mut W) -> SejourResult<()> {
    writeln!(
        writer,
        "ID,Name,Cycle,Start,Next Due,Amount,Active,Paused,Automatic"
    )
    .map_err(|e| SejourError::Export(e.to_string()))?;

    for sub in storage.subscriptions.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{},{},{}",
            sub.id,
            escape_csv(&sub.name),
            sub.billing_cycle,
            sub.start_date,
            sub.next_due_date,
            sub.amount.cents() as f64 / 100.0,
            sub.active,
            sub.is_paused,
            sub.is_automatic
        )
        .map_err(|e| SejourError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all shared expenses to CSV
pub fn export_shared_expenses_csv<W: Write>(
    storage: &Storage,
    writer: &mut W,
) -> SejourResult<()> {
    writeln!(
        writer,
        "ID,Date,Description,Total,Your Share,Participants,Settled"
    )
    .map_err(|e| SejourError::Export(e.to_string()))?;

    for exp in storage.shared_expenses.get_all()? {
        writeln!(
            writer,
            "{},{},{},{:.2},{:.2},{},{}",
            exp.id,
            exp.date,
            escape_csv(&exp.description),
            exp.total_amount.cents() as f64 / 100.0,
            exp.your_share.cents() as f64 / 100.0,
            escape_csv(&exp.participants.join("; ")),
            exp.settled
        )
        .map_err(|e| SejourError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field by quoting when needed
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
