//! JSON export functionality
//!
//! Exports a complete snapshot of all collections as one JSON document.

use serde::Serialize;
use std::io::Write;

use crate::error::{SejourError, SejourResult};
use crate::models::{EmergencyFund, IncomeSource, SharedExpense, Subscription, Transaction};
use crate::storage::Storage;

/// Complete data snapshot for export
#[derive(Debug, Serialize)]
pub struct DataSnapshot {
    pub transactions: Vec<Transaction>,
    pub income_sources: Vec<IncomeSource>,
    pub subscriptions: Vec<Subscription>,
    pub shared_expenses: Vec<SharedExpense>,
    pub emergency_fund: Option<EmergencyFund>,
}

impl DataSnapshot {
    /// Collect everything currently in storage
    pub fn collect(storage: &Storage) -> SejourResult<Self> {
        Ok(Self {
            transactions: storage.transactions.get_all()?,
            income_sources: storage.income_sources.get_all()?,
            subscriptions: storage.subscriptions.get_all()?,
            shared_expenses: storage.shared_expenses.get_all()?,
            emergency_fund: storage.fund.get()?,
        })
    }
}

/// Export all data to pretty-printed JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W) -> SejourResult<()> {
    let snapshot = DataSnapshot::collect(storage)?;

    serde_json::to_writer_pretty(writer, &snapshot)
        .map_err(|e| SejourError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SejourPaths;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_json_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SejourPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                Money::from_cents(1000),
                "Coffee",
                "Food",
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
                "EUR",
            ))
            .unwrap();

        let mut buf = Vec::new();
        export_json(&storage, &mut buf).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["transactions"].as_array().unwrap().len(), 1);
        assert!(parsed["emergency_fund"].is_null());
    }
}
