//! YAML export functionality

use std::io::Write;

use crate::error::{SejourError, SejourResult};
use crate::storage::Storage;

use super::json::DataSnapshot;

/// Export all data to YAML
pub fn export_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SejourResult<()> {
    let snapshot = DataSnapshot::collect(storage)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| SejourError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SejourPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml() {
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
        export_yaml(&storage, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("transactions:"));
        assert!(out.contains("Coffee"));
    }
}
