//! Transaction repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SejourError;
use crate::models::{Period, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

pub struct TransactionRepository {
    path: PathBuf,
    transactions: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), SejourError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.clear();
        for txn in file_data.transactions {
            transactions.insert(txn.id, txn);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SejourError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        let file_data = TransactionData { transactions: list };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SejourError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.get(&id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<Transaction>, SejourError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(list)
    }

    /// All transactions dated inside the given calendar month
    pub fn get_by_period(&self, period: &Period) -> Result<Vec<Transaction>, SejourError> {
        let mut list: Vec<_> = self
            .get_all()?
            .into_iter()
            .filter(|t| period.contains(t.date))
            .collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(list)
    }

    pub fn upsert(&self, transaction: Transaction) -> Result<(), SejourError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.insert(transaction.id, transaction);
        Ok(())
    }

    pub fn delete(&self, id: TransactionId) -> Result<bool, SejourError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(transactions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn txn(day: u32, month: u32) -> Transaction {
        Transaction::new(
            Money::from_cents(1000),
            "Groceries",
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
            "EUR",
        )
    }

    #[test]
    fn test_upsert_and_get() {
        let (_tmp, repo) = repo();
        let t = txn(5, 1);
        repo.upsert(t.clone()).unwrap();

        let loaded = repo.get(t.id).unwrap().unwrap();
        assert_eq!(loaded.description, "Groceries");
    }

    #[test]
    fn test_get_by_period() {
        let (_tmp, repo) = repo();
        repo.upsert(txn(5, 1)).unwrap();
        repo.upsert(txn(20, 1)).unwrap();
        repo.upsert(txn(3, 2)).unwrap();

        let january = Period::new(2026, 1).unwrap();
        assert_eq!(repo.get_by_period(&january).unwrap().len(), 2);

        let february = Period::new(2026, 2).unwrap();
        assert_eq!(repo.get_by_period(&february).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (_tmp, repo) = repo();
        let t = txn(5, 1);
        repo.upsert(t.clone()).unwrap();
        repo.save().unwrap();

        // Fresh repository over the same file
        let repo2 = TransactionRepository::new(repo.path.clone());
        repo2.load().unwrap();
        assert!(repo2.get(t.id).unwrap().is_some());
    }

    #[test]
    fn test_delete() {
        let (_tmp, repo) = repo();
        let t = txn(5, 1);
        repo.upsert(t.clone()).unwrap();

        assert!(repo.delete(t.id).unwrap());
        assert!(!repo.delete(t.id).unwrap());
        assert!(repo.get(t.id).unwrap().is_none());
    }
}
