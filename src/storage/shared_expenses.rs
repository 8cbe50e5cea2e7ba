//! Shared expense repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SejourError;
use crate::models::{Period, SharedExpense, SharedExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SharedExpenseData {
    #[serde(default)]
    shared_expenses: Vec<SharedExpense>,
}

pub struct SharedExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<SharedExpenseId, SharedExpense>>,
}

impl SharedExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), SejourError> {
        let file_data: SharedExpenseData = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for exp in file_data.shared_expenses {
            expenses.insert(exp.id, exp);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SejourError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        let file_data = SharedExpenseData {
            shared_expenses: list,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: SharedExpenseId) -> Result<Option<SharedExpense>, SejourError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<SharedExpense>, SejourError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(list)
    }

    /// All shared expenses dated inside the given calendar month
    pub fn get_by_period(&self, period: &Period) -> Result<Vec<SharedExpense>, SejourError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| period.contains(e.date))
            .collect())
    }

    /// Shared expenses not yet settled with the group
    pub fn get_unsettled(&self) -> Result<Vec<SharedExpense>, SejourError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| !e.settled)
            .collect())
    }

    pub fn upsert(&self, expense: SharedExpense) -> Result<(), SejourError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.insert(expense.id, expense);
        Ok(())
    }

    pub fn delete(&self, id: SharedExpenseId) -> Result<bool, SejourError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, SharedExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = SharedExpenseRepository::new(temp_dir.path().join("shared_expenses.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn expense(day: u32) -> SharedExpense {
        SharedExpense::new(
            "Groceries run",
            Money::from_cents(6000),
            Money::from_cents(2000),
            vec!["Anna".to_string()],
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_get_unsettled() {
        let (_tmp, repo) = repo();

        repo.upsert(expense(5)).unwrap();

        let mut settled = expense(10);
        settled.settle();
        repo.upsert(settled).unwrap();

        let unsettled = repo.get_unsettled().unwrap();
        assert_eq!(unsettled.len(), 1);
        assert!(!unsettled[0].settled);
    }

    #[test]
    fn test_get_by_period() {
        let (_tmp, repo) = repo();
        repo.upsert(expense(5)).unwrap();
        repo.upsert(expense(20)).unwrap();

        let january = Period::new(2026, 1).unwrap();
        assert_eq!(repo.get_by_period(&january).unwrap().len(), 2);

        let february = Period::new(2026, 2).unwrap();
        assert!(repo.get_by_period(&february).unwrap().is_empty());
    }
}
