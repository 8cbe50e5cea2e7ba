//! Income source repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SejourError;
use crate::models::{IncomeSource, IncomeSourceId, Period};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    income_sources: Vec<IncomeSource>,
}

pub struct IncomeSourceRepository {
    path: PathBuf,
    sources: RwLock<HashMap<IncomeSourceId, IncomeSource>>,
}

impl IncomeSourceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sources: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), SejourError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut sources = self
            .sources
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.clear();
        for source in file_data.income_sources {
            sources.insert(source.id, source);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SejourError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = sources.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        let file_data = IncomeData {
            income_sources: list,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: IncomeSourceId) -> Result<Option<IncomeSource>, SejourError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(sources.get(&id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<IncomeSource>, SejourError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = sources.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(list)
    }

    /// All income sources dated inside the given calendar month
    pub fn get_by_period(&self, period: &Period) -> Result<Vec<IncomeSource>, SejourError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|s| period.contains(s.date))
            .collect())
    }

    pub fn upsert(&self, source: IncomeSource) -> Result<(), SejourError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.insert(source.id, source);
        Ok(())
    }

    pub fn delete(&self, id: IncomeSourceId) -> Result<bool, SejourError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(sources.remove(&id).is_some())
    }
}
