//! Emergency fund repository for JSON storage
//!
//! The fund is a singleton: at most one record per data directory.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SejourError;
use crate::models::EmergencyFund;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct FundData {
    #[serde(default)]
    fund: Option<EmergencyFund>,
}

pub struct FundRepository {
    path: PathBuf,
    fund: RwLock<Option<EmergencyFund>>,
}

impl FundRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            fund: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), SejourError> {
        let file_data: FundData = read_json(&self.path)?;

        let mut fund = self
            .fund
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *fund = file_data.fund;
        Ok(())
    }

    pub fn save(&self) -> Result<(), SejourError> {
        let fund = self
            .fund
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = FundData { fund: fund.clone() };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self) -> Result<Option<EmergencyFund>, SejourError> {
        let fund = self
            .fund
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(fund.clone())
    }

    pub fn set(&self, new_fund: EmergencyFund) -> Result<(), SejourError> {
        let mut fund = self
            .fund
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *fund = Some(new_fund);
        Ok(())
    }
}
