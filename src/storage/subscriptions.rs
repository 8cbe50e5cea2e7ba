//! Subscription repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SejourError;
use crate::models::{Subscription, SubscriptionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SubscriptionData {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
}

pub struct SubscriptionRepository {
    path: PathBuf,
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
}

impl SubscriptionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            subscriptions: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), SejourError> {
        let file_data: SubscriptionData = read_json(&self.path)?;

        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        subscriptions.clear();
        for sub in file_data.subscriptions {
            subscriptions.insert(sub.id, sub);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SejourError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = subscriptions.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = SubscriptionData {
            subscriptions: list,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: SubscriptionId) -> Result<Option<Subscription>, SejourError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(subscriptions.get(&id).cloned())
    }

    /// Find a subscription by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Subscription>, SejourError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(subscriptions.values().find(|s| s.name == name).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<Subscription>, SejourError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = subscriptions.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Active, unpaused subscriptions (the ones that count toward expenses)
    pub fn get_billable(&self) -> Result<Vec<Subscription>, SejourError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|s| s.is_billable())
            .collect())
    }

    pub fn upsert(&self, subscription: Subscription) -> Result<(), SejourError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        subscriptions.insert(subscription.id, subscription);
        Ok(())
    }

    pub fn delete(&self, id: SubscriptionId) -> Result<bool, SejourError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|e| SejourError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(subscriptions.remove(&id).is_some())
    }
}
