//! Path management for Séjour
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SEJOUR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sejour` or `~/.config/sejour`
//! 3. Windows: `%APPDATA%\sejour`

use std::path::PathBuf;

use crate::error::SejourError;

/// Manages all paths used by Séjour
#[derive(Debug, Clone)]
pub struct SejourPaths {
    /// Base directory for all Séjour data
    base_dir: PathBuf,
}

impl SejourPaths {
    /// Create a new SejourPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SejourError> {
        let base_dir = if let Ok(custom) = std::env::var("SEJOUR_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SejourPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/sejour/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/sejour/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to income_sources.json
    pub fn income_sources_file(&self) -> PathBuf {
        self.data_dir().join("income_sources.json")
    }

    /// Get the path to subscriptions.json
    pub fn subscriptions_file(&self) -> PathBuf {
        self.data_dir().join("subscriptions.json")
    }

    /// Get the path to shared_expenses.json
    pub fn shared_expenses_file(&self) -> PathBuf {
        self.data_dir().join("shared_expenses.json")
    }

    /// Get the path to emergency_fund.json
    pub fn fund_file(&self) -> PathBuf {
        self.data_dir().join("emergency_fund.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SejourError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SejourError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SejourError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Séjour has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SejourError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("sejour"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SejourError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SejourError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sejour"))
}
