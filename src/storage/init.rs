//! First-run initialization
//!
//! Creates the data directory and writes empty collection files so later
//! loads have a consistent starting point.

use crate::config::paths::SejourPaths;
use crate::error::SejourError;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Creates directories and persists empty collections. Safe to call on an
/// already-initialized directory; existing data is left untouched.
pub fn initialize_storage(paths: &SejourPaths) -> Result<(), SejourError> {
    paths.ensure_directories()?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.save_all()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SejourPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.transactions_file().exists());
        assert!(paths.income_sources_file().exists());
        assert!(paths.subscriptions_file().exists());
        assert!(paths.shared_expenses_file().exists());
        assert!(paths.fund_file().exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SejourPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();
    }
}
