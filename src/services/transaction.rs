//! Transaction service
//!
//! Business logic for creating, updating, and deleting transactions.
//! Validation happens here, before anything reaches the aggregation layer.

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{Money, Period, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new transaction
    pub fn add(
        &self,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
        currency: impl Into<String>,
    ) -> SejourResult<Transaction> {
        let txn = Transaction::new(amount, description, category, kind, date, currency);

        txn.validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Patch individual fields of an existing transaction
    pub fn update(
        &self,
        id: TransactionId,
        amount: Option<Money>,
        description: Option<String>,
        category: Option<String>,
        date: Option<NaiveDate>,
    ) -> SejourResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| SejourError::transaction_not_found(id.to_string()))?;

        if let Some(amount) = amount {
            txn.set_amount(amount);
        }
        if let Some(description) = description {
            txn.set_description(description);
        }
        if let Some(category) = category {
            txn.set_category(category);
        }
        if let Some(date) = date {
            txn.set_date(date);
        }

        txn.validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Delete a transaction by id
    pub fn delete(&self, id: TransactionId) -> SejourResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(SejourError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;
        Ok(())
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> SejourResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| SejourError::transaction_not_found(id.to_string()))
    }

    /// List all transactions
    pub fn list(&self) -> SejourResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// List transactions for a calendar month
    pub fn list_for_period(&self, period: &Period) -> SejourResult<Vec<Transaction>> {
        self.storage.transactions.get_by_period(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SejourPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SejourPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(
                Money::from_cents(4500),
                "Groceries",
                "Food",
                TransactionKind::Expense,
                ymd(2026, 1, 10),
                "EUR",
            )
            .unwrap();

        assert_eq!(service.get(txn.id).unwrap().description, "Groceries");
    }

    #[test]
    fn test_add_rejects_zero_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.add(
            Money::zero(),
            "Nothing",
            "Misc",
            TransactionKind::Expense,
            ymd(2026, 1, 10),
            "EUR",
        );
        assert!(matches!(result, Err(SejourError::Validation(_))));
    }

    #[test]
    fn test_update_patches_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(
                Money::from_cents(4500),
                "Groceries",
                "Food",
                TransactionKind::Expense,
                ymd(2026, 1, 10),
                "EUR",
            )
            .unwrap();

        let updated = service
            .update(
                txn.id,
                Some(Money::from_cents(5000)),
                None,
                Some("Supermarket".to_string()),
                None,
            )
            .unwrap();

        assert_eq!(updated.amount.cents(), 5000);
        assert_eq!(updated.category, "Supermarket");
        // Untouched fields survive the patch
        assert_eq!(updated.description, "Groceries");
    }

    #[test]
    fn test_update_validates_result() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(
                Money::from_cents(4500),
                "Groceries",
                "Food",
                TransactionKind::Expense,
                ymd(2026, 1, 10),
                "EUR",
            )
            .unwrap();

        let result = service.update(txn.id, Some(Money::zero()), None, None, None);
        assert!(matches!(result, Err(SejourError::Validation(_))));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(
                Money::from_cents(4500),
                "Groceries",
                "Food",
                TransactionKind::Expense,
                ymd(2026, 1, 10),
                "EUR",
            )
            .unwrap();

        service.delete(txn.id).unwrap();
        assert!(service.get(txn.id).is_err());

        // Deleting again reports not found
        assert!(service.delete(txn.id).is_err());
    }

    #[test]
    fn test_list_for_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for (month, day) in [(1, 5), (1, 20), (2, 3)] {
            service
                .add(
                    Money::from_cents(1000),
                    "Item",
                    "Misc",
                    TransactionKind::Expense,
                    ymd(2026, month, day),
                    "EUR",
                )
                .unwrap();
        }

        let january = Period::new(2026, 1).unwrap();
        assert_eq!(service.list_for_period(&january).unwrap().len(), 2);
    }
}
