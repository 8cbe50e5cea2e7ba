//! Subscription service
//!
//! Business logic for managing subscriptions, including recording payments
//! that advance the due-date cursor.

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{BillingCycle, Money, Subscription, SubscriptionId};
use crate::storage::Storage;

/// Service for subscription management
pub struct SubscriptionService<'a> {
    storage: &'a Storage,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new subscription service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new subscription
    pub fn add(
        &self,
        name: impl Into<String>,
        amount: Money,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
        is_automatic: bool,
    ) -> SejourResult<Subscription> {
        let name = name.into();

        if self.storage.subscriptions.get_by_name(&name)?.is_some() {
            return Err(SejourError::Duplicate {
                entity_type: "Subscription",
                identifier: name,
            });
        }

        let mut sub = Subscription::new(name, amount, billing_cycle, start_date);
        sub.is_automatic = is_automatic;

        sub.validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.subscriptions.upsert(sub.clone())?;
        self.storage.subscriptions.save()?;

        Ok(sub)
    }

    /// Record a payment, advancing the due date by one billing cycle.
    ///
    /// Returns the new due date. The due date never moves backward.
    pub fn record_payment(&self, id: SubscriptionId) -> SejourResult<NaiveDate> {
        let mut sub = self.require(id)?;

        let next = sub.record_payment();

        self.storage.subscriptions.upsert(sub)?;
        self.storage.subscriptions.save()?;

        Ok(next)
    }

    /// Pause a subscription (excluded from totals until resumed)
    pub fn pause(&self, id: SubscriptionId) -> SejourResult<Subscription> {
        let mut sub = self.require(id)?;
        sub.pause();
        self.storage.subscriptions.upsert(sub.clone())?;
        self.storage.subscriptions.save()?;
        Ok(sub)
    }

    /// Resume a paused subscription
    pub fn resume(&self, id: SubscriptionId) -> SejourResult<Subscription> {
        let mut sub = self.require(id)?;
        sub.resume();
        self.storage.subscriptions.upsert(sub.clone())?;
        self.storage.subscriptions.save()?;
        Ok(sub)
    }

    /// Cancel a subscription (kept on file, never billed again)
    pub fn cancel(&self, id: SubscriptionId) -> SejourResult<Subscription> {
        let mut sub = self.require(id)?;
        sub.cancel();
        self.storage.subscriptions.upsert(sub.clone())?;
        self.storage.subscriptions.save()?;
        Ok(sub)
    }

    /// Delete a subscription entirely
    pub fn delete(&self, id: SubscriptionId) -> SejourResult<()> {
        if !self.storage.subscriptions.delete(id)? {
            return Err(SejourError::subscription_not_found(id.to_string()));
        }
        self.storage.subscriptions.save()?;
        Ok(())
    }

    /// Find a subscription by name or id string
    pub fn find(&self, name_or_id: &str) -> SejourResult<Option<Subscription>> {
        if let Some(sub) = self.storage.subscriptions.get_by_name(name_or_id)? {
            return Ok(Some(sub));
        }
        if let Ok(id) = name_or_id.parse::<SubscriptionId>() {
            return self.storage.subscriptions.get(id);
        }
        Ok(None)
    }

    /// List all subscriptions
    pub fn list(&self) -> SejourResult<Vec<Subscription>> {
        self.storage.subscriptions.get_all()
    }

    /// List subscriptions that count toward expenses
    pub fn list_billable(&self) -> SejourResult<Vec<Subscription>> {
        self.storage.subscriptions.get_billable()
    }

    fn require(&self, id: SubscriptionId) -> SejourResult<Subscription> {
        self.storage
            .subscriptions
            .get(id)?
            .ok_or_else(|| SejourError::subscription_not_found(id.to_string()))
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
    fn test_add_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SubscriptionService::new(&storage);

        service
            .add(
                "Netflix",
                Money::from_cents(1349),
                BillingCycle::Monthly,
                ymd(2026, 1, 1),
                true,
            )
            .unwrap();

        let found = service.find("Netflix").unwrap().unwrap();
        assert_eq!(found.amount.cents(), 1349);
        assert!(found.is_automatic);
    }

    #[test]
    fn test_add_duplicate_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SubscriptionService::new(&storage);

        service
            .add(
                "Netflix",
                Money::from_cents(1349),
                BillingCycle::Monthly,
                ymd(2026, 1, 1),
                false,
            )
            .unwrap();

        let result = service.add(
            "Netflix",
            Money::from_cents(999),
            BillingCycle::Monthly,
            ymd(2026, 2, 1),
            false,
        );
        assert!(matches!(result, Err(SejourError::Duplicate { .. })));
    }

    #[test]
    fn test_record_payment_advances_monthly() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SubscriptionService::new(&storage);

        let sub = service
            .add(
                "Phone plan",
                Money::from_cents(1999),
                BillingCycle::Monthly,
                ymd(2026, 1, 31),
                true,
            )
            .unwrap();

        // Jan 31 → Feb 28 (2026 is not a leap year)
        let next = service.record_payment(sub.id).unwrap();
        assert_eq!(next, ymd(2026, 2, 28));

        // Persisted
        let stored = service.find("Phone plan").unwrap().unwrap();
        assert_eq!(stored.next_due_date, ymd(2026, 2, 28));
    }

    #[test]
    fn test_record_payment_never_moves_backward() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SubscriptionService::new(&storage);

        let sub = service
            .add(
                "Gym",
                Money::from_cents(2500),
                BillingCycle::Weekly,
                ymd(2026, 1, 1),
                false,
            )
            .unwrap();

        let mut previous = sub.next_due_date;
        for _ in 0..10 {
            let next = service.record_payment(sub.id).unwrap();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_pause_resume_cancel() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SubscriptionService::new(&storage);

        let sub = service
            .add(
                "Spotify",
                Money::from_cents(1099),
                BillingCycle::Monthly,
                ymd(2026, 1, 1),
                true,
            )
            .unwrap();

        service.pause(sub.id).unwrap();
        assert!(service.list_billable().unwrap().is_empty());

        service.resume(sub.id).unwrap();
        assert_eq!(service.list_billable().unwrap().len(), 1);

        service.cancel(sub.id).unwrap();
        assert!(service.list_billable().unwrap().is_empty());
        // Cancelled but still on file
        assert_eq!(service.list().unwrap().len(), 1);
    }
}
