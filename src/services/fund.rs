//! Emergency fund service
//!
//! Business logic for the singleton emergency fund: setting the target,
//! deposits, and guarded withdrawals.

use crate::error::{SejourError, SejourResult};
use crate::models::{EmergencyFund, FundError, Money};
use crate::storage::Storage;

/// Service for emergency fund management
pub struct FundService<'a> {
    storage: &'a Storage,
}

impl<'a> FundService<'a> {
    /// Create a new fund service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the fund, if one has been set up
    pub fn get(&self) -> SejourResult<Option<EmergencyFund>> {
        self.storage.fund.get()
    }

    /// Set the savings target, creating the fund on first use
    pub fn set_target(
        &self,
        target: Money,
        currency: impl Into<String>,
    ) -> SejourResult<EmergencyFund> {
        let fund = match self.storage.fund.get()? {
            Some(mut fund) => {
                fund.set_target(target).map_err(map_fund_error)?;
                fund
            }
            None => EmergencyFund::new(target, currency).map_err(map_fund_error)?,
        };

        self.storage.fund.set(fund.clone())?;
        self.storage.fund.save()?;

        Ok(fund)
    }

    /// Add money to the fund
    pub fn deposit(&self, amount: Money) -> SejourResult<EmergencyFund> {
        let mut fund = self.require()?;
        fund.deposit(amount).map_err(map_fund_error)?;

        self.storage.fund.set(fund.clone())?;
        self.storage.fund.save()?;

        Ok(fund)
    }

    /// Take money out of the fund.
    ///
    /// A withdrawal larger than the balance fails without touching the fund.
    pub fn withdraw(&self, amount: Money) -> SejourResult<EmergencyFund> {
        let mut fund = self.require()?;
        fund.withdraw(amount).map_err(map_fund_error)?;

        self.storage.fund.set(fund.clone())?;
        self.storage.fund.save()?;

        Ok(fund)
    }

    fn require(&self) -> SejourResult<EmergencyFund> {
        self.storage.fund.get()?.ok_or(SejourError::NotFound {
            entity_type: "Emergency fund",
            identifier: "not set up; run 'sejour fund target' first".to_string(),
        })
    }
}

/// Map model-level fund errors onto the application error type
fn map_fund_error(err: FundError) -> SejourError {
    match err {
        FundError::WithdrawExceedsBalance {
            requested,
            available,
        } => SejourError::InsufficientFunds {
            requested: requested.cents(),
            available: available.cents(),
        },
        other => SejourError::Validation(other.to_string()),
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

    #[test]
    fn test_set_target_creates_fund() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FundService::new(&storage);

        assert!(service.get().unwrap().is_none());

        let fund = service
            .set_target(Money::from_cents(100000), "EUR")
            .unwrap();
        assert_eq!(fund.target_amount.cents(), 100000);
        assert!(fund.current_amount.is_zero());
    }

    #[test]
    fn test_set_target_preserves_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FundService::new(&storage);

        service
            .set_target(Money::from_cents(100000), "EUR")
            .unwrap();
        service.deposit(Money::from_cents(30000)).unwrap();

        let fund = service.set_target(Money::from_cents(50000), "EUR").unwrap();
        assert_eq!(fund.current_amount.cents(), 30000);
        assert_eq!(fund.target_amount.cents(), 50000);
    }

    #[test]
    fn test_deposit_before_setup_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FundService::new(&storage);

        let err = service.deposit(Money::from_cents(1000)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_withdraw_over_balance_rejected_without_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FundService::new(&storage);

        service
            .set_target(Money::from_cents(100000), "EUR")
            .unwrap();
        service.deposit(Money::from_cents(5000)).unwrap();

        // One cent over the balance
        let err = service.withdraw(Money::from_cents(5001)).unwrap_err();
        assert!(matches!(err, SejourError::InsufficientFunds { .. }));

        // Balance untouched, also on disk
        let fund = service.get().unwrap().unwrap();
        assert_eq!(fund.current_amount.cents(), 5000);
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FundService::new(&storage);

        service
            .set_target(Money::from_cents(100000), "EUR")
            .unwrap();
        service.deposit(Money::from_cents(5000)).unwrap();

        let fund = service.withdraw(Money::from_cents(5000)).unwrap();
        assert!(fund.current_amount.is_zero());
    }
}
