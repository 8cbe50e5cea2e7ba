//! Emergency fund model
//!
//! A single savings pot per user with a target amount. Deposits and
//! withdrawals are deltas against `current_amount`; a withdrawal can never
//! push the balance below zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Errors for emergency fund operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundError {
    NonPositiveAmount,
    NonPositiveTarget,
    WithdrawExceedsBalance { requested: Money, available: Money },
}

impl fmt::Display for FundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than zero"),
            Self::WithdrawExceedsBalance {
                requested,
                available,
            } => write!(
                f,
                "Cannot withdraw {}: fund only holds {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for FundError {}

/// The user's emergency fund
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFund {
    /// Current balance, never negative
    pub current_amount: Money,

    /// Savings goal, always positive
    pub target_amount: Money,

    /// ISO 4217 currency code
    pub currency: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmergencyFund {
    /// Create a new, empty fund with the given target
    pub fn new(target_amount: Money, currency: impl Into<String>) -> Result<Self, FundError> {
        if !target_amount.is_positive() {
            return Err(FundError::NonPositiveTarget);
        }
        let now = Utc::now();
        Ok(Self {
            current_amount: Money::zero(),
            target_amount,
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Add money to the fund
    pub fn deposit(&mut self, amount: Money) -> Result<(), FundError> {
        if !amount.is_positive() {
            return Err(FundError::NonPositiveAmount);
        }
        self.current_amount += amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Take money out of the fund.
    ///
    /// Fails without mutating if the withdrawal exceeds the current balance.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), FundError> {
        if !amount.is_positive() {
            return Err(FundError::NonPositiveAmount);
        }
        if amount > self.current_amount {
            return Err(FundError::WithdrawExceedsBalance {
                requested: amount,
                available: self.current_amount,
            });
        }
        self.current_amount -= amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Change the savings goal
    pub fn set_target(&mut self, target_amount: Money) -> Result<(), FundError> {
        if !target_amount.is_positive() {
            return Err(FundError::NonPositiveTarget);
        }
        self.target_amount = target_amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Progress toward the target as a percentage, capped at 100
    pub fn progress_percentage(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        let pct = self.current_amount.cents() as f64 / self.target_amount.cents() as f64 * 100.0;
        pct.min(100.0)
    }

    /// Whether the balance has reached the target
    pub fn is_fully_funded(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// How much is still missing, never negative
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund_with(current: i64, target: i64) -> EmergencyFund {
        let mut fund = EmergencyFund::new(Money::from_cents(target), "EUR").unwrap();
        if current > 0 {
            fund.deposit(Money::from_cents(current)).unwrap();
        }
        fund
    }

    #[test]
    fn test_new_fund_starts_empty() {
        let fund = fund_with(0, 100000);
        assert!(fund.current_amount.is_zero());
        assert_eq!(fund.progress_percentage(), 0.0);
        assert!(!fund.is_fully_funded());
        assert_eq!(fund.remaining().cents(), 100000);
    }

    #[test]
    fn test_new_fund_rejects_zero_target() {
        assert!(matches!(
            EmergencyFund::new(Money::zero(), "EUR"),
            Err(FundError::NonPositiveTarget)
        ));
    }

    #[test]
    fn test_deposit_and_progress() {
        let fund = fund_with(25000, 100000);
        assert_eq!(fund.current_amount.cents(), 25000);
        assert!((fund.progress_percentage() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_caps_at_100() {
        let fund = fund_with(150000, 100000);
        assert_eq!(fund.progress_percentage(), 100.0);
        assert!(fund.is_fully_funded());
        assert!(fund.remaining().is_zero());
    }

    #[test]
    fn test_withdraw_exceeding_balance_is_rejected() {
        let mut fund = fund_with(5000, 100000);

        // One cent over the balance fails and leaves the fund untouched
        let err = fund.withdraw(Money::from_cents(5001)).unwrap_err();
        assert!(matches!(err, FundError::WithdrawExceedsBalance { .. }));
        assert_eq!(fund.current_amount.cents(), 5000);
    }

    #[test]
    fn test_withdraw_exact_balance_leaves_zero() {
        let mut fund = fund_with(5000, 100000);
        fund.withdraw(Money::from_cents(5000)).unwrap();
        assert!(fund.current_amount.is_zero());
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut fund = fund_with(5000, 100000);
        assert!(fund.withdraw(Money::zero()).is_err());
    }

    #[test]
    fn test_set_target() {
        let mut fund = fund_with(5000, 100000);
        fund.set_target(Money::from_cents(50000)).unwrap();
        assert_eq!(fund.target_amount.cents(), 50000);
        assert!((fund.progress_percentage() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let fund = fund_with(5000, 100000);
        let json = serde_json::to_string(&fund).unwrap();
        let deserialized: EmergencyFund = serde_json::from_str(&json).unwrap();
        assert_eq!(fund.current_amount, deserialized.current_amount);
        assert_eq!(fund.target_amount, deserialized.target_amount);
    }
}
