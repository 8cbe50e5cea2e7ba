//! Shared expense model
//!
//! Expenses split with flatmates or classmates. Only `your_share` counts
//! toward personal totals; the full amount and participant list are kept for
//! settling up.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SharedExpenseId;
use super::money::Money;

/// Validation errors for shared expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedExpenseValidationError {
    NonPositiveTotal,
    NonPositiveShare,
    EmptyDescription,
}

impl fmt::Display for SharedExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTotal => write!(f, "Total amount must be greater than zero"),
            Self::NonPositiveShare => write!(f, "Your share must be greater than zero"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for SharedExpenseValidationError {}

/// An expense split between several people
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedExpense {
    pub id: SharedExpenseId,
    pub description: String,

    /// Full amount of the bill
    pub total_amount: Money,

    /// The portion this user owes. Expected to be at most `total_amount`,
    /// but both are user-entered and no consistency is enforced.
    pub your_share: Money,

    /// Names of the people splitting the bill
    #[serde(default)]
    pub participants: Vec<String>,

    pub date: NaiveDate,

    /// Whether this expense has been settled with the group
    #[serde(default)]
    pub settled: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SharedExpense {
    /// Create a new shared expense
    pub fn new(
        description: impl Into<String>,
        total_amount: Money,
        your_share: Money,
        participants: Vec<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SharedExpenseId::new(),
            description: description.into(),
            total_amount,
            your_share,
            participants,
            date,
            settled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark this expense as settled
    pub fn settle(&mut self) {
        self.settled = true;
        self.updated_at = Utc::now();
    }

    /// Reopen a settled expense
    pub fn unsettle(&mut self) {
        self.settled = false;
        self.updated_at = Utc::now();
    }

    /// Validate the shared expense
    pub fn validate(&self) -> Result<(), SharedExpenseValidationError> {
        if !self.total_amount.is_positive() {
            return Err(SharedExpenseValidationError::NonPositiveTotal);
        }
        if !self.your_share.is_positive() {
            return Err(SharedExpenseValidationError::NonPositiveShare);
        }
        if self.description.trim().is_empty() {
            return Err(SharedExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SharedExpense {
        SharedExpense::new(
            "Internet bill",
            Money::from_cents(4500),
            Money::from_cents(1500),
            vec!["Léa".to_string(), "Tom".to_string()],
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_new_shared_expense() {
        let exp = sample();
        assert_eq!(exp.total_amount.cents(), 4500);
        assert_eq!(exp.your_share.cents(), 1500);
        assert_eq!(exp.participants.len(), 2);
        assert!(!exp.settled);
    }

    #[test]
    fn test_settle_and_unsettle() {
        let mut exp = sample();
        exp.settle();
        assert!(exp.settled);
        exp.unsettle();
        assert!(!exp.settled);
    }

    #[test]
    fn test_share_larger_than_total_is_not_rejected() {
        // Both values are user-entered; consistency is not enforced
        let mut exp = sample();
        exp.your_share = Money::from_cents(9000);
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_share() {
        let mut exp = sample();
        exp.your_share = Money::zero();
        assert!(matches!(
            exp.validate(),
            Err(SharedExpenseValidationError::NonPositiveShare)
        ));
    }

    #[test]
    fn test_serialization() {
        let exp = sample();
        let json = serde_json::to_string(&exp).unwrap();
        let deserialized: SharedExpense = serde_json::from_str(&json).unwrap();
        assert_eq!(exp.id, deserialized.id);
        assert_eq!(exp.participants, deserialized.participants);
    }
}
