//! Income source model
//!
//! Recurring or one-off income that isn't entered as a transaction:
//! scholarships, family transfers, part-time wages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeSourceId;
use super::money::Money;

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    OneTime,
}

impl Frequency {
    /// Parse from the strings used on the CLI
    pub fn parse(s: &str) -> Result<Self, IncomeValidationError> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" => Ok(Self::Yearly),
            "one-time" | "once" => Ok(Self::OneTime),
            other => Err(IncomeValidationError::UnknownFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
            Self::OneTime => write!(f, "One-time"),
        }
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
    EmptyName,
    UnknownFrequency(String),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be greater than zero"),
            Self::EmptyName => write!(f, "Source name cannot be empty"),
            Self::UnknownFrequency(s) => write!(f, "Unknown frequency: {}", s),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// An income source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub source_name: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub date: NaiveDate,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeSource {
    /// Create a new income source
    pub fn new(
        source_name: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        date: NaiveDate,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeSourceId::new(),
            source_name: source_name.into(),
            amount,
            frequency,
            date,
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        if self.source_name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IncomeSource {
        IncomeSource::new(
            "CAF housing aid",
            Money::from_cents(20000),
            Frequency::Monthly,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            "EUR",
        )
    }

    #[test]
    fn test_new_income_source() {
        let src = sample();
        assert_eq!(src.source_name, "CAF housing aid");
        assert_eq!(src.amount.cents(), 20000);
        assert_eq!(src.frequency, Frequency::Monthly);
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(Frequency::parse("weekly").unwrap(), Frequency::Weekly);
        assert_eq!(Frequency::parse("one-time").unwrap(), Frequency::OneTime);
        assert_eq!(Frequency::parse("Annual").unwrap(), Frequency::Yearly);
        assert!(Frequency::parse("fortnightly").is_err());
    }

    #[test]
    fn test_validation_rejects_zero_amount() {
        let mut src = sample();
        src.amount = Money::zero();
        assert!(matches!(
            src.validate(),
            Err(IncomeValidationError::NonPositiveAmount)
        ));
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut src = sample();
        src.source_name = String::new();
        assert!(matches!(
            src.validate(),
            Err(IncomeValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_serialization() {
        let src = sample();
        let json = serde_json::to_string(&src).unwrap();
        let deserialized: IncomeSource = serde_json::from_str(&json).unwrap();
        assert_eq!(src.id, deserialized.id);
        assert_eq!(src.frequency, deserialized.frequency);
    }
}
