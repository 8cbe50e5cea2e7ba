//! Subscription model
//!
//! Recurring charges (phone plan, streaming, transit pass) with a due-date
//! cursor that advances one billing cycle each time a payment is recorded.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SubscriptionId;
use super::money::Money;

/// Billing cycle of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Parse from the strings used on the CLI
    pub fn parse(s: &str) -> Result<Self, SubscriptionValidationError> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" => Ok(Self::Yearly),
            other => Err(SubscriptionValidationError::UnknownCycle(other.to_string())),
        }
    }

    /// The due date one cycle after `from`.
    ///
    /// Weekly adds exactly 7 days. Monthly and yearly use calendar-aware
    /// increments, clamping to the last valid day of the target month
    /// (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).
    pub fn advance(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => from + Duration::days(7),
            Self::Monthly => from
                .checked_add_months(Months::new(1))
                .unwrap_or(from + Duration::days(30)),
            Self::Yearly => from
                .checked_add_months(Months::new(12))
                .unwrap_or(from + Duration::days(365)),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Validation errors for subscriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionValidationError {
    NonPositiveAmount,
    EmptyName,
    UnknownCycle(String),
    DueDateBeforeStart,
}

impl fmt::Display for SubscriptionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Subscription amount must be greater than zero"),
            Self::EmptyName => write!(f, "Subscription name cannot be empty"),
            Self::UnknownCycle(s) => write!(f, "Unknown billing cycle: {}", s),
            Self::DueDateBeforeStart => write!(f, "Next due date cannot be before the start date"),
        }
    }
}

impl std::error::Error for SubscriptionValidationError {}

/// A recurring subscription charge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub amount: Money,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,

    /// Next date a payment is due. Only ever moves forward.
    pub next_due_date: NaiveDate,

    /// Cancelled subscriptions stay on file but stop billing
    #[serde(default = "default_active")]
    pub active: bool,

    /// Paused subscriptions are kept active but excluded from totals
    #[serde(default)]
    pub is_paused: bool,

    /// Whether the charge is auto-debited
    #[serde(default)]
    pub is_automatic: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Subscription {
    /// Create a new subscription; the first due date is the start date
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SubscriptionId::new(),
            name: name.into(),
            amount,
            billing_cycle,
            start_date,
            next_due_date: start_date,
            active: true,
            is_paused: false,
            is_automatic: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this subscription counts toward the period's expenses
    pub fn is_billable(&self) -> bool {
        self.active && !self.is_paused
    }

    /// Record a payment, advancing the due date by one billing cycle.
    ///
    /// The advance is always computed from the current `next_due_date`, so
    /// repeated calls are monotonic: the due date never moves backward.
    pub fn record_payment(&mut self) -> NaiveDate {
        self.next_due_date = self.billing_cycle.advance(self.next_due_date);
        self.updated_at = Utc::now();
        self.next_due_date
    }

    /// Pause the subscription (kept on file, excluded from totals)
    pub fn pause(&mut self) {
        self.is_paused = true;
        self.updated_at = Utc::now();
    }

    /// Resume a paused subscription
    pub fn resume(&mut self) {
        self.is_paused = false;
        self.updated_at = Utc::now();
    }

    /// Cancel the subscription
    pub fn cancel(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Validate the subscription
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if !self.amount.is_positive() {
            return Err(SubscriptionValidationError::NonPositiveAmount);
        }
        if self.name.trim().is_empty() {
            return Err(SubscriptionValidationError::EmptyName);
        }
        if self.next_due_date < self.start_date {
            return Err(SubscriptionValidationError::DueDateBeforeStart);
        }
        Ok(())
    }
}
