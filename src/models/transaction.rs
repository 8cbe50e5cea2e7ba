//! Transaction model
//!
//! A single income or expense entry with a free-form category. Amounts are
//! always positive; the kind decides which side of the ledger they land on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Which side of the ledger a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    /// Parse from the strings used on the CLI ("income"/"expense")
    pub fn parse(s: &str) -> Result<Self, TransactionValidationError> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    EmptyDescription,
    UnknownKind(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::UnknownKind(s) => write!(f, "Unknown transaction type: {}", s),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// A single income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive
    pub amount: Money,

    /// What the money was for
    pub description: String,

    /// Free-form category label, case-sensitive, stored unmodified
    pub category: String,

    /// Income or expense
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// ISO 4217 currency code (e.g., "EUR")
    pub currency: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category: category.into(),
            kind,
            date,
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Set the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Set the category
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.updated_at = Utc::now();
    }

    /// Set the date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        Ok(())
    }
}
