//! Income source service
//!
//! Business logic for managing recurring and one-off income sources.

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{Frequency, IncomeSource, IncomeSourceId, Money, Period};
use crate::storage::Storage;

/// Service for income source management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new income source
    pub fn add(
        &self,
        source_name: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        date: NaiveDate,
        currency: impl Into<String>,
    ) -> SejourResult<IncomeSource> {
        let source = IncomeSource::new(source_name, amount, frequency, date, currency);

        source
            .validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.income_sources.upsert(source.clone())?;
        self.storage.income_sources.save()?;

        Ok(source)
    }

    /// Update the amount of an existing income source
    pub fn set_amount(&self, id: IncomeSourceId, amount: Money) -> SejourResult<IncomeSource> {
        let mut source = self
            .storage
            .income_sources
            .get(id)?
            .ok_or_else(|| SejourError::income_source_not_found(id.to_string()))?;

        source.set_amount(amount);
        source
            .validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.income_sources.upsert(source.clone())?;
        self.storage.income_sources.save()?;

        Ok(source)
    }

    /// Delete an income source by id
    pub fn delete(&self, id: IncomeSourceId) -> SejourResult<()> {
        if !self.storage.income_sources.delete(id)? {
            return Err(SejourError::income_source_not_found(id.to_string()));
        }
        self.storage.income_sources.save()?;
        Ok(())
    }

    /// List all income sources
    pub fn list(&self) -> SejourResult<Vec<IncomeSource>> {
        self.storage.income_sources.get_all()
    }

    /// List income sources dated inside a calendar month
    pub fn list_for_period(&self, period: &Period) -> SejourResult<Vec<IncomeSource>> {
        self.storage.income_sources.get_by_period(period)
    }
}
