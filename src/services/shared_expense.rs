//! Shared expense service
//!
//! Business logic for expenses split with flatmates, including settling up.

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{Money, Period, SharedExpense, SharedExpenseId};
use crate::storage::Storage;

/// Service for shared expense management
pub struct SharedExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> SharedExpenseService<'a> {
    /// Create a new shared expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new shared expense
    pub fn add(
        &self,
        description: impl Into<String>,
        total_amount: Money,
        your_share: Money,
        participants: Vec<String>,
        date: NaiveDate,
    ) -> SejourResult<SharedExpense> {
        let expense = SharedExpense::new(description, total_amount, your_share, participants, date);

        expense
            .validate()
            .map_err(|e| SejourError::Validation(e.to_string()))?;

        self.storage.shared_expenses.upsert(expense.clone())?;
        self.storage.shared_expenses.save()?;

        Ok(expense)
    }

    /// Mark a shared expense as settled
    pub fn settle(&self, id: SharedExpenseId) -> SejourResult<SharedExpense> {
        let mut expense = self
            .storage
            .shared_expenses
            .get(id)?
            .ok_or_else(|| SejourError::shared_expense_not_found(id.to_string()))?;

        expense.settle();

        self.storage.shared_expenses.upsert(expense.clone())?;
        self.storage.shared_expenses.save()?;

        Ok(expense)
    }

    /// Delete a shared expense by id
    pub fn delete(&self, id: SharedExpenseId) -> SejourResult<()> {
        if !self.storage.shared_expenses.delete(id)? {
            return Err(SejourError::shared_expense_not_found(id.to_string()));
        }
        self.storage.shared_expenses.save()?;
        Ok(())
    }

    /// List all shared expenses
    pub fn list(&self) -> SejourResult<Vec<SharedExpense>> {
        self.storage.shared_expenses.get_all()
    }

    /// List shared expenses dated inside a calendar month
    pub fn list_for_period(&self, period: &Period) -> SejourResult<Vec<SharedExpense>> {
        self.storage.shared_expenses.get_by_period(period)
    }

    /// Total of your shares across unsettled expenses
    pub fn outstanding_share(&self) -> SejourResult<Money> {
        Ok(self
            .storage
            .shared_expenses
            .get_unsettled()?
            .iter()
            .map(|e| e.your_share)
            .sum())
    }
}
