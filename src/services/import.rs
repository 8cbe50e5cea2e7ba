//! CSV import service
//!
//! Imports transactions from a CSV export (banking app or spreadsheet),
//! with per-row validation and duplicate detection against existing records.

use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;

use crate::error::{SejourError, SejourResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Expected columns: date, type, amount, description, category
const EXPECTED_COLUMNS: usize = 5;

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Rows imported as new transactions
    pub imported: usize,
    /// Rows skipped because an identical transaction already exists
    pub duplicates: usize,
    /// Row-level failures, with row numbers (1-indexed, excluding header)
    pub errors: Vec<String>,
}

impl ImportSummary {
    /// Total rows seen
    pub fn total(&self) -> usize {
        self.imported + self.duplicates + self.errors.len()
    }
}

/// Service for importing transactions from CSV
pub struct ImportService<'a> {
    storage: &'a Storage,
    date_format: String,
}

impl<'a> ImportService<'a> {
    /// Create a new import service with the default date format (%Y-%m-%d)
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Use a different strftime date format for the date column
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Import transactions from CSV data.
    ///
    /// The first row must be a header. Rows that fail to parse or validate
    /// are reported in the summary and skipped; valid rows are still
    /// imported. Rows matching an existing transaction on
    /// (date, amount, description, type) are skipped as duplicates.
    pub fn import_csv<R: Read>(&self, reader: R, currency: &str) -> SejourResult<ImportSummary> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut summary = ImportSummary::default();

        // Fingerprints of everything already on file
        let mut seen: HashSet<(NaiveDate, i64, String, TransactionKind)> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .map(|t| (t.date, t.amount.cents(), t.description, t.kind))
            .collect();

        for (index, record) in csv_reader.records().enumerate() {
            let row = index + 1;

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    summary.errors.push(format!("row {}: {}", row, e));
                    continue;
                }
            };

            match self.parse_row(&record, currency) {
                Ok(txn) => {
                    let fingerprint =
                        (txn.date, txn.amount.cents(), txn.description.clone(), txn.kind);
                    if seen.contains(&fingerprint) {
                        summary.duplicates += 1;
                        continue;
                    }
                    seen.insert(fingerprint);

                    self.storage.transactions.upsert(txn)?;
                    summary.imported += 1;
                }
                Err(e) => summary.errors.push(format!("row {}: {}", row, e)),
            }
        }

        if summary.imported > 0 {
            self.storage.transactions.save()?;
        }

        Ok(summary)
    }

    fn parse_row(&self, record: &csv::StringRecord, currency: &str) -> SejourResult<Transaction> {
        if record.len() < EXPECTED_COLUMNS {
            return Err(SejourError::Import(format!(
                "expected {} columns, found {}",
                EXPECTED_COLUMNS,
                record.len()
            )));
        }

        let date = NaiveDate::parse_from_str(record[0].trim(), &self.date_format)
            .map_err(|_| SejourError::Import(format!("invalid date: {}", &record[0])))?;

        let kind = TransactionKind::parse(record[1].trim())
            .map_err(|e| SejourError::Import(e.to_string()))?;

        let amount = Money::parse(record[2].trim())
            .map_err(|e| SejourError::Import(e.to_string()))?;

        let txn = Transaction::new(
            amount,
            record[3].trim(),
            record[4].trim(),
            kind,
            date,
            currency,
        );

        txn.validate()
            .map_err(|e| SejourError::Import(e.to_string()))?;

        Ok(txn)
    }
}
