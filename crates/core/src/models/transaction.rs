use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single spending transaction, as read from the payload resource.
///
/// Records are immutable once loaded. Charts never keep them around;
/// they only keep the descriptors derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Identifier from the payload
    pub id: i64,

    /// Unix timestamp in seconds
    pub time: i64,

    /// Display name (e.g., "McDonalds", "Pyaterochka")
    pub name: String,

    /// Amount spent (never negative)
    pub amount: f64,

    /// Category label (e.g., "Restaurants", "Groceries")
    pub category: String,
}

impl TransactionRecord {
    pub fn new(
        id: i64,
        time: i64,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            time,
            name: name.into(),
            amount,
            category: category.into(),
        }
    }

    /// The transaction time as a UTC datetime, or `None` if `time` is out of range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// Check the record invariants: a finite, non-negative amount and a
    /// non-empty category.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CoreError::InvalidData(format!(
                "transaction {} has invalid amount {}",
                self.id, self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(CoreError::InvalidData(format!(
                "transaction {} has an empty category",
                self.id
            )));
        }
        Ok(())
    }

    /// Validate every record, failing on the first bad one.
    pub fn validate_all(records: &[TransactionRecord]) -> Result<(), CoreError> {
        records.iter().try_for_each(TransactionRecord::validate)
    }
}
