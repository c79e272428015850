//! Pending plan entries
//!
//! Every "add" applied to a plan cell is remembered until it has been sent to
//! the backend as a transaction, so it can be undone or committed later.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EntryId, RowId, SectionId};
use super::money::Money;
use super::month::Month;

/// An amount added to one plan cell and not yet committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    pub id: EntryId,
    pub section_id: SectionId,
    pub row_id: RowId,
    pub month: Month,
    /// Always positive
    pub amount: Money,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl PendingEntry {
    pub fn new(section_id: SectionId, row_id: RowId, month: Month, amount: Money) -> Self {
        Self {
            id: EntryId::new(),
            section_id,
            row_id,
            month,
            amount,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Date a transaction for this entry is booked on: the 1st of its month
    pub fn booking_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month.number(), 1)
    }
}

impl fmt::Display for PendingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{} ({})", self.month, self.amount, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_date() {
        let entry = PendingEntry::new(
            SectionId::new(),
            RowId::new(),
            Month::Mar,
            Money::from_units(50),
        );
        assert_eq!(
            entry.booking_date(2025),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let entry = PendingEntry::new(
            SectionId::new(),
            RowId::new(),
            Month::Jan,
            Money::from_units(1),
        )
        .with_description("bonus");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("sectionId").is_some());
        assert_eq!(json["month"], 0);
        assert_eq!(json["amount"], 100);

        let back: PendingEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
