//! Measurements, financial entries and attachments

use super::{DocumentId, FinancialEntryId, MeasurementId, Progress};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A progress and billing checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: MeasurementId,
    pub date: NaiveDate,
    pub physical_progress: Progress,
    pub financial_value: Decimal,
    #[serde(default)]
    pub description: String,
    /// Photo references
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Direction of a financial entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Income,
    Expense,
}

/// An income or expense line in the project's cash flow.
///
/// `value` is never negative; the sign lives in [`EntryType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    pub id: FinancialEntryId,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub value: Decimal,
    #[serde(default)]
    pub category: String,
}

impl FinancialEntry {
    /// `value` for income, `-value` for expense
    pub fn signed_value(&self) -> Decimal {
        match self.entry_type {
            EntryType::Income => self.value,
            EntryType::Expense => -self.value,
        }
    }
}

/// An attachment reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Locator of the attachment
    pub url: String,
}
