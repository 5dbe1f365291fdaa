use super::connectors::{DataPreview, RequiredColumn};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender bucket derived from the raw `Gender` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CleanedGender {
    Male,
    Female,
    Other,
}

impl CleanedGender {
    /// Exact, case-sensitive match on "Male" / "Female"; everything else is Other.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Male" => Self::Male,
            "Female" => Self::Female,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Male, Self::Female, Self::Other]
    }
}

impl fmt::Display for CleanedGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase timestamp, or the sentinel for values that could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PurchaseDate {
    Parsed(NaiveDateTime),
    Invalid,
}

impl PurchaseDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(dt) => Some(dt.date()),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(dt) if dt.num_seconds_from_midnight() == 0 => write!(f, "{}", dt.date()),
            Self::Parsed(dt) => write!(f, "{}", dt),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// One cleaned customer transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub index: usize,
    pub customer_id: String,
    pub age: f64,
    pub gender: String,
    pub product_category: String,
    pub purchase_amount: f64,
    pub purchase_date: PurchaseDate,
    pub cleaned_gender: CleanedGender,
}

/// Row accounting from the cleaning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub invalid_dates: usize,
}

/// Cleaned, read-only transaction table.
///
/// Built once per upload by the preprocessor; there are no mutating accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    records: Vec<Transaction>,
    stats: CleaningStats,
}

impl TransactionTable {
    /// Build a table, reassigning a contiguous zero-based index.
    pub fn from_records(records: Vec<Transaction>, stats: CleaningStats) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Transaction { index, ..record })
            .collect();
        Self { records, stats }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.records.iter()
    }

    pub fn stats(&self) -> CleaningStats {
        self.stats
    }

    pub fn head(&self, n: usize) -> &[Transaction] {
        &self.records[..n.min(self.records.len())]
    }

    /// Column headers in display order, including the derived gender bucket
    pub fn column_names() -> Vec<String> {
        RequiredColumn::all()
            .iter()
            .map(|c| c.as_str().to_string())
            .chain(std::iter::once("CleanedGender".to_string()))
            .collect()
    }

    /// First `n` rows rendered as strings
    pub fn preview(&self, n: usize) -> DataPreview {
        let first_rows = self
            .head(n)
            .iter()
            .map(|t| {
                vec![
                    t.customer_id.clone(),
                    t.age.to_string(),
                    t.gender.clone(),
                    t.product_category.clone(),
                    format!("{:.2}", t.purchase_amount),
                    t.purchase_date.to_string(),
                    t.cleaned_gender.to_string(),
                ]
            })
            .collect();

        DataPreview {
            columns: Self::column_names(),
            first_rows,
            total_rows: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
