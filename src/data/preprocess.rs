use crate::error::{DashboardError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use super::connectors::{RequiredColumn, SchemaValidator};
use super::table::{CleanedGender, CleaningStats, PurchaseDate, Transaction, TransactionTable};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

pub struct Preprocessor;

impl Preprocessor {
    /// Validate and clean a raw upload into a transaction table.
    ///
    /// Steps run in order: schema check, drop incomplete rows, parse dates
    /// (unparseable values become `PurchaseDate::Invalid`), bucket gender,
    /// reindex. The input frame is left untouched.
    pub fn clean(df: &DataFrame) -> Result<TransactionTable> {
        let report = SchemaValidator::validate(df);
        if !report.is_valid() {
            return Err(DashboardError::SchemaMismatch {
                missing: report.missing_names(),
            });
        }

        let rows_read = df.height();
        let null_report = SchemaValidator::check_nulls(df);
        if !null_report.is_empty() {
            log::debug!("Dropping rows with null values: {:?}", null_report);
        }

        let complete = df.clone().lazy().drop_nulls(None).collect()?;

        let customer_ids = Self::text_column(&complete, RequiredColumn::CustomerId)?;
        let ages = Self::numeric_column(&complete, RequiredColumn::Age)?;
        let genders = Self::text_column(&complete, RequiredColumn::Gender)?;
        let categories = Self::text_column(&complete, RequiredColumn::ProductCategory)?;
        let amounts = Self::numeric_column(&complete, RequiredColumn::PurchaseAmount)?;
        let dates = Self::text_column(&complete, RequiredColumn::PurchaseDate)?;

        let mut records = Vec::with_capacity(complete.height());
        let mut invalid_dates = 0;

        for i in 0..complete.height() {
            // Numeric cells that failed to cast count as missing
            let (Some(customer_id), Some(age), Some(gender), Some(category), Some(amount), Some(raw_date)) = (
                customer_ids.get(i),
                ages.get(i).filter(|v| v.is_finite()),
                genders.get(i),
                categories.get(i),
                amounts.get(i).filter(|v| v.is_finite()),
                dates.get(i),
            ) else {
                continue;
            };

            let purchase_date = parse_purchase_date(raw_date);
            if !purchase_date.is_valid() {
                invalid_dates += 1;
            }

            records.push(Transaction {
                index: records.len(),
                customer_id: customer_id.to_string(),
                age,
                gender: gender.to_string(),
                product_category: category.to_string(),
                purchase_amount: amount,
                purchase_date,
                cleaned_gender: CleanedGender::from_raw(gender),
            });
        }

        let stats = CleaningStats {
            rows_read,
            rows_dropped: rows_read - records.len(),
            invalid_dates,
        };
        log::info!(
            "Cleaned upload: {} rows read, {} dropped, {} unparseable dates",
            stats.rows_read,
            stats.rows_dropped,
            stats.invalid_dates
        );
        if records.is_empty() {
            log::warn!("No complete rows remain after cleaning");
        }

        Ok(TransactionTable::from_records(records, stats))
    }

    fn text_column(df: &DataFrame, column: RequiredColumn) -> Result<StringChunked> {
        let casted = df.column(column.as_str())?.cast(&DataType::String)?;
        Ok(casted.str()?.clone())
    }

    fn numeric_column(df: &DataFrame, column: RequiredColumn) -> Result<Float64Chunked> {
        let casted = df.column(column.as_str())?.cast(&DataType::Float64)?;
        Ok(casted.f64()?.clone())
    }
}

/// Parse a purchase date, coercing anything unrecognised to the invalid sentinel.
///
/// Dates must fit a signed 64-bit nanosecond timestamp
/// (1677-09-21 to 2262-04-11); anything further out is treated as invalid.
pub fn parse_purchase_date(raw: &str) -> PurchaseDate {
    match parse_timestamp(raw.trim()) {
        Some(dt) if dt.and_utc().timestamp_nanos_opt().is_some() => PurchaseDate::Parsed(dt),
        _ => PurchaseDate::Invalid,
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Some(dt);
            }
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local())
}
