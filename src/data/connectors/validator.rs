use super::types::RequiredColumn;
use polars::prelude::*;

/// Outcome of checking an upload's header against the required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    missing: Vec<RequiredColumn>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing columns, in required order.
    pub fn missing(&self) -> &[RequiredColumn] {
        &self.missing
    }

    pub fn missing_names(&self) -> Vec<String> {
        self.missing.iter().map(|c| c.as_str().to_string()).collect()
    }
}

pub struct SchemaValidator;

impl SchemaValidator {
    /// Check that every required column is present
    pub fn validate(df: &DataFrame) -> ValidationReport {
        let columns = df.get_column_names();
        let missing: Vec<RequiredColumn> = RequiredColumn::all()
            .into_iter()
            .filter(|required| !columns.iter().any(|col| col.as_str() == required.as_str()))
            .collect();

        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|c| c.as_str()).collect();
            log::warn!(
                "The following required columns are missing: {}",
                names.join(", ")
            );
        }

        ValidationReport { missing }
    }

    /// Count null cells per column, skipping columns without any
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_validate_complete_header() {
        let df = df! {
            "CustomerID" => &[1i64, 2],
            "Age" => &[34i64, 51],
            "Gender" => &["Male", "Female"],
            "ProductCategory" => &["Books", "Toys"],
            "PurchaseAmount" => &[12.5, 40.0],
            "PurchaseDate" => &["2024-01-02", "2024-01-09"],
        }
        .unwrap();

        let report = SchemaValidator::validate(&df);
        assert!(report.is_valid());
        assert!(report.missing().is_empty());
    }

    #[test]
    fn test_validate_missing_purchase_date() {
        let df = df! {
            "CustomerID" => &[1i64],
            "Age" => &[34i64],
            "Gender" => &["Male"],
            "ProductCategory" => &["Books"],
            "PurchaseAmount" => &[12.5],
        }
        .unwrap();

        let report = SchemaValidator::validate(&df);
        assert!(!report.is_valid());
        assert_eq!(report.missing(), &[RequiredColumn::PurchaseDate]);
        assert_eq!(report.missing_names(), vec!["PurchaseDate".to_string()]);
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let df = df! {
            "customerid" => &[1i64],
            "AGE" => &[34i64],
            "Gender" => &["Male"],
            "ProductCategory" => &["Books"],
            "PurchaseAmount" => &[12.5],
            "PurchaseDate" => &["2024-01-02"],
        }
        .unwrap();

        let report = SchemaValidator::validate(&df);
        assert_eq!(
            report.missing(),
            &[RequiredColumn::CustomerId, RequiredColumn::Age]
        );
    }

    #[test]
    fn test_check_nulls() {
        let df = df! {
            "Age" => &[Some(34i64), None, Some(20)],
            "Gender" => &[Some("Male"), Some("Female"), None],
        }
        .unwrap();

        let report = SchemaValidator::check_nulls(&df);
        assert_eq!(report, vec![("Age".to_string(), 1), ("Gender".to_string(), 1)]);
    }
}
