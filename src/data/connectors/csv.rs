use crate::error::{DashboardError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use super::types::DatasetMetadata;

/// File extensions accepted by the uploader
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Cell contents treated as missing, on top of empty fields
const NULL_MARKERS: [&str; 12] = [
    "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-nan", "null", "NULL", "None", "<NA>", "#NA",
];

pub struct CsvConnector;

impl CsvConnector {
    /// Load a delimited file with a header row into a DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        if !Self::has_accepted_extension(path) {
            return Err(DashboardError::DataLoading(format!(
                "Unsupported file type: {} (expected one of: {})",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            )));
        }

        let df = Self::read_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
            .map_err(|e| DashboardError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        log::info!(
            "Loaded {} ({} rows, {} columns)",
            path.display(),
            df.height(),
            df.width()
        );
        Ok(df)
    }

    /// Parse an in-memory upload
    pub fn read_bytes(bytes: impl Into<Vec<u8>>) -> Result<DataFrame> {
        let df = Self::read_options()
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()
            .map_err(|e| DashboardError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    pub fn has_accepted_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }

    /// Create metadata for a loaded DataFrame
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> DatasetMetadata {
        DatasetMetadata {
            file_name: path
                .as_ref()
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns: df.get_column_names().iter().map(|s| s.to_string()).collect(),
        }
    }

    fn read_options() -> CsvReadOptions {
        let null_values = NullValues::AllColumns(
            NULL_MARKERS.iter().map(|marker| (*marker).into()).collect(),
        );

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .map_parse_options(|opts| opts.with_null_values(Some(null_values.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bytes_with_header() {
        let csv = "CustomerID,Age,Gender\n1,34,Male\n2,,Female\n3,NA,Other\n";
        let df = CsvConnector::read_bytes(csv).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("Age").unwrap().null_count(), 2);
    }

    #[test]
    fn test_accepted_extensions() {
        assert!(CsvConnector::has_accepted_extension(Path::new("sales.csv")));
        assert!(CsvConnector::has_accepted_extension(Path::new("sales.TXT")));
        assert!(!CsvConnector::has_accepted_extension(Path::new("sales.xlsx")));
        assert!(!CsvConnector::has_accepted_extension(Path::new("sales")));
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let result = CsvConnector::load("customers.xlsx");
        assert!(matches!(result, Err(DashboardError::DataLoading(_))));
    }

    #[test]
    fn test_create_metadata() {
        let df = CsvConnector::read_bytes("a,b\n1,2\n3,4\n").unwrap();
        let metadata = CsvConnector::create_metadata("/tmp/upload.csv", &df);

        assert_eq!(metadata.file_name, "upload.csv");
        assert_eq!(metadata.num_rows, 2);
        assert_eq!(metadata.columns, vec!["a".to_string(), "b".to_string()]);
    }
}
