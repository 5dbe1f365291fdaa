use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing required columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("No data: {0}")]
    EmptyData(String),

    #[error("Degenerate data: {0}")]
    Degenerate(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl DashboardError {
    /// Names of the missing columns when the upload failed the schema check.
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            Self::SchemaMismatch { missing } => Some(missing),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
