use serde::{Deserialize, Serialize};

/// Columns every transactions upload must carry, matched case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    CustomerId,
    Age,
    Gender,
    ProductCategory,
    PurchaseAmount,
    PurchaseDate,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerId => "CustomerID",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::ProductCategory => "ProductCategory",
            Self::PurchaseAmount => "PurchaseAmount",
            Self::PurchaseDate => "PurchaseDate",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::CustomerId,
            Self::Age,
            Self::Gender,
            Self::ProductCategory,
            Self::PurchaseAmount,
            Self::PurchaseDate,
        ]
    }
}

impl std::fmt::Display for RequiredColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata about a loaded upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_name: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
}

/// Data preview for UI display
#[derive(Debug, Clone)]
pub struct DataPreview {
    pub columns: Vec<String>,
    pub first_rows: Vec<Vec<String>>,
    pub total_rows: usize,
}
