pub mod connectors;
pub mod preprocess;
pub mod table;

pub use connectors::{CsvConnector, ACCEPTED_EXTENSIONS, DataPreview, DatasetMetadata, RequiredColumn, SchemaValidator, ValidationReport};
pub use preprocess::Preprocessor;
pub use table::{CleanedGender, CleaningStats, PurchaseDate, Transaction, TransactionTable};
