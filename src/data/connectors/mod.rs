mod csv;
mod types;
mod validator;

pub use csv::{CsvConnector, ACCEPTED_EXTENSIONS};
pub use types::{DataPreview, DatasetMetadata, RequiredColumn};
pub use validator::{SchemaValidator, ValidationReport};
