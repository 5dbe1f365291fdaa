use crate::config::DashboardConfig;
use crate::data::{CsvConnector, DatasetMetadata};
use crate::engines::{DashboardReport, ReportBuilder};
use crate::error::Result;
use std::path::Path;

pub struct DataLoader;

impl DataLoader {
    /// Load an upload from disk and run the whole pipeline on it
    pub fn load_report(path: &Path, config: &DashboardConfig) -> Result<(DatasetMetadata, DashboardReport)> {
        let df = CsvConnector::load(path)?;
        let metadata = CsvConnector::create_metadata(path, &df);
        let report = ReportBuilder::new(config).from_frame(&df)?;

        Ok((metadata, report))
    }
}
