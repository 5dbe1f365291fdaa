use crate::config::DashboardConfig;
use crate::data::DatasetMetadata;
use crate::engines::DashboardReport;
use crate::error::{DashboardError, Result};
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    pub config: DashboardConfig,

    // Upload
    pub data_file_path: Option<PathBuf>,
    pub metadata: Option<DatasetMetadata>,

    // Outcome of the latest upload; at most one of these is set
    pub report: Option<DashboardReport>,
    pub upload_error: Option<DashboardError>,

    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            data_file_path: None,
            metadata: None,
            report: None,
            upload_error: None,
            status_message: "Ready".to_string(),
        }
    }

    /// Replace whatever the previous upload produced with this one's outcome.
    pub fn apply_upload(
        &mut self,
        path: PathBuf,
        outcome: Result<(DatasetMetadata, DashboardReport)>,
    ) {
        self.data_file_path = Some(path);

        match outcome {
            Ok((metadata, report)) => {
                let stats = report.stats();
                self.status_message = format!(
                    "Loaded {} rows ({} dropped, {} invalid dates)",
                    report.table.len(),
                    stats.rows_dropped,
                    stats.invalid_dates
                );
                self.metadata = Some(metadata);
                self.report = Some(report);
                self.upload_error = None;
            }
            Err(e) => {
                log::warn!("Upload rejected: {}", e);
                self.status_message = format!("Error loading data: {}", e);
                self.metadata = None;
                self.report = None;
                self.upload_error = Some(e);
            }
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.data_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }
}
