pub mod report_panel;
pub mod upload_panel;

pub use report_panel::ReportPanel;
pub use upload_panel::UploadPanel;
