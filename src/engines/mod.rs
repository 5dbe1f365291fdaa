pub mod charts;
pub mod report;
pub mod summary;

pub use report::{DashboardReport, ReportBuilder};
pub use summary::{NumericColumn, Summary, SummaryCalculator};
