use crate::config::DashboardConfig;
use crate::data::{CleaningStats, DataPreview, Preprocessor, TransactionTable};
use crate::error::Result;
use polars::prelude::DataFrame;
use super::charts::{self, DensityChart, HistogramChart, PieChart, WeeklyBarChart};
use super::summary::{NumericColumn, Summary, SummaryCalculator};

/// Everything the dashboard shows for one upload.
///
/// Each panel keeps its own result so an empty or degenerate chart does not
/// hide the others.
#[derive(Debug)]
pub struct DashboardReport {
    pub table: TransactionTable,
    pub preview: DataPreview,
    pub age_summary: Result<Summary>,
    pub age_density: Result<DensityChart>,
    pub gender_pie: Result<PieChart>,
    pub purchases_over_time: Result<WeeklyBarChart>,
    pub purchase_histogram: Result<HistogramChart>,
    pub category_pie: Result<PieChart>,
}

impl DashboardReport {
    pub fn stats(&self) -> CleaningStats {
        self.table.stats()
    }
}

pub struct ReportBuilder<'a> {
    config: &'a DashboardConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    /// Clean a raw upload and build its report; fails only on schema mismatch.
    pub fn from_frame(&self, df: &DataFrame) -> Result<DashboardReport> {
        let table = Preprocessor::clean(df)?;
        Ok(self.build(table))
    }

    pub fn build(&self, table: TransactionTable) -> DashboardReport {
        let theme = &self.config.theme;

        DashboardReport {
            preview: table.preview(self.config.preview.rows),
            age_summary: SummaryCalculator::summarize(&table, NumericColumn::Age),
            age_density: charts::age_density(&table, &self.config.density),
            gender_pie: charts::gender_pie(&table, theme),
            purchases_over_time: charts::purchases_over_time(&table, theme),
            purchase_histogram: charts::purchase_histogram(&table, theme),
            category_pie: charts::category_pie(&table, theme),
            table,
        }
    }
}
