use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median, Statistics};

/// Numeric columns of the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericColumn {
    Age,
    PurchaseAmount,
}

impl NumericColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::PurchaseAmount => "PurchaseAmount",
        }
    }

    pub fn values(&self, table: &TransactionTable) -> Vec<f64> {
        match self {
            Self::Age => table.iter().map(|t| t.age).collect(),
            Self::PurchaseAmount => table.iter().map(|t| t.purchase_amount).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; 0.0 for a single value
    pub std_dev: f64,
}

pub struct SummaryCalculator;

impl SummaryCalculator {
    pub fn summarize(table: &TransactionTable, column: NumericColumn) -> Result<Summary> {
        let values = column.values(table);
        Self::from_values(&values).map_err(|e| match e {
            DashboardError::EmptyData(_) => DashboardError::EmptyData(format!(
                "no {} values to summarize",
                column.as_str()
            )),
            other => other,
        })
    }

    pub fn from_values(values: &[f64]) -> Result<Summary> {
        if values.is_empty() {
            return Err(DashboardError::EmptyData("no values to summarize".to_string()));
        }

        let std_dev = if values.len() < 2 {
            0.0
        } else {
            Statistics::std_dev(values)
        };

        let summary = Summary {
            count: values.len(),
            mean: Statistics::mean(values),
            median: Data::new(values.to_vec()).median(),
            min: Statistics::min(values),
            max: Statistics::max(values),
            std_dev,
        };

        if !summary.mean.is_finite() || !summary.std_dev.is_finite() {
            return Err(DashboardError::Computation(format!(
                "non-finite statistics over {} values",
                values.len()
            )));
        }

        Ok(summary)
    }
}
