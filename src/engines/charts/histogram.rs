use crate::config::ChartTheme;
use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use crate::engines::summary::NumericColumn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn range_label(&self) -> String {
        format!("{:.2} to {:.2}", self.start, self.end)
    }
}

/// Purchase amount histogram, ticks at every bin edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    pub bins: Vec<HistogramBin>,
    pub edges: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub tick_rotation_deg: f32,
    pub integer_y_ticks: bool,
}

impl HistogramChart {
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Sturges' rule: ceil(log2(n) + 1), never below one bin
pub fn sturges_bin_count(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((n as f64).log2() + 1.0).ceil().max(1.0) as usize
}

pub fn purchase_histogram(table: &TransactionTable, theme: &ChartTheme) -> Result<HistogramChart> {
    let values = NumericColumn::PurchaseAmount.values(table);
    if values.is_empty() {
        return Err(DashboardError::EmptyData(
            "no purchase amounts to bin".to_string(),
        ));
    }

    let bin_count = sturges_bin_count(values.len());
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| if i == bin_count { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bin_count];
    for v in &values {
        // Last bin is closed on the right
        let idx = (((v - lo) / width).floor() as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: edges[i],
            end: edges[i + 1],
            count,
        })
        .collect();

    log::debug!("Histogram over {} values with {} bins", values.len(), bin_count);

    Ok(HistogramChart {
        bins,
        edges,
        x_label: "Amount in $".to_string(),
        y_label: "Count".to_string(),
        tick_rotation_deg: theme.tick_rotation_deg,
        integer_y_ticks: true,
    })
}
