use crate::config::{BandwidthMode, DensityConfig};
use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use crate::engines::summary::{NumericColumn, SummaryCalculator};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};

/// Gaussian kernel density estimate of customer age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityChart {
    pub points: Vec<[f64; 2]>,
    /// Kernel standard deviation actually used
    pub bandwidth: f64,
    /// Adjustment applied on top of Scott's rule
    pub bw_adjust: f64,
    /// Coefficient-of-variation factor, reported even when not applied
    pub adaptive_adjust: f64,
    pub mode: BandwidthMode,
    pub x_label: String,
    pub y_label: String,
}

pub fn age_density(table: &TransactionTable, config: &DensityConfig) -> Result<DensityChart> {
    let ages = NumericColumn::Age.values(table);
    if ages.is_empty() {
        return Err(DashboardError::EmptyData("no ages to estimate a density from".to_string()));
    }

    let summary = SummaryCalculator::from_values(&ages)?;
    if summary.std_dev <= 0.0 {
        return Err(DashboardError::Degenerate(format!(
            "all {} ages are equal to {}, density is undefined",
            summary.count, summary.min
        )));
    }

    let adaptive_adjust = (summary.std_dev / summary.mean).clamp(0.3, 1.0);
    let bw_adjust = match config.bandwidth_mode {
        BandwidthMode::Fixed => config.bw_adjust,
        BandwidthMode::Adaptive => adaptive_adjust,
    };
    if config.bandwidth_mode == BandwidthMode::Fixed {
        log::debug!(
            "Using fixed bandwidth adjustment {} (adaptive would be {:.3})",
            bw_adjust,
            adaptive_adjust
        );
    }

    let scott_factor = (ages.len() as f64).powf(-0.2);
    let bandwidth = summary.std_dev * scott_factor * bw_adjust;

    let kernel = Normal::new(0.0, 1.0)
        .map_err(|e| DashboardError::Computation(format!("Invalid kernel: {}", e)))?;

    let lo = summary.min - config.cut * bandwidth;
    let hi = summary.max + config.cut * bandwidth;
    let steps = config.grid_size.max(2) - 1;
    let step = (hi - lo) / steps as f64;
    let norm = 1.0 / (ages.len() as f64 * bandwidth);

    let points = (0..=steps)
        .map(|i| {
            let x = lo + step * i as f64;
            let density: f64 = ages
                .iter()
                .map(|&age| kernel.pdf((x - age) / bandwidth))
                .sum();
            [x, density * norm]
        })
        .collect();

    Ok(DensityChart {
        points,
        bandwidth,
        bw_adjust,
        adaptive_adjust,
        mode: config.bandwidth_mode,
        x_label: "Age".to_string(),
        y_label: "Density".to_string(),
    })
}
