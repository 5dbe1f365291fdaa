use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

/// How the age density bandwidth adjustment is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandwidthMode {
    /// Constant `bw_adjust`
    Fixed,
    /// Coefficient of variation of the ages, clamped to [0.3, 1.0]
    Adaptive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    pub bandwidth_mode: BandwidthMode,
    pub bw_adjust: f64,
    pub grid_size: usize,
    /// Grid extends this many bandwidths past the data on each side
    pub cut: f64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            bandwidth_mode: BandwidthMode::Fixed,
            bw_adjust: 0.5,
            grid_size: 200,
            cut: 3.0,
        }
    }
}

impl ConfigSection for DensityConfig {
    fn section_name() -> &'static str {
        "density"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.bw_adjust <= 0.0 {
            return Err(DashboardError::Configuration(
                "Bandwidth adjustment must be positive".to_string()
            ));
        }
        if self.grid_size < 2 {
            return Err(DashboardError::Configuration(
                "Density grid needs at least 2 points".to_string()
            ));
        }
        if self.cut < 0.0 {
            return Err(DashboardError::Configuration(
                "Density cut must not be negative".to_string()
            ));
        }
        Ok(())
    }
}
