use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub rows: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { rows: 5 }
    }
}

impl ConfigSection for PreviewConfig {
    fn section_name() -> &'static str {
        "preview"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.rows == 0 {
            return Err(DashboardError::Configuration(
                "Preview must show at least one row".to_string()
            ));
        }
        Ok(())
    }
}
