use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeStyle {
    DarkGrid,
    WhiteGrid,
    Dark,
    White,
}

/// Visual settings handed to every chart builder and widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub style: ThemeStyle,
    /// RGB colours, cycled for pie slices and bars
    pub palette: Vec<[u8; 3]>,
    pub tick_rotation_deg: f32,
    pub pie_start_angle_deg: f64,
    pub label_font_size: f32,
    pub small_font_size: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            style: ThemeStyle::DarkGrid,
            // Reversed purple-blue-green ramp, dark to light
            palette: vec![
                [1, 108, 89],
                [2, 129, 138],
                [54, 144, 192],
                [103, 169, 207],
                [166, 189, 219],
                [208, 209, 230],
            ],
            tick_rotation_deg: 45.0,
            pie_start_angle_deg: 140.0,
            label_font_size: 12.0,
            small_font_size: 9.0,
        }
    }
}

impl ChartTheme {
    pub fn palette_color(&self, index: usize) -> [u8; 3] {
        if self.palette.is_empty() {
            return [128, 128, 128];
        }
        self.palette[index % self.palette.len()]
    }

    pub fn primary_color(&self) -> [u8; 3] {
        self.palette_color(0)
    }

    pub fn background_color(&self) -> [u8; 3] {
        match self.style {
            ThemeStyle::DarkGrid | ThemeStyle::Dark => [234, 234, 242],
            ThemeStyle::WhiteGrid | ThemeStyle::White => [255, 255, 255],
        }
    }

    pub fn show_grid(&self) -> bool {
        matches!(self.style, ThemeStyle::DarkGrid | ThemeStyle::WhiteGrid)
    }
}

impl ConfigSection for ChartTheme {
    fn section_name() -> &'static str {
        "theme"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.palette.is_empty() {
            return Err(DashboardError::Configuration(
                "Theme palette must contain at least one colour".to_string()
            ));
        }
        if !(-90.0..=90.0).contains(&self.tick_rotation_deg) {
            return Err(DashboardError::Configuration(
                "Tick rotation must be between -90 and 90 degrees".to_string()
            ));
        }
        if self.label_font_size <= 0.0 || self.small_font_size <= 0.0 {
            return Err(DashboardError::Configuration(
                "Font sizes must be positive".to_string()
            ));
        }
        Ok(())
    }
}
