use crate::config::ChartTheme;
use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    /// Counter-clockwise from the positive x axis
    pub start_angle_deg: f64,
    pub sweep_deg: f64,
    pub color: [u8; 3],
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_deg / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: usize,
}

pub fn category_pie(table: &TransactionTable, theme: &ChartTheme) -> Result<PieChart> {
    let labels = table.iter().map(|t| t.product_category.as_str());
    pie_from_labels(labels, theme)
        .ok_or_else(|| DashboardError::EmptyData("no product categories to plot".to_string()))
}

pub fn gender_pie(table: &TransactionTable, theme: &ChartTheme) -> Result<PieChart> {
    let labels = table.iter().map(|t| t.cleaned_gender.as_str());
    pie_from_labels(labels, theme)
        .ok_or_else(|| DashboardError::EmptyData("no genders to plot".to_string()))
}

/// Count labels and lay slices out by descending count, ties broken by label.
fn pie_from_labels<'a>(labels: impl Iterator<Item = &'a str>, theme: &ChartTheme) -> Option<PieChart> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return None;
    }

    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut angle = theme.pie_start_angle_deg;
    let slices = ordered
        .into_iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let fraction = count as f64 / total as f64;
            let sweep = fraction * 360.0;
            let slice = PieSlice {
                label: label.to_string(),
                count,
                fraction,
                start_angle_deg: angle,
                sweep_deg: sweep,
                color: theme.palette_color(i),
            };
            angle += sweep;
            slice
        })
        .collect();

    Some(PieChart { slices, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_ordered_by_count() {
        let theme = ChartTheme::default();
        let labels = ["Toys", "Books", "Toys", "Garden", "Books", "Toys"];
        let chart = pie_from_labels(labels.into_iter(), &theme).unwrap();

        let order: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(order, vec!["Toys", "Books", "Garden"]);
        assert_eq!(chart.total, 6);
        assert_eq!(chart.slices[0].percent_label(), "50.0%");
        assert_eq!(chart.slices[2].percent_label(), "16.7%");
    }

    #[test]
    fn test_first_slice_starts_at_theme_angle() {
        let theme = ChartTheme::default();
        let chart = pie_from_labels(["a", "b"].into_iter(), &theme).unwrap();

        assert_eq!(chart.slices[0].start_angle_deg, 140.0);
        assert_eq!(chart.slices[1].start_angle_deg, 320.0);
        let swept: f64 = chart.slices.iter().map(|s| s.sweep_deg).sum();
        assert!((swept - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_labels_yield_nothing() {
        let theme = ChartTheme::default();
        assert!(pie_from_labels(std::iter::empty(), &theme).is_none());
    }
}
