pub mod axis_labels;
pub mod density_view;
pub mod histogram_view;
pub mod pie_view;
pub mod preview_table;
pub mod weekly_view;

pub use axis_labels::{RotatedTickLabels, TickAlign};
pub use density_view::DensityView;
pub use histogram_view::HistogramView;
pub use pie_view::PieView;
pub use preview_table::PreviewTable;
pub use weekly_view::WeeklyView;

use crate::config::ChartTheme;

pub(crate) fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

/// Light panel behind a chart, following the theme style
pub(crate) fn chart_frame(theme: &ChartTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(rgb(theme.background_color()))
        .inner_margin(egui::Margin::same(6))
}

/// Message shown in place of a chart that could not be built
pub(crate) fn show_chart_error(ui: &mut egui::Ui, error: &crate::error::DashboardError) {
    ui.colored_label(egui::Color32::from_rgb(180, 90, 0), format!("Chart unavailable: {}", error));
}
