use crate::config::ChartTheme;
use crate::engines::charts::DensityChart;
use egui_plot::{Line, Plot, PlotPoints};
use super::{chart_frame, rgb};

pub struct DensityView;

impl DensityView {
    pub fn show(ui: &mut egui::Ui, chart: &DensityChart, theme: &ChartTheme) {
        let color = rgb(theme.primary_color());

        chart_frame(theme).show(ui, |ui| {
            Plot::new("age_density")
                .height(260.0)
                .x_axis_label(chart.x_label.as_str())
                .y_axis_label(chart.y_label.as_str())
                .show_grid(theme.show_grid())
                .include_y(0.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new("Density", PlotPoints::from(chart.points.clone()))
                            .color(color)
                            .fill(0.0_f32),
                    );
                });
        });
    }
}
