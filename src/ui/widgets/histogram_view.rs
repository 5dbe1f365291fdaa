use crate::config::ChartTheme;
use crate::engines::charts::HistogramChart;
use egui_plot::{Bar, BarChart, GridMark, Plot};
use super::{chart_frame, rgb, RotatedTickLabels, TickAlign};

pub struct HistogramView;

impl HistogramView {
    pub fn show(ui: &mut egui::Ui, chart: &HistogramChart, theme: &ChartTheme) {
        let color = rgb(theme.primary_color());
        let bars: Vec<Bar> = chart
            .bins
            .iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.count as f64)
                    .width(bin.width())
                    .fill(color)
                    .name(bin.range_label())
            })
            .collect();

        let edges = chart.edges.clone();
        let step = chart.bins.first().map(|b| b.width()).unwrap_or(1.0);
        let integer_ticks = chart.integer_y_ticks;
        let ticks: Vec<(f64, String)> = chart
            .edges
            .iter()
            .map(|&edge| (edge, format!("{:.1}", edge)))
            .collect();

        chart_frame(theme).show(ui, |ui| {
            let response = Plot::new("purchase_histogram")
                .height(240.0)
                .show_axes([false, true])
                .y_axis_label(chart.y_label.as_str())
                .show_grid(theme.show_grid())
                .include_y(0.0)
                .x_grid_spacer(move |_input| {
                    edges
                        .iter()
                        .map(|&value| GridMark { value, step_size: step })
                        .collect()
                })
                .y_axis_formatter(move |mark, _range| {
                    if integer_ticks && mark.value.fract().abs() > f64::EPSILON {
                        String::new()
                    } else {
                        format!("{:.0}", mark.value)
                    }
                })
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Count", bars).color(color));
                });

            RotatedTickLabels {
                ticks: &ticks,
                angle_deg: chart.tick_rotation_deg,
                font_size: theme.small_font_size,
                title_font_size: theme.label_font_size,
                align: TickAlign::Center,
                axis_title: &chart.x_label,
            }
            .show(ui, &response.transform);
        });
    }
}
