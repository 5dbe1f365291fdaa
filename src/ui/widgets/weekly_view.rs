use crate::config::ChartTheme;
use crate::engines::charts::WeeklyBarChart;
use egui_plot::{Bar, BarChart, Plot};
use super::{chart_frame, rgb, RotatedTickLabels, TickAlign};

pub struct WeeklyView;

impl WeeklyView {
    pub fn show(ui: &mut egui::Ui, chart: &WeeklyBarChart, theme: &ChartTheme) {
        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.total)
                    .width(0.8)
                    .fill(rgb(theme.palette_color(i)))
                    .name(bar.label())
            })
            .collect();
        let ticks: Vec<(f64, String)> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| (i as f64, bar.label()))
            .collect();

        chart_frame(theme).show(ui, |ui| {
            let response = Plot::new("weekly_totals")
                .height(280.0)
                .show_axes([false, true])
                .y_axis_label(chart.y_label.as_str())
                .show_grid(theme.show_grid())
                .include_y(0.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Total $", bars));
                });

            RotatedTickLabels {
                ticks: &ticks,
                angle_deg: chart.label_rotation_deg,
                font_size: chart.label_font_size,
                title_font_size: theme.label_font_size,
                align: TickAlign::Right,
                axis_title: &chart.x_label,
            }
            .show(ui, &response.transform);
        });

        if chart.unassigned_total != 0.0 {
            ui.label(
                egui::RichText::new(format!(
                    "${:.2} from purchases with an invalid date is not shown.",
                    chart.unassigned_total
                ))
                .italics()
                .small(),
            );
        }
    }
}
