use crate::config::ChartTheme;
use crate::engines::DashboardReport;
use crate::error::DashboardError;
use crate::ui::state::AppState;
use crate::ui::widgets::{show_chart_error, DensityView, HistogramView, PieView, PreviewTable, WeeklyView};

const PIE_SIZE: f32 = 300.0;

pub struct ReportPanel;

impl ReportPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        if let Some(error) = &state.upload_error {
            Self::show_upload_failure(ui, error);
            return;
        }

        match &state.report {
            Some(report) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Self::show_report(ui, report, &state.config.theme);
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Upload a CSV file to build the dashboard.");
                });
            }
        }
    }

    fn show_upload_failure(ui: &mut egui::Ui, error: &DashboardError) {
        if let Some(missing) = error.missing_columns() {
            ui.colored_label(
                egui::Color32::from_rgb(200, 140, 0),
                format!(
                    "Warning: The following required columns are missing: {}",
                    missing.join(", ")
                ),
            );
        } else {
            ui.colored_label(egui::Color32::from_rgb(200, 140, 0), error.to_string());
        }
        ui.add_space(8.0);
        ui.heading(
            egui::RichText::new("Error: data does not match specified format, please ensure a valid upload")
                .color(egui::Color32::RED),
        );
    }

    fn show_report(ui: &mut egui::Ui, report: &DashboardReport, theme: &ChartTheme) {
        ui.strong("Preview of Data");
        PreviewTable::show(ui, &report.preview);

        ui.add_space(12.0);
        ui.heading("Customer Demographics");
        ui.separator();

        ui.columns(2, |columns| {
            let left = &mut columns[0];
            left.label(egui::RichText::new("Age Distribution").size(16.0).strong());
            if let Ok(summary) = &report.age_summary {
                left.label(
                    egui::RichText::new(format!("The typical customer is {:.0} years old.", summary.median))
                        .italics(),
                );
            }
            match &report.age_density {
                Ok(chart) => DensityView::show(left, chart, theme),
                Err(e) => show_chart_error(left, e),
            }
            match &report.age_summary {
                Ok(s) => {
                    left.label(
                        egui::RichText::new(format!(
                            "Mean: {:.0}, Median: {:.0}, Min: {}, Max: {}, Standard Deviation: {:.1}",
                            s.mean, s.median, s.min, s.max, s.std_dev
                        ))
                        .italics(),
                    );
                }
                Err(e) => show_chart_error(left, e),
            }

            let right = &mut columns[1];
            right.label(egui::RichText::new("Gender Distribution").size(16.0).strong());
            match &report.gender_pie {
                Ok(chart) => PieView::show(right, chart, theme, PIE_SIZE),
                Err(e) => show_chart_error(right, e),
            }
        });

        ui.add_space(12.0);
        ui.heading("Historical Purchase Data");
        ui.separator();

        ui.label(egui::RichText::new("Purchases over Time").size(16.0).strong());
        match &report.purchases_over_time {
            Ok(chart) => WeeklyView::show(ui, chart, theme),
            Err(e) => show_chart_error(ui, e),
        }

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            left.label(egui::RichText::new("Purchase By $ Spent").size(16.0).strong());
            match &report.purchase_histogram {
                Ok(chart) => HistogramView::show(left, chart, theme),
                Err(e) => show_chart_error(left, e),
            }

            let right = &mut columns[1];
            right.label(egui::RichText::new("Purchases by Category").size(16.0).strong());
            match &report.category_pie {
                Ok(chart) => PieView::show(right, chart, theme, PIE_SIZE),
                Err(e) => show_chart_error(right, e),
            }
        });
    }
}
