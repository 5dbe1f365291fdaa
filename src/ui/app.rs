use super::panels::{ReportPanel, UploadPanel};
use super::state::AppState;
use crate::config::DashboardConfig;

pub struct DashboardApp {
    state: AppState,
    upload_panel: UploadPanel,
    report_panel: ReportPanel,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::with_config(DashboardConfig::default())
    }
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        // Charts sit on light panels
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
            upload_panel: UploadPanel::new(),
            report_panel: ReportPanel::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("upload_panel").show(ctx, |ui| {
            self.upload_panel.show(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.report_panel.show(ui, &self.state);
        });
    }
}
