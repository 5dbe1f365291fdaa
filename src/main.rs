use custdash::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use custdash::ui::DashboardApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigManager::load_or_default(DEFAULT_CONFIG_FILE).get();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Customer Data Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Data Dashboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
