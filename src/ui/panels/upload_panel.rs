use crate::data::ACCEPTED_EXTENSIONS;
use crate::ui::services::DataLoader;
use crate::ui::state::AppState;

pub struct UploadPanel;

impl UploadPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.heading("Customer Data Dashboard");
            ui.separator();

            if ui.button("Upload valid CSV file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV Files", &ACCEPTED_EXTENSIONS)
                    .pick_file()
                {
                    let outcome = DataLoader::load_report(&path, &state.config);
                    state.apply_upload(path, outcome);
                }
            }

            match state.file_name() {
                Some(name) => ui.label(format!("File: {}", name)),
                None => ui.label("No data loaded"),
            };
        });

        ui.label(&state.status_message);
    }
}
