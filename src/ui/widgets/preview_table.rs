use crate::data::DataPreview;

pub struct PreviewTable;

impl PreviewTable {
    pub fn show(ui: &mut egui::Ui, preview: &DataPreview) {
        ui.label(format!(
            "Showing {} of {} rows",
            preview.first_rows.len(),
            preview.total_rows
        ));

        egui::ScrollArea::horizontal()
            .id_salt("data_preview_scroll")
            .show(ui, |ui| {
                egui::Grid::new("data_preview_grid")
                    .striped(true)
                    .show(ui, |ui| {
                        // Header
                        for col_name in &preview.columns {
                            ui.strong(col_name);
                        }
                        ui.end_row();

                        // Rows
                        for row in &preview.first_rows {
                            for cell in row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
