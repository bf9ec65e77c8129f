/// File panel: file selection and details of the picked file.
use crate::state::{AppPhase, AppState};
use crate::theme::FileAgentTheme;
use fileagent_core::analysis::{classify, file_types, mime_type_for};
use fileagent_core::model::size::format_size;
use egui::Ui;

/// Draw the file panel (left sidebar content).
pub fn file_panel(ui: &mut Ui, state: &mut AppState, theme: &FileAgentTheme) {
    let color_muted = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.heading("Select a file");
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new("Type a path or drop a file onto the window")
            .size(11.0)
            .color(color_muted)
            .italics(),
    );
    ui.add_space(6.0);

    let busy = state.phase == AppPhase::Analysing;
    let edit = ui.add_enabled(
        !busy,
        egui::TextEdit::singleline(&mut state.path_input)
            .hint_text("/path/to/file")
            .desired_width(f32::INFINITY),
    );
    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let analyse = ui.add_enabled(
            state.can_analyse(),
            egui::Button::new("▶ Analyse").min_size(egui::vec2(90.0, 28.0)),
        );
        if analyse.clicked() || (submitted && state.can_analyse()) {
            state.start_from_input();
        }
        let has_file = state.imported.is_some() || state.report.is_some();
        if ui
            .add_enabled(has_file && !busy, egui::Button::new("✖ Clear"))
            .on_hover_text("Forget this file")
            .clicked()
        {
            state.clear();
        }
    });

    // ── Selected file ─────────────────────────────────────────────────────
    if let Some(ref file) = state.imported {
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(4.0);

        let name = file.descriptor.name.as_str();
        let category = classify(name);
        ui.label(
            egui::RichText::new(name)
                .size(14.0)
                .strong()
                .color(color_normal),
        );
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(file.local_path.display().to_string())
                .size(11.0)
                .color(color_muted),
        );
        ui.add_space(6.0);

        egui::Grid::new("file_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Size:").color(color_muted));
                ui.label(
                    egui::RichText::new(format_size(file.descriptor.size_bytes))
                        .color(theme.accent)
                        .strong(),
                );
                ui.end_row();

                ui.label(egui::RichText::new("Type:").color(color_muted));
                ui.label(
                    egui::RichText::new(category.label()).color(theme.category_color(category)),
                );
                ui.end_row();

                ui.label(egui::RichText::new("MIME:").color(color_muted));
                ui.label(
                    egui::RichText::new(mime_type_for(name).unwrap_or("unknown"))
                        .color(color_normal),
                );
                ui.end_row();

                if let Some(modified) = file.descriptor.modified_display() {
                    ui.label(egui::RichText::new("Modified:").color(color_muted));
                    ui.label(egui::RichText::new(modified).color(color_normal));
                    ui.end_row();
                }
            });

        if !file_types::is_supported(name) {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Not a supported file type")
                    .size(11.0)
                    .color(theme.warning)
                    .italics(),
            );
        }
    }

    // ── Supported types ───────────────────────────────────────────────────
    ui.add_space(12.0);
    ui.separator();
    egui::CollapsingHeader::new("Supported types")
        .default_open(false)
        .show(ui, |ui| {
            for mime in file_types::SUPPORTED_MIME_TYPES {
                ui.label(egui::RichText::new(*mime).size(11.0).monospace());
            }
        });
}
