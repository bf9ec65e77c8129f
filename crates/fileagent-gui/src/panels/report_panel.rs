/// Report panel: the rendered report, or a placeholder while there is none.
use crate::state::{AppPhase, AppState};
use crate::theme::FileAgentTheme;
use egui::Ui;

/// Notices shown under the report, newest first.
const VISIBLE_NOTICES: usize = 5;

/// Draw the report panel (central area).
pub fn report_panel(ui: &mut Ui, state: &mut AppState, theme: &FileAgentTheme) {
    let color_muted = ui.visuals().weak_text_color();

    match state.phase {
        AppPhase::Analysing => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.add_space(8.0);
                let name = state
                    .imported
                    .as_ref()
                    .map(|f| f.descriptor.name.clone())
                    .unwrap_or_else(|| state.path_input.clone());
                ui.label(
                    egui::RichText::new(format!("Analysing {name}..."))
                        .size(13.0)
                        .color(color_muted),
                );
                ui.add_space(8.0);
                if ui.button("⏹ Cancel").clicked() {
                    state.cancel_analysis();
                }
            });
        }
        AppPhase::Idle | AppPhase::Results => match state.report {
            Some(ref report) => {
                ui.horizontal(|ui| {
                    let color = theme.category_color(report.category);
                    ui.label(
                        egui::RichText::new(format!(" {} ", report.category.label()))
                            .size(12.0)
                            .strong()
                            .color(theme.background)
                            .background_color(color),
                    );
                    ui.label(
                        egui::RichText::new(&report.descriptor.name)
                            .size(15.0)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("📋 Copy")
                            .on_hover_text("Copy the report text")
                            .clicked()
                        {
                            ui.ctx().copy_text(report.text().to_owned());
                        }
                    });
                });
                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);

                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - 120.0).max(80.0))
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(report.text()).monospace().size(13.0));
                    });
            }
            None => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    let hint = if state.was_cancelled {
                        "Analysis cancelled"
                    } else {
                        "No file selected"
                    };
                    ui.label(egui::RichText::new(hint).size(16.0).color(color_muted));
                });
            }
        },
    }

    // ── Notices ───────────────────────────────────────────────────────────
    if state.notices.is_empty() {
        return;
    }
    ui.add_space(8.0);
    ui.separator();
    for notice in state.notices.iter().rev().take(VISIBLE_NOTICES) {
        ui.label(
            egui::RichText::new(&notice.text)
                .size(11.0)
                .color(theme.notice_color(notice.level)),
        );
    }
}
