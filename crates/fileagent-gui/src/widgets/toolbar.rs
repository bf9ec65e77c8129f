/// Top action bar -- analysis controls, theme toggle, and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use fileagent_core::config::ReportLocale;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📄 FileAgent")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let analyse_btn = ui.add_enabled(
            state.can_analyse(),
            egui::Button::new("▶ Analyse").min_size(egui::vec2(80.0, 28.0)),
        );
        if analyse_btn.clicked() {
            state.start_from_input();
        }

        let can_stop = state.phase == AppPhase::Analysing;
        let stop_btn = ui.add_enabled(
            can_stop,
            egui::Button::new("⏹ Stop").min_size(egui::vec2(70.0, 28.0)),
        );
        if stop_btn.clicked() {
            state.cancel_analysis();
        }

        // Re-run the last file, e.g. after switching the report language.
        let can_rerun = state.phase == AppPhase::Results;
        if ui
            .add_enabled(can_rerun, egui::Button::new("🔄 Re-run"))
            .on_hover_text(if can_rerun {
                "Analyse the same file again"
            } else {
                "Analyse a file first"
            })
            .clicked()
        {
            state.start_from_input();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About FileAgent").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            // ── Report language ───────────────────────────────────
            let (label, next) = match state.config.locale {
                ReportLocale::English => ("EN", ReportLocale::Arabic),
                ReportLocale::Arabic => ("AR", ReportLocale::English),
            };
            if ui
                .button(label)
                .on_hover_text("Report language for the next analysis")
                .clicked()
            {
                state.config.locale = next;
            }
        });
    });
}
