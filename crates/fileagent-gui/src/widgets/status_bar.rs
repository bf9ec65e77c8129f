/// Bottom status bar: request progress and the latest notice.
use crate::state::{AppPhase, AppState};
use crate::theme::FileAgentTheme;
use egui::Ui;
use fileagent_core::model::size::{format_count, format_size};

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &FileAgentTheme) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                let (text, color) = if state.was_cancelled {
                    ("\u{23f9} Cancelled", theme.warning)
                } else {
                    ("Ready", color_weak)
                };
                ui.label(egui::RichText::new(text).size(12.0).color(color));
            }
            AppPhase::Analysing => {
                ui.spinner();
                let display_path = truncate_path(&state.path_input, 60);
                ui.label(
                    egui::RichText::new(format!("Analysing {display_path}..."))
                        .size(12.0)
                        .color(color_normal),
                );
            }
            AppPhase::Results => {
                if let Some(ref report) = state.report {
                    let (text, color) = if report.is_degraded() {
                        ("\u{26a0} Report ready (partial)", theme.warning)
                    } else {
                        ("\u{2713} Report ready", theme.success)
                    };
                    ui.label(egui::RichText::new(text).size(12.0).color(color));

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format_size(report.descriptor.size_bytes))
                            .size(12.0)
                            .color(theme.accent),
                    );

                    if let Some(stats) = report.text_stats {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} lines",
                                format_count(stats.line_count)
                            ))
                            .size(12.0)
                            .color(color_normal),
                        );
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} words",
                                format_count(stats.word_count)
                            ))
                            .size(12.0)
                            .color(color_normal),
                        );
                    }

                    if let Some(duration) = state.analysis_duration {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{:.1} ms", duration.as_secs_f64() * 1000.0))
                                .size(12.0)
                                .color(color_weak),
                        );
                    }
                }
            }
        }

        if let Some(notice) = state.latest_notice() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(truncate_path(&notice.text, 80))
                        .size(11.0)
                        .color(theme.notice_color(notice.level)),
                );
            });
        }
    });
}

/// Truncate a string to at most `max_chars` characters, replacing the
/// middle with "..." if needed.
pub fn truncate_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_string();
    }
    let half = max_chars.saturating_sub(3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}
