/// Main `eframe::App` implementation for FileAgent.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::FileAgentTheme;
use crate::widgets;
use fileagent_core::AnalyzerConfig;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that a file
/// passed on the command line is already being analysed when the first
/// frame renders.
pub struct FileAgentState {
    pub(crate) inner: AppState,
}

impl FileAgentState {
    /// Build state from settings, optionally starting on `initial`.
    pub fn build(config: AnalyzerConfig, initial: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial {
            tracing::info!("Opening {} from the command line", path.display());
            state.start_analysis(path);
        }
        Self { inner: state }
    }

    /// Read access for callers that inspect startup state.
    pub fn state(&self) -> &AppState {
        &self.inner
    }
}

/// Font files tried in order for Arabic report labels.
const ARABIC_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/GeezaPro.ttc",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// The FileAgent application.
pub struct FileAgentApp {
    state: AppState,
}

impl FileAgentApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`FileAgentState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FileAgentState) -> Self {
        // ── Fonts: Arabic-capable fallback ────────────────────────────────
        // egui's bundled fonts have no Arabic glyphs. Register the first
        // system font found as a fallback so Arabic labels render.
        let mut fonts = egui::FontDefinitions::default();
        let loaded = ARABIC_FONT_CANDIDATES
            .iter()
            .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)));
        match loaded {
            Some((path, bytes)) => {
                fonts.font_data.insert(
                    "ArabicFallback".to_owned(),
                    egui::FontData::from_owned(bytes).into(),
                );
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    fonts
                        .families
                        .entry(family)
                        .or_default()
                        .push("ArabicFallback".to_owned());
                }
                tracing::info!("Loaded fallback font from {}", path);
            }
            None => {
                tracing::warn!("No Arabic-capable system font found -- using default fonts");
            }
        }
        cc.egui_ctx.set_fonts(fonts);

        FileAgentTheme::for_mode(state.inner.dark_mode).apply(&cc.egui_ctx);

        Self { state: state.inner }
    }

    /// Start a request for the first file dropped onto the window.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(path) = dropped.into_iter().find_map(|f| f.path) else {
            return;
        };
        // Starting a new request drops (and so cancels) the running one.
        self.state.start_analysis(path);
    }
}

impl eframe::App for FileAgentApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark_mode takes effect
        // immediately on the next rendered frame.
        let theme = FileAgentTheme::for_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_messages();

        if self.state.phase == AppPhase::Analysing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.handle_dropped_files(ctx);
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FileAgent")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📄 FileAgent")
                            .size(24.0)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Pick a file to see its size, date and type.\n\
                             Text files also get line, word and\n\
                             paragraph counts.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar: file selection ──────────────────────────────────
        egui::SidePanel::left("file_panel")
            .default_width(320.0)
            .min_width(260.0)
            .max_width(520.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::file_panel::file_panel(ui, &mut self.state, &theme);
                });
            });

        // ── Central panel: report ─────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            if hovering {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Drop the file to analyse it")
                            .size(18.0)
                            .color(theme.accent),
                    );
                });
                return;
            }
            panels::report_panel::report_panel(ui, &mut self.state, &theme);
        });
    }
}
