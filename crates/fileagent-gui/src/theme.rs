/// Colour scheme and visual theme for FileAgent.
///
/// Provides both dark and light themes. All colour constants are defined
/// here so the rest of the UI code references semantically-named values
/// rather than raw hex codes.
use crate::state::NoticeLevel;
use egui::{Color32, Stroke, Visuals};
use fileagent_core::analysis::FileCategory;

/// Semantic colour palette for FileAgent.
pub struct FileAgentTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    /// Badge colours, one per category in `FileCategory` declaration order.
    category_colors: [Color32; 7],
}

impl FileAgentTheme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_secondary: Color32::from_rgb(0xb8, 0xb8, 0xc4),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            selection: Color32::from_rgb(0x28, 0x3a, 0x5c),
            category_colors: [
                Color32::from_rgb(0xf5, 0xc2, 0xe7), // image
                Color32::from_rgb(0xcb, 0xa6, 0xf7), // video
                Color32::from_rgb(0x94, 0xe2, 0xd5), // audio
                Color32::from_rgb(0x89, 0xb4, 0xfa), // text
                Color32::from_rgb(0xf9, 0xe2, 0xaf), // document
                Color32::from_rgb(0xfa, 0xb3, 0x87), // archive
                Color32::from_rgb(0x6c, 0x70, 0x86), // unknown
            ],
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_secondary: Color32::from_rgb(0x4a, 0x4a, 0x5a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x3a, 0x6f, 0xd8, 0x30),
            category_colors: [
                Color32::from_rgb(0xc0, 0x40, 0x90),
                Color32::from_rgb(0x80, 0x50, 0xc0),
                Color32::from_rgb(0x20, 0x90, 0x80),
                Color32::from_rgb(0x3a, 0x6f, 0xd8),
                Color32::from_rgb(0xc0, 0x98, 0x20),
                Color32::from_rgb(0xd0, 0x70, 0x20),
                Color32::from_rgb(0x8a, 0x8a, 0x9a),
            ],
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Badge colour for a file category.
    pub fn category_color(&self, category: FileCategory) -> Color32 {
        let i = match category {
            FileCategory::Image => 0,
            FileCategory::Video => 1,
            FileCategory::Audio => 2,
            FileCategory::Text => 3,
            FileCategory::Document => 4,
            FileCategory::Archive => 5,
            FileCategory::Unknown => 6,
        };
        self.category_colors[i]
    }

    /// Text colour for a notice.
    pub fn notice_color(&self, level: NoticeLevel) -> Color32 {
        match level {
            NoticeLevel::Info => self.success,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}
