//! FileAgent: pick a file, get a report on it.
//!
//! Thin binary entry point. All logic lives in the `fileagent-core`
//! and `fileagent-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use fileagent_core::config::{AnalyzerConfig, CONFIG_PATH_ENV};
use std::path::PathBuf;

/// Config file used when `FILEAGENT_CONFIG` is not set.
const DEFAULT_CONFIG_FILE: &str = "fileagent.json";

fn load_config() -> anyhow::Result<AnalyzerConfig> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = AnalyzerConfig::load(&path)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    config
        .apply_env()
        .context("applying FILEAGENT_* environment overrides")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialise structured logging.
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!(
        "FileAgent starting (encoding {:?}, locale {:?})",
        config.encoding,
        config.locale
    );

    let initial = std::env::args_os().nth(1).map(PathBuf::from);
    let icon = fileagent_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so a file given
    // on the command line is already being analysed on the first frame.
    let state = fileagent_gui::FileAgentState::build(config, initial);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FileAgent")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "FileAgent",
        options,
        Box::new(|cc| Ok(Box::new(fileagent_gui::FileAgentApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
