/// FileAgent Core: classification, text statistics, and report assembly.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, mobile).
///
/// # Modules
///
/// - [`model`]: Per-request file snapshot and size formatting.
/// - [`analysis`]: Extension classifier, text statistics, category analyzers.
/// - [`report`]: Fixed-order report builder with localised labels.
/// - [`intake`]: Copying picked files into app-private storage.
/// - [`worker`]: Background request execution with cancellation.
/// - [`config`]: Analyzer settings.
pub mod analysis;
pub mod config;
pub mod error;
pub mod intake;
pub mod model;
pub mod report;
pub mod worker;

pub use config::AnalyzerConfig;
pub use report::{Report, ReportBuilder};
pub use worker::{start_analysis, AnalysisHandle, AnalysisRequest};
