/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The analysis thread communicates via a channel; state updates happen
/// in `process_messages()` which runs once per frame.
///
/// The state owns at most one `AnalysisHandle`. Replacing or dropping it
/// cancels the in-flight request, so closing the window never leaves work
/// running against a session that no longer exists.
use fileagent_core::intake::{self, ImportedFile};
use fileagent_core::model::size::format_size;
use fileagent_core::worker::progress::AnalysisMessage;
use fileagent_core::{AnalysisHandle, AnalysisRequest, AnalyzerConfig, Report};
use std::path::PathBuf;
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing running. A previous report may still be shown.
    Idle,
    /// A request is in flight.
    Analysing,
    /// A report is available.
    Results,
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message shown to the user, the desktop stand-in for a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Maximum worker messages drained from the channel per frame.
const MAX_MESSAGES_PER_FRAME: usize = 16;

/// Maximum notices retained; the oldest are evicted first.
pub const MAX_NOTICES: usize = 20;

/// All application state.
pub struct AppState {
    // ── Settings ───────────────────────────────────────
    pub config: AnalyzerConfig,

    // ── Selection ──────────────────────────────────────
    /// Path typed into (or dropped onto) the file field.
    pub path_input: String,
    /// Local file being analysed, once intake succeeded.
    pub imported: Option<ImportedFile>,

    // ── Analysis ───────────────────────────────────────
    pub phase: AppPhase,
    pub analysis_handle: Option<AnalysisHandle>,
    pub analysis_duration: Option<Duration>,
    /// True if the most recent request was cancelled.
    pub was_cancelled: bool,

    // ── Results ────────────────────────────────────────
    pub report: Option<Report>,
    pub notices: Vec<Notice>,

    // ── UI state ───────────────────────────────────────
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            path_input: String::new(),
            imported: None,
            phase: AppPhase::Idle,
            analysis_handle: None,
            analysis_duration: None,
            was_cancelled: false,
            report: None,
            notices: Vec::new(),
            show_about: false,
            dark_mode: true,
        }
    }

    /// Whether a new request may be started from the file field.
    pub fn can_analyse(&self) -> bool {
        self.phase != AppPhase::Analysing && !self.path_input.trim().is_empty()
    }

    /// Start a request for whatever path is in the file field.
    pub fn start_from_input(&mut self) {
        let input = self.path_input.trim();
        if input.is_empty() {
            self.push_notice(NoticeLevel::Warning, "Please select a file first");
            return;
        }
        let path = PathBuf::from(input);
        self.start_analysis(path);
    }

    /// Start analysing `path` on a background thread.
    ///
    /// Any running request is cancelled first.
    pub fn start_analysis(&mut self, path: PathBuf) {
        // Dropping the old handle cancels it.
        self.analysis_handle = None;
        self.discard_imported();

        self.phase = AppPhase::Analysing;
        self.path_input = path.to_string_lossy().into_owned();
        self.report = None;
        self.analysis_duration = None;
        self.was_cancelled = false;

        match fileagent_core::start_analysis(AnalysisRequest::new(path), self.config.clone()) {
            Ok(handle) => self.analysis_handle = Some(handle),
            Err(e) => {
                tracing::error!("Could not start analysis thread: {e}");
                self.phase = AppPhase::Idle;
                self.push_notice(NoticeLevel::Error, format!("Failed to process file: {e}"));
            }
        }
    }

    /// Cancel any running request.
    pub fn cancel_analysis(&mut self) {
        if let Some(ref handle) = self.analysis_handle {
            handle.cancel();
        }
    }

    /// Drop the current selection and report, deleting the workspace copy.
    pub fn clear(&mut self) {
        self.analysis_handle = None;
        self.discard_imported();
        self.phase = AppPhase::Idle;
        self.path_input.clear();
        self.report = None;
        self.analysis_duration = None;
        self.was_cancelled = false;
    }

    /// Forget the current file, deleting it if the workspace owns it.
    fn discard_imported(&mut self) {
        let Some(file) = self.imported.take() else {
            return;
        };
        if !file.is_copy {
            return;
        }
        if let Err(e) = intake::discard(&file.local_path) {
            self.push_notice(
                NoticeLevel::Warning,
                format!("Could not delete {}: {e}", file.local_path.display()),
            );
        }
    }

    /// Append a notice, evicting the oldest beyond [`MAX_NOTICES`].
    pub fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        if self.notices.len() >= MAX_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    /// Most recent notice, if any.
    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Process pending worker messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;

        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match &self.analysis_handle {
                Some(h) => match h.result_rx.try_recv() {
                    Ok(m) => m,
                    Err(crossbeam_channel::TryRecvError::Empty) => break,
                    Err(crossbeam_channel::TryRecvError::Disconnected) => {
                        // Worker exited without a terminal message.
                        self.analysis_handle = None;
                        if self.phase == AppPhase::Analysing {
                            self.phase = AppPhase::Idle;
                            self.push_notice(
                                NoticeLevel::Error,
                                "Failed to process file: analysis stopped unexpectedly",
                            );
                        }
                        return true;
                    }
                },
                None => break,
            };
            messages_this_frame += 1;
            repaint = true;

            match msg {
                AnalysisMessage::Imported { file } => {
                    self.push_notice(
                        NoticeLevel::Info,
                        format!(
                            "Selected file: {} ({})",
                            file.descriptor.name,
                            format_size(file.descriptor.size_bytes)
                        ),
                    );
                    self.imported = Some(file);
                }
                AnalysisMessage::Complete { report, duration } => {
                    for notice in &report.notices {
                        self.push_notice(NoticeLevel::Warning, notice.clone());
                    }
                    if !report.supported {
                        self.push_notice(
                            NoticeLevel::Warning,
                            format!("{} is not a supported file type", report.descriptor.name),
                        );
                    }
                    self.push_notice(NoticeLevel::Info, "File processed successfully");
                    self.report = Some(*report);
                    self.analysis_duration = Some(duration);
                    self.phase = AppPhase::Results;
                    self.analysis_handle = None;
                    return true;
                }
                AnalysisMessage::Failed { message } => {
                    self.push_notice(NoticeLevel::Error, format!("Failed to load file: {message}"));
                    self.phase = AppPhase::Idle;
                    self.analysis_handle = None;
                    return true;
                }
                AnalysisMessage::Cancelled => {
                    // The worker already removed its copy.
                    self.imported = None;
                    self.was_cancelled = true;
                    self.phase = AppPhase::Idle;
                    self.analysis_handle = None;
                    return true;
                }
            }
        }

        repaint
    }
}
