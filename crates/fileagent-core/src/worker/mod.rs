/// Worker module: runs one report request off the UI thread.
///
/// Each request gets its own thread and its own `AnalysisHandle`. The
/// handle is the request's scope: cancelling it, or dropping it when the
/// owning session goes away, abandons the work between copied chunks or at
/// the next stage boundary, and removes any partial or finished workspace copy.
/// Results come back over a bounded crossbeam channel.
pub mod progress;

use crate::config::AnalyzerConfig;
use crate::error::IntakeError;
use crate::intake::{self, ImportedFile};
use crate::report::{generate_report, Report};
use progress::AnalysisMessage;

use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum number of messages that may queue up in the channel.
///
/// A request sends at most two messages, so the worker never blocks.
pub const RESULT_CHANNEL_CAPACITY: usize = 4;

/// A file the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Path the picker resolved.
    pub source: PathBuf,
    /// Name to show and classify by. Defaults to the source's file name.
    pub display_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Handle to a running or finished request.
pub struct AnalysisHandle {
    /// Receiver for messages from the worker thread.
    pub result_rx: Receiver<AnalysisMessage>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the worker thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl AnalysisHandle {
    /// Request the worker to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

impl Drop for AnalysisHandle {
    fn drop(&mut self) {
        // Nobody is listening any more.
        self.cancel();
    }
}

/// Start a request on a background thread.
///
/// Fails only if the OS refuses to spawn the thread.
pub fn start_analysis(
    request: AnalysisRequest,
    config: AnalyzerConfig,
) -> std::io::Result<AnalysisHandle> {
    let (result_tx, result_rx) =
        crossbeam_channel::bounded::<AnalysisMessage>(RESULT_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("fileagent-analysis".into())
        .spawn(move || run_analysis(request, config, result_tx, cancel_clone))?;

    Ok(AnalysisHandle {
        result_rx,
        cancel_flag,
        _thread: Some(thread),
    })
}

/// Obtain a local file for the request: a workspace copy when a workspace
/// is configured, the source itself otherwise.
pub fn acquire(
    request: &AnalysisRequest,
    config: &AnalyzerConfig,
) -> Result<ImportedFile, IntakeError> {
    acquire_until(request, config, || false)
}

fn acquire_until(
    request: &AnalysisRequest,
    config: &AnalyzerConfig,
    cancelled: impl Fn() -> bool,
) -> Result<ImportedFile, IntakeError> {
    let name = request.display_name.as_deref();
    match &config.workspace_dir {
        Some(workspace) => intake::import_file_until(&request.source, name, workspace, cancelled),
        None => intake::describe(&request.source, name),
    }
}

/// Run a whole request on the calling thread.
pub fn run_request(
    request: &AnalysisRequest,
    config: &AnalyzerConfig,
) -> Result<(ImportedFile, Report), IntakeError> {
    let file = acquire(request, config)?;
    let report = generate_report(&file.local_path, file.descriptor.clone(), config);
    Ok((file, report))
}

/// Delete the workspace copy of an abandoned request.
fn abandon(file: &ImportedFile) {
    if !file.is_copy {
        return;
    }
    if let Err(e) = intake::discard(&file.local_path) {
        warn!("Could not remove abandoned copy {}: {e}", file.local_path.display());
    }
}

fn run_analysis(
    request: AnalysisRequest,
    config: AnalyzerConfig,
    tx: Sender<AnalysisMessage>,
    cancel: Arc<AtomicBool>,
) {
    let start = Instant::now();
    info!("Starting analysis of {}", request.source.display());

    let is_cancelled = || cancel.load(Ordering::Relaxed);
    // Cleanup happens before `Cancelled` is sent, so a receiver that sees
    // the message also sees an empty workspace.
    let finish_cancelled = |file: Option<&ImportedFile>| {
        if let Some(file) = file {
            abandon(file);
        }
        info!("Analysis of {} cancelled", request.source.display());
        let _ = tx.send(AnalysisMessage::Cancelled);
    };

    if is_cancelled() {
        finish_cancelled(None);
        return;
    }

    let file = match acquire_until(&request, &config, is_cancelled) {
        Ok(file) => file,
        Err(IntakeError::Cancelled(_)) => {
            finish_cancelled(None);
            return;
        }
        Err(e) => {
            warn!("Cannot proceed with {}: {e}", request.source.display());
            let _ = tx.send(AnalysisMessage::Failed {
                message: e.to_string(),
            });
            return;
        }
    };

    if is_cancelled() {
        finish_cancelled(Some(&file));
        return;
    }
    let _ = tx.send(AnalysisMessage::Imported { file: file.clone() });

    let report = generate_report(&file.local_path, file.descriptor.clone(), &config);

    if is_cancelled() {
        finish_cancelled(Some(&file));
        return;
    }

    let duration = start.elapsed();
    info!(
        "Report for {} ready in {:.1?} ({}{})",
        report.descriptor.name,
        duration,
        report.category.label(),
        if report.is_degraded() { ", degraded" } else { "" }
    );
    let _ = tx.send(AnalysisMessage::Complete {
        report: Box::new(report),
        duration,
    });
}
