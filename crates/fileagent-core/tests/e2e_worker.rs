/// End-to-end worker integration tests.
///
/// These tests run real requests on the real worker thread against files
/// in a temporary directory: intake, classification, text statistics and
/// report rendering, with results drained from the channel the way the UI
/// drains them.
use fileagent_core::analysis::FileCategory;
use fileagent_core::config::AnalyzerConfig;
use fileagent_core::worker::progress::AnalysisMessage;
use fileagent_core::worker::{start_analysis, AnalysisHandle, AnalysisRequest, RESULT_CHANNEL_CAPACITY};
use fileagent_core::Report;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, bytes: &[u8]) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(bytes).unwrap();
}

/// Terminal outcome of a request.
enum Outcome {
    Report(Box<Report>),
    Failed(String),
    Cancelled,
}

/// Drain the channel until a terminal message arrives (or panic after a
/// generous timeout).
fn drain_to_completion(handle: &AnalysisHandle) -> Outcome {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            std::time::Instant::now() < deadline,
            "worker did not finish within 30 seconds"
        );
        match handle.result_rx.try_recv() {
            Ok(AnalysisMessage::Complete { report, .. }) => return Outcome::Report(report),
            Ok(AnalysisMessage::Failed { message }) => return Outcome::Failed(message),
            Ok(AnalysisMessage::Cancelled) => return Outcome::Cancelled,
            Ok(AnalysisMessage::Imported { .. }) => continue,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("worker channel disconnected before a terminal message");
            }
        }
    }
}

fn expect_report(outcome: Outcome) -> Box<Report> {
    match outcome {
        Outcome::Report(r) => r,
        Outcome::Failed(m) => panic!("request failed: {m}"),
        Outcome::Cancelled => panic!("request was unexpectedly cancelled"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A text file analysed in place yields the full text section.
#[test]
fn text_file_report_in_place() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().join("notes.txt");
    write_bytes(&path, b"a b  c\n\nd");

    let handle = start_analysis(AnalysisRequest::new(&path), AnalyzerConfig::default())
        .expect("spawn worker");
    let report = expect_report(drain_to_completion(&handle));

    assert_eq!(report.category, FileCategory::Text);
    let stats = report.text_stats.expect("text stats");
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.blank_line_count, 1);
    assert_eq!(stats.char_count, 9);
    assert!(report.text().contains("File size: 9 bytes\n"));
    assert!(report.text().contains("Words: 4\n"));
    // In-place files carry a real modification time.
    assert!(!report.text().contains("Modified: unknown"));
}

/// With a workspace configured, the file is copied first and the copy is
/// announced before the report arrives.
#[test]
fn workspace_import_precedes_report() {
    let src = TempDir::new().unwrap();
    let app_dir = TempDir::new().unwrap();
    let source = src.path().join("content-4711");
    write_bytes(&source, &vec![7u8; 2048]);

    let config = AnalyzerConfig {
        workspace_dir: Some(app_dir.path().join("FileAgent")),
        ..AnalyzerConfig::default()
    };
    let request = AnalysisRequest::new(&source).with_display_name("Holiday.JPG");
    let handle = start_analysis(request, config).expect("spawn worker");

    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    let imported = loop {
        assert!(std::time::Instant::now() < deadline, "timed out");
        match handle.result_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(AnalysisMessage::Imported { file }) => break file,
            Ok(other) => panic!("expected Imported first, got {other:?}"),
            Err(_) => continue,
        }
    };
    assert!(imported.is_copy);
    assert_eq!(imported.descriptor.name, "Holiday.JPG");
    assert!(imported.local_path.starts_with(app_dir.path()));
    assert_eq!(fs::read(&imported.local_path).unwrap().len(), 2048);

    let report = expect_report(drain_to_completion(&handle));
    assert_eq!(report.category, FileCategory::Image);
    assert!(report.text().contains("File size: 2.0 KB\n"));
    assert!(report.text().ends_with("Image dimensions: available\n"));
}

/// A missing source is an acquisition failure: no report is produced.
#[test]
fn missing_source_fails_without_report() {
    let tmp = TempDir::new().unwrap();
    let handle = start_analysis(
        AnalysisRequest::new(tmp.path().join("vanished.pdf")),
        AnalyzerConfig::default(),
    )
    .expect("spawn worker");

    match drain_to_completion(&handle) {
        Outcome::Failed(message) => assert!(message.contains("not found"), "{message}"),
        Outcome::Report(_) => panic!("no report may be built without a local file"),
        Outcome::Cancelled => panic!("unexpected cancellation"),
    }
}

/// A binary file under a `.txt` name still produces a complete report.
#[test]
fn binary_text_file_completes_degraded() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("firmware.txt");
    write_bytes(&path, &[0x7F, b'E', b'L', b'F', 0x02, 0x01, 0x00, 0x00, 0xFF]);

    let handle =
        start_analysis(AnalysisRequest::new(&path), AnalyzerConfig::default()).expect("spawn");
    let report = expect_report(drain_to_completion(&handle));

    assert!(report.is_degraded());
    assert!(report.text_stats.is_none());
    assert!(report.text().contains("File type: Text\n"));
    assert!(report.text().contains("Characters: unavailable\n"));
}

/// Cancellation must end the request with `Cancelled` or, if the worker
/// was already done, `Complete`.
#[test]
fn cancellation_sends_terminal_message() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("big.log");
    write_bytes(&path, "line\n".repeat(10_000).as_bytes());

    let handle =
        start_analysis(AnalysisRequest::new(&path), AnalyzerConfig::default()).expect("spawn");
    handle.cancel();
    assert!(handle.is_cancelled());

    match drain_to_completion(&handle) {
        Outcome::Cancelled | Outcome::Report(_) => {}
        Outcome::Failed(m) => panic!("cancellation must not surface as failure: {m}"),
    }
}

/// Large enough that the copy is still running when the handle goes away.
const BIG_FILE_BYTES: usize = 64 * 1024 * 1024;

fn workspace_files(dir: &Path) -> Vec<std::path::PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

/// Dropping the handle mid-import stops the worker and leaves nothing in
/// the workspace.
#[test]
fn dropping_handle_mid_import_leaves_workspace_empty() {
    let src = TempDir::new().unwrap();
    let app_dir = TempDir::new().unwrap();
    let workspace = app_dir.path().join("FileAgent");
    let source = src.path().join("big.txt");
    write_bytes(&source, &vec![b'a'; BIG_FILE_BYTES]);

    let config = AnalyzerConfig {
        workspace_dir: Some(workspace.clone()),
        ..AnalyzerConfig::default()
    };
    let handle = start_analysis(AnalysisRequest::new(&source), config).expect("spawn");
    // A second receiver outlives the handle, so the worker's exit is
    // observable as the channel disconnecting.
    let rx = handle.result_rx.clone();
    drop(handle);

    let mut completed = false;
    loop {
        match rx.recv_timeout(Duration::from_secs(30)) {
            Ok(AnalysisMessage::Complete { .. }) => completed = true,
            Ok(_) => {}
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                panic!("worker did not exit within 30 seconds")
            }
        }
    }

    assert!(!completed, "an abandoned request must not produce a report");
    assert_eq!(workspace_files(&workspace), Vec::<std::path::PathBuf>::new());
    assert!(source.exists());
}

/// An explicit cancel ends with `Cancelled`, after the copy is removed.
#[test]
fn cancel_mid_import_removes_copy_before_reporting() {
    let src = TempDir::new().unwrap();
    let app_dir = TempDir::new().unwrap();
    let workspace = app_dir.path().join("FileAgent");
    let source = src.path().join("big.log");
    write_bytes(&source, &vec![b'z'; BIG_FILE_BYTES]);

    let config = AnalyzerConfig {
        workspace_dir: Some(workspace.clone()),
        ..AnalyzerConfig::default()
    };
    let handle = start_analysis(AnalysisRequest::new(&source), config).expect("spawn");
    handle.cancel();

    match drain_to_completion(&handle) {
        Outcome::Cancelled => {}
        Outcome::Report(_) => panic!("cancelled request produced a report"),
        Outcome::Failed(m) => panic!("cancellation must not surface as failure: {m}"),
    }
    assert!(workspace_files(&workspace).is_empty());
}

/// Two identical requests produce identical reports.
#[test]
fn repeated_requests_are_identical() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.csv");
    write_bytes(&path, b"a,b\n1,2\n\n");

    let run = || {
        let handle = start_analysis(AnalysisRequest::new(&path), AnalyzerConfig::default())
            .expect("spawn");
        expect_report(drain_to_completion(&handle))
    };
    assert_eq!(run(), run());
}

/// The synchronous path produces the same report as the worker.
#[test]
fn run_request_matches_worker() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("deck.pptx");
    write_bytes(&path, b"PK\x03\x04");

    let config = AnalyzerConfig::default();
    let request = AnalysisRequest::new(&path);
    let (file, sync_report) =
        fileagent_core::worker::run_request(&request, &config).expect("local file");
    assert!(!file.is_copy);

    let handle = start_analysis(request, config).expect("spawn");
    let report = expect_report(drain_to_completion(&handle));
    assert_eq!(*report, sync_report);
}

const _: () = assert!(
    RESULT_CHANNEL_CAPACITY >= 2,
    "a request sends up to two messages and must never block"
);
