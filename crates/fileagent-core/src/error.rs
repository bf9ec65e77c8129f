/// Error types for the core crate.
///
/// Intake errors are terminal for a request. Text statistics errors are
/// recovered by the report builder and never abort a report.
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a local copy of the selected file.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("source is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("cannot create workspace directory {}: {source}", .path.display())]
    Workspace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot copy {} into app storage: {source}", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("import of {} was cancelled", .0.display())]
    Cancelled(PathBuf),
}

/// Why plain-text statistics could not be produced.
#[derive(Debug, Error)]
pub enum TextStatsError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("content is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("content looks binary (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Failure loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
