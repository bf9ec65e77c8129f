/// Worker messages: sent from the analysis thread to the UI thread via a
/// crossbeam channel.
use crate::intake::ImportedFile;
use crate::report::Report;
use std::time::Duration;

/// Updates sent from the analysis thread to the UI.
#[derive(Debug)]
pub enum AnalysisMessage {
    /// The file is available locally and about to be analysed.
    Imported { file: ImportedFile },
    /// The report is ready. Degraded analysis still arrives here.
    Complete { report: Box<Report>, duration: Duration },
    /// No local file could be obtained; no report will follow.
    Failed { message: String },
    /// The request was abandoned before the report was produced. Any
    /// workspace copy it made is already deleted.
    Cancelled,
}
