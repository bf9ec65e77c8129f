/// Report assembly.
///
/// A report is a fixed sequence of lines: header, file name, size,
/// modification date, a blank line, the category, then whatever fields the
/// category's analyzer contributes. Analysis problems never stop a report;
/// they turn into "unavailable" values plus a notice.
pub mod labels;

use crate::analysis::{self, FieldValue, FileCategory};
use crate::config::{AnalyzerConfig, ReportLocale, TextEncoding};
use crate::model::size::format_size_in;
use crate::model::FileDescriptor;
use std::fmt::{self, Write as _};
use std::path::Path;
use tracing::debug;

pub use labels::Labels;

/// A finished report for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub descriptor: FileDescriptor,
    pub category: FileCategory,
    pub fields: Vec<analysis::Field>,
    pub text_stats: Option<analysis::TextStats>,
    /// Whether the file's type is on the picker's accepted list.
    pub supported: bool,
    /// User-facing notices about degraded analysis.
    pub notices: Vec<String>,
    text: String,
}

impl Report {
    /// The rendered multi-line report.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` if any field could not be computed.
    pub fn is_degraded(&self) -> bool {
        !self.notices.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds reports with a fixed locale and text encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder {
    encoding: TextEncoding,
    locale: ReportLocale,
}

impl ReportBuilder {
    pub fn new(encoding: TextEncoding, locale: ReportLocale) -> Self {
        Self { encoding, locale }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.encoding, config.locale)
    }

    /// Classify `descriptor.name`, run the category analyzer on `path`,
    /// and render the result.
    pub fn build(&self, path: &Path, descriptor: FileDescriptor) -> Report {
        let labels = Labels::for_locale(self.locale);
        let category = analysis::classify(&descriptor.name);
        debug!("Classified {:?} as {}", descriptor.name, category.label());

        let outcome = analysis::analyzer_for(category, self.encoding)
            .map(|a| a.analyze(path))
            .unwrap_or_default();

        let notices = outcome
            .degraded
            .map(|reason| format!("{}: {} ({reason})", labels.text_analysis, labels.unavailable))
            .into_iter()
            .collect();

        let text = render(labels, &descriptor, category, &outcome.fields);

        Report {
            supported: analysis::is_supported(&descriptor.name),
            descriptor,
            category,
            fields: outcome.fields,
            text_stats: outcome.text_stats,
            notices,
            text,
        }
    }
}

/// Render the report lines. Every line ends with `\n`.
fn render(
    labels: &Labels,
    descriptor: &FileDescriptor,
    category: FileCategory,
    fields: &[analysis::Field],
) -> String {
    let mut out = String::with_capacity(256);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", labels.header);
    let _ = writeln!(out, "{}: {}", labels.file_name, descriptor.name);
    let _ = writeln!(
        out,
        "{}: {}",
        labels.file_size,
        format_size_in(descriptor.size_bytes, &labels.units)
    );
    let modified = descriptor
        .modified_display()
        .unwrap_or_else(|| labels.unknown_date.to_string());
    let _ = writeln!(out, "{}: {}", labels.modified, modified);
    out.push('\n');

    let _ = writeln!(out, "{}: {}", labels.file_type, labels.category(category));
    for field in fields {
        let value = match field.value {
            FieldValue::Available => labels.available.to_string(),
            FieldValue::Unavailable => labels.unavailable.to_string(),
            FieldValue::Count(n) => n.to_string(),
        };
        let _ = writeln!(out, "{}: {}", labels.field(field.kind), value);
    }
    out
}

/// Build a report with the settings in `config`.
pub fn generate_report(path: &Path, descriptor: FileDescriptor, config: &AnalyzerConfig) -> Report {
    ReportBuilder::from_config(config).build(path, descriptor)
}
