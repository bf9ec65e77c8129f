/// Per-category analyzers.
///
/// Each category contributes a fixed list of report fields. Only text
/// files have real metrics; the other categories report an availability
/// marker and are the place to plug real extractors in later.
use super::file_types::FileCategory;
use super::text_stats::{self, TextStats};
use crate::config::TextEncoding;
use std::path::Path;
use tracing::{debug, warn};

/// Which metric a report field carries. Labels come from the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ImageDimensions,
    VideoDuration,
    AudioDuration,
    LineCount,
    CharCount,
    WordCount,
    /// Rendered as the "paragraph count".
    BlankLineCount,
    DocumentContent,
    DocumentAnalysis,
    ArchiveContent,
    ArchiveAnalysis,
}

/// Value of a single report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// Placeholder marker for metrics with no extractor behind them.
    Available,
    /// The metric could not be computed for this file.
    Unavailable,
    Count(u64),
}

/// One line of the category section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl Field {
    pub fn new(kind: FieldKind, value: FieldValue) -> Self {
        Self { kind, value }
    }
}

/// Result of running one analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAnalysis {
    pub fields: Vec<Field>,
    /// Text statistics, when they were computed.
    pub text_stats: Option<TextStats>,
    /// Why some fields are unavailable, for the user-facing notice.
    pub degraded: Option<String>,
}

/// Capability interface for category-specific analysis.
///
/// Implementations must not fail: anything that goes wrong is reported
/// through `CategoryAnalysis::degraded` with the affected fields marked
/// unavailable.
pub trait CategoryAnalyzer: Send + Sync {
    fn category(&self) -> FileCategory;

    fn analyze(&self, path: &Path) -> CategoryAnalysis;
}

/// Analyzer for categories whose fields are all placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderAnalyzer {
    category: FileCategory,
    kinds: &'static [FieldKind],
}

impl PlaceholderAnalyzer {
    pub fn image() -> Self {
        Self {
            category: FileCategory::Image,
            kinds: &[FieldKind::ImageDimensions],
        }
    }

    pub fn video() -> Self {
        Self {
            category: FileCategory::Video,
            kinds: &[FieldKind::VideoDuration],
        }
    }

    pub fn audio() -> Self {
        Self {
            category: FileCategory::Audio,
            kinds: &[FieldKind::AudioDuration],
        }
    }

    pub fn document() -> Self {
        Self {
            category: FileCategory::Document,
            kinds: &[FieldKind::DocumentContent, FieldKind::DocumentAnalysis],
        }
    }

    pub fn archive() -> Self {
        Self {
            category: FileCategory::Archive,
            kinds: &[FieldKind::ArchiveContent, FieldKind::ArchiveAnalysis],
        }
    }
}

impl CategoryAnalyzer for PlaceholderAnalyzer {
    fn category(&self) -> FileCategory {
        self.category
    }

    fn analyze(&self, _path: &Path) -> CategoryAnalysis {
        CategoryAnalysis {
            fields: self
                .kinds
                .iter()
                .map(|&kind| Field::new(kind, FieldValue::Available))
                .collect(),
            ..Default::default()
        }
    }
}

/// Line, character, word and blank-line counts for text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer {
    pub encoding: TextEncoding,
}

impl TextAnalyzer {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }
}

const TEXT_FIELDS: [FieldKind; 4] = [
    FieldKind::LineCount,
    FieldKind::CharCount,
    FieldKind::WordCount,
    FieldKind::BlankLineCount,
];

impl CategoryAnalyzer for TextAnalyzer {
    fn category(&self) -> FileCategory {
        FileCategory::Text
    }

    fn analyze(&self, path: &Path) -> CategoryAnalysis {
        match text_stats::analyze(path, self.encoding) {
            Ok(stats) => {
                debug!(
                    "Text stats for {}: {} chars, {} words, {} blank lines",
                    path.display(),
                    stats.char_count,
                    stats.word_count,
                    stats.blank_line_count
                );
                let values = [
                    stats.line_count,
                    stats.char_count,
                    stats.word_count,
                    stats.blank_line_count,
                ];
                CategoryAnalysis {
                    fields: TEXT_FIELDS
                        .iter()
                        .zip(values)
                        .map(|(&kind, n)| Field::new(kind, FieldValue::Count(n)))
                        .collect(),
                    text_stats: Some(stats),
                    degraded: None,
                }
            }
            Err(e) => {
                warn!("Text analysis of {} unavailable: {e}", path.display());
                CategoryAnalysis {
                    fields: TEXT_FIELDS
                        .iter()
                        .map(|&kind| Field::new(kind, FieldValue::Unavailable))
                        .collect(),
                    text_stats: None,
                    degraded: Some(e.to_string()),
                }
            }
        }
    }
}

/// Pick the analyzer for a category. `Unknown` has none.
pub fn analyzer_for(
    category: FileCategory,
    encoding: TextEncoding,
) -> Option<Box<dyn CategoryAnalyzer>> {
    let analyzer: Box<dyn CategoryAnalyzer> = match category {
        FileCategory::Image => Box::new(PlaceholderAnalyzer::image()),
        FileCategory::Video => Box::new(PlaceholderAnalyzer::video()),
        FileCategory::Audio => Box::new(PlaceholderAnalyzer::audio()),
        FileCategory::Text => Box::new(TextAnalyzer::new(encoding)),
        FileCategory::Document => Box::new(PlaceholderAnalyzer::document()),
        FileCategory::Archive => Box::new(PlaceholderAnalyzer::archive()),
        FileCategory::Unknown => return None,
    };
    Some(analyzer)
}
