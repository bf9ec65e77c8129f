/// Analysis modules: classification, text statistics, and the
/// per-category analyzers the report is assembled from.

pub mod category;
pub mod file_types;
pub mod text_stats;

pub use category::{analyzer_for, CategoryAnalysis, CategoryAnalyzer, Field, FieldKind, FieldValue};
pub use file_types::{
    categorise_extension, classify, is_supported, mime_type_for, FileCategory,
    SUPPORTED_MIME_TYPES,
};
pub use text_stats::TextStats;
