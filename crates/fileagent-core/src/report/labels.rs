/// Localised report strings.
use crate::analysis::{FieldKind, FileCategory};
use crate::config::ReportLocale;
use crate::model::size::SizeUnits;

/// Every string the report renders, for one language.
#[derive(Debug)]
pub struct Labels {
    pub header: &'static str,
    pub file_name: &'static str,
    pub file_size: &'static str,
    pub modified: &'static str,
    pub file_type: &'static str,
    pub available: &'static str,
    pub unavailable: &'static str,
    pub unknown_date: &'static str,
    pub text_analysis: &'static str,
    pub units: SizeUnits,
    categories: [&'static str; 7],
    fields: [&'static str; 11],
}

impl Labels {
    pub const ENGLISH: Labels = Labels {
        header: "=== File Analysis Report ===",
        file_name: "File name",
        file_size: "File size",
        modified: "Modified",
        file_type: "File type",
        available: "available",
        unavailable: "unavailable",
        unknown_date: "unknown",
        text_analysis: "Text analysis",
        units: SizeUnits::ENGLISH,
        categories: [
            "Image", "Video", "Audio", "Text", "Document", "Archive", "Unknown",
        ],
        fields: [
            "Image dimensions",
            "Video duration",
            "Audio duration",
            "Line count",
            "Characters",
            "Words",
            "Paragraphs",
            "Content",
            "Document analysis",
            "Archive contents",
            "Archive analysis",
        ],
    };

    pub const ARABIC: Labels = Labels {
        header: "=== تقرير معالجة الملف ===",
        file_name: "اسم الملف",
        file_size: "حجم الملف",
        modified: "تاريخ التعديل",
        file_type: "نوع الملف",
        available: "متوفر",
        unavailable: "غير متوفر",
        unknown_date: "غير معروف",
        text_analysis: "تحليل النص",
        units: SizeUnits {
            bytes: "بايت",
            kb: "كيلوبايت",
            mb: "ميجابايت",
            gb: "جيجابايت",
        },
        categories: [
            "صورة",
            "فيديو",
            "ملف صوتي",
            "نص",
            "ملف بيانات",
            "أرشيف",
            "غير معروف",
        ],
        fields: [
            "حجم الصورة",
            "مدة الفيديو",
            "مدة الصوت",
            "عدد الأسطر",
            "عدد الأحرف",
            "عدد الكلمات",
            "عدد الفقرات",
            "المحتوى",
            "تحليل المستند",
            "محتوى الأرشيف",
            "تحليل الأرشيف",
        ],
    };

    pub fn for_locale(locale: ReportLocale) -> &'static Labels {
        match locale {
            ReportLocale::English => &Self::ENGLISH,
            ReportLocale::Arabic => &Self::ARABIC,
        }
    }

    pub fn category(&self, category: FileCategory) -> &'static str {
        let i = match category {
            FileCategory::Image => 0,
            FileCategory::Video => 1,
            FileCategory::Audio => 2,
            FileCategory::Text => 3,
            FileCategory::Document => 4,
            FileCategory::Archive => 5,
            FileCategory::Unknown => 6,
        };
        self.categories[i]
    }

    pub fn field(&self, kind: FieldKind) -> &'static str {
        let i = match kind {
            FieldKind::ImageDimensions => 0,
            FieldKind::VideoDuration => 1,
            FieldKind::AudioDuration => 2,
            FieldKind::LineCount => 3,
            FieldKind::CharCount => 4,
            FieldKind::WordCount => 5,
            FieldKind::BlankLineCount => 6,
            FieldKind::DocumentContent => 7,
            FieldKind::DocumentAnalysis => 8,
            FieldKind::ArchiveContent => 9,
            FieldKind::ArchiveAnalysis => 10,
        };
        self.fields[i]
    }
}
