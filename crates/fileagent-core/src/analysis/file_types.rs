/// File type categorisation based on file extensions.
///
/// The category is a pure function of the file name: content is never
/// inspected. Also maps extensions to MIME types for the supported-type
/// check shown next to the picker.

/// Broad file type categories a report is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Text,
    Document,
    Archive,
    Unknown,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "3gp"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "m4a"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "html", "xml", "json", "csv", "log"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];

impl FileCategory {
    /// Categories that own an extension set, in match priority order.
    pub const CLASSIFIED: [FileCategory; 6] = [
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Text,
        Self::Document,
        Self::Archive,
    ];

    /// Human-readable label for logs and the GUI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Text => "Text",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Unknown => "Unknown",
        }
    }

    /// Lower-case extensions (without the dot) that map to this category.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
            Self::Audio => AUDIO_EXTENSIONS,
            Self::Text => TEXT_EXTENSIONS,
            Self::Document => DOCUMENT_EXTENSIONS,
            Self::Archive => ARCHIVE_EXTENSIONS,
            Self::Unknown => &[],
        }
    }
}

/// Categorise a bare extension (no leading dot).
///
/// Extensions are lowercased into a fixed-size stack buffer; anything
/// longer than the buffer cannot be in the table and is `Unknown`.
pub fn categorise_extension(ext: &str) -> FileCategory {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > 16 {
        return FileCategory::Unknown;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return FileCategory::Unknown,
    };

    FileCategory::CLASSIFIED
        .into_iter()
        .find(|cat| cat.extensions().contains(&lower_str))
        .unwrap_or(FileCategory::Unknown)
}

/// Classify a file by name.
///
/// The name is lowercased, then the text after the final dot is looked up.
/// Never fails: names without a known extension are `Unknown`.
pub fn classify(file_name: &str) -> FileCategory {
    // Full Unicode lowercasing first: a few non-ASCII code points fold
    // into ASCII letters.
    let lower = file_name.to_lowercase();
    match lower.rsplit_once('.') {
        Some((_, ext)) => categorise_extension(ext),
        None => FileCategory::Unknown,
    }
}

/// MIME types the picker accepts. A trailing `*` matches any subtype.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "image/*",
    "video/*",
    "audio/*",
    "text/*",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/zip",
    "application/x-rar-compressed",
    "application/json",
    "application/xml",
    "text/csv",
];

/// Resolve the MIME type of a file from its extension.
pub fn mime_type_for(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    let (_, ext) = lower.rsplit_once('.')?;
    let mime = match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "webm" => "video/webm",
        "3gp" => "video/3gpp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "html" => "text/html",
        "xml" => "application/xml",
        "json" => "application/json",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "7z" => "application/x-7z-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        _ => return None,
    };
    Some(mime)
}

/// Whether the picker's accepted MIME list covers this file.
///
/// Unresolvable types are unsupported. Support is advisory: the report is
/// still produced for unsupported files.
pub fn is_supported(file_name: &str) -> bool {
    let Some(mime) = mime_type_for(file_name) else {
        return false;
    };
    SUPPORTED_MIME_TYPES
        .iter()
        .any(|&accepted| accepted == mime || mime.starts_with(accepted.trim_end_matches('*')))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify ─────────────────────────────────────────────────────────

    #[test]
    fn classify_known_image_names() {
        for name in &["a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp", "a.webp", "a.svg"] {
            assert_eq!(classify(name), FileCategory::Image, "expected Image for {name}");
        }
    }

    #[test]
    fn classify_known_video_and_audio_names() {
        for name in &["clip.mp4", "clip.mkv", "clip.3gp", "clip.webm"] {
            assert_eq!(classify(name), FileCategory::Video, "expected Video for {name}");
        }
        for name in &["song.mp3", "song.flac", "song.m4a", "song.ogg"] {
            assert_eq!(classify(name), FileCategory::Audio, "expected Audio for {name}");
        }
    }

    #[test]
    fn classify_text_document_archive() {
        assert_eq!(classify("notes.md"), FileCategory::Text);
        assert_eq!(classify("server.log"), FileCategory::Text);
        assert_eq!(classify("data.json"), FileCategory::Text);
        assert_eq!(classify("report.PDF"), FileCategory::Document);
        assert_eq!(classify("deck.pptx"), FileCategory::Document);
        assert_eq!(classify("archive.tar.gz"), FileCategory::Archive);
        assert_eq!(classify("bundle.7z"), FileCategory::Archive);
    }

    #[test]
    fn classify_unknown_falls_back() {
        assert_eq!(classify("noext"), FileCategory::Unknown);
        assert_eq!(classify(""), FileCategory::Unknown);
        assert_eq!(classify("trailing."), FileCategory::Unknown);
        assert_eq!(classify("program.exe"), FileCategory::Unknown);
    }

    /// Matching is on the suffix after the last dot, so a known
    /// extension in the middle of a name does not count.
    #[test]
    fn classify_uses_final_extension_only() {
        assert_eq!(classify("photo.png.bak"), FileCategory::Unknown);
        assert_eq!(classify("notes.txt.zip"), FileCategory::Archive);
    }

    /// A dotfile whose whole name is an extension still matches.
    #[test]
    fn classify_dotfile_matches_suffix() {
        assert_eq!(classify(".png"), FileCategory::Image);
    }

    #[test]
    fn classify_case_insensitive() {
        assert_eq!(classify("IMG_0001.JPG"), FileCategory::Image);
        assert_eq!(classify("Movie.MoV"), FileCategory::Video);
        assert_eq!(classify("README.Md"), FileCategory::Text);
        // KELVIN SIGN folds to an ASCII 'k' under Unicode lowercasing.
        assert_eq!(classify("film.m\u{212A}v"), FileCategory::Video);
    }

    #[test]
    fn classify_is_deterministic() {
        for name in &["a.txt", "b.zip", "c", "D.DOCX"] {
            assert_eq!(classify(name), classify(name));
        }
    }

    /// Every table extension belongs to exactly one category, so match
    /// order can never change a result.
    #[test]
    fn extension_sets_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for cat in FileCategory::CLASSIFIED {
            for ext in cat.extensions() {
                assert!(seen.insert(*ext), "extension {ext} listed twice");
                assert_eq!(categorise_extension(ext), cat);
            }
        }
        assert_eq!(seen.len(), 40);
    }

    #[test]
    fn categorise_extension_rejects_oversized_and_empty() {
        assert_eq!(categorise_extension(""), FileCategory::Unknown);
        assert_eq!(
            categorise_extension("averyveryverylongextension"),
            FileCategory::Unknown
        );
        assert_eq!(categorise_extension("ZIP"), FileCategory::Archive);
    }

    // ── MIME support ─────────────────────────────────────────────────────

    #[test]
    fn mime_type_resolves_known_extensions() {
        assert_eq!(mime_type_for("a.JPG"), Some("image/jpeg"));
        assert_eq!(mime_type_for("a.csv"), Some("text/csv"));
        assert_eq!(mime_type_for("a.tar.gz"), Some("application/gzip"));
        assert_eq!(mime_type_for("noext"), None);
        assert_eq!(mime_type_for("a.exe"), None);
    }

    /// Every classified extension resolves to some MIME type.
    #[test]
    fn every_classified_extension_has_a_mime_type() {
        for cat in FileCategory::CLASSIFIED {
            for ext in cat.extensions() {
                assert!(
                    mime_type_for(&format!("f.{ext}")).is_some(),
                    "no MIME type for .{ext}"
                );
            }
        }
    }

    #[test]
    fn supported_types_follow_accept_list() {
        assert!(is_supported("photo.heic.png"));
        assert!(is_supported("clip.mp4"));
        assert!(is_supported("notes.txt"));
        assert!(is_supported("sheet.xlsx"));
        assert!(is_supported("data.json"));
        assert!(is_supported("bundle.rar"));
        // Archive formats outside the accept list.
        assert!(!is_supported("bundle.7z"));
        assert!(!is_supported("bundle.tar"));
        assert!(!is_supported("bundle.gz"));
        assert!(!is_supported("noext"));
    }
}
