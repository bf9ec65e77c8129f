/// Plain-text statistics for text-category files.
///
/// The file is read once and every count comes out of a single pass over
/// the decoded characters.
///
/// "Blank lines" is what the report calls the paragraph count: the number
/// of line-terminator-separated segments whose trimmed content is empty,
/// including the segment after the final terminator. It is not a count of
/// paragraphs in the usual sense, and the report keeps it that way.
use crate::config::TextEncoding;
use crate::error::TextStatsError;
use std::borrow::Cow;
use std::path::Path;

/// Counts derived from one text file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Unicode scalar values in the decoded content, whitespace included.
    pub char_count: u64,
    /// Maximal runs of non-whitespace characters, split on Unicode
    /// whitespace. NO-BREAK SPACE (U+00A0) and the other Unicode spaces
    /// separate words here, unlike the ASCII-only `\s` class, so
    /// `"a\u{00A0}b"` is two words.
    pub word_count: u64,
    /// Segments between line terminators that are empty after trimming.
    pub blank_line_count: u64,
    /// Lines as a line reader yields them: a trailing terminator does not
    /// open a new line, and empty content has no lines.
    pub line_count: u64,
}

impl TextStats {
    /// Compute all statistics from already-decoded text.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();
        let mut in_word = false;
        // Whether the segment since the last terminator is all whitespace.
        let mut segment_blank = true;
        let mut segment_empty = true;

        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            stats.char_count += 1;

            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.word_count += 1;
            }

            match ch {
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                        stats.char_count += 1;
                    }
                    if segment_blank {
                        stats.blank_line_count += 1;
                    }
                    stats.line_count += 1;
                    segment_blank = true;
                    segment_empty = true;
                }
                c => {
                    segment_empty = false;
                    if !c.is_whitespace() {
                        segment_blank = false;
                    }
                }
            }
        }

        // The final segment always exists for the blank-line split,
        // but only counts as a line when it has content.
        if segment_blank {
            stats.blank_line_count += 1;
        }
        if !segment_empty {
            stats.line_count += 1;
        }

        stats
    }
}

/// Decode raw file bytes with the configured encoding.
///
/// NUL bytes mark the content as binary whatever the encoding.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<Cow<'_, str>, TextStatsError> {
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(TextStatsError::Binary { offset });
    }

    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| TextStatsError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
        TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(bytes)),
        TextEncoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
    }
}

/// Read `path` once and compute its statistics.
pub fn analyze(path: &Path, encoding: TextEncoding) -> Result<TextStats, TextStatsError> {
    let bytes = std::fs::read(path)?;
    let text = decode(&bytes, encoding)?;
    Ok(TextStats::from_text(&text))
}
