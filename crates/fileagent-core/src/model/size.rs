/// Size formatting utilities: human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Unit names used when rendering a byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeUnits {
    pub bytes: &'static str,
    pub kb: &'static str,
    pub mb: &'static str,
    pub gb: &'static str,
}

impl SizeUnits {
    pub const ENGLISH: SizeUnits = SizeUnits {
        bytes: "bytes",
        kb: "KB",
        mb: "MB",
        gb: "GB",
    };
}

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a byte count into a human-readable string with English units.
///
/// Below 1024 the exact byte count is shown; from there on one decimal
/// place in the next binary unit. GB is the largest unit.
pub fn format_size(bytes: u64) -> String {
    format_size_in(bytes, &SizeUnits::ENGLISH)
}

/// Format a byte count with caller-supplied unit names.
pub fn format_size_in(bytes: u64, units: &SizeUnits) -> String {
    // Thresholds are compared on the integer value so the unit switch
    // happens exactly at each power of 1024.
    let b = bytes as f64;
    if bytes < KB {
        format!("{bytes} {}", units.bytes)
    } else if bytes < MB {
        format!("{:.1} {}", b / KB as f64, units.kb)
    } else if bytes < GB {
        format!("{:.1} {}", b / MB as f64, units.mb)
    } else {
        format!("{:.1} {}", b / GB as f64, units.gb)
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
