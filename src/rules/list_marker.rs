//! List marker recognition for line-oriented rules.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered marker patterns; the first one that matches wins
static MARKER_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // "#. "
        Regex::new(r"^#\.\s+").expect("valid list marker pattern"),
        // "1. " and "2) "
        Regex::new(r"^[0-9]+[.)]\s+").expect("valid list marker pattern"),
        // "a. " and "b) "
        Regex::new(r"^[a-zA-Z][.)]\s+").expect("valid list marker pattern"),
        // "* ", "- ", "+ ", "> "
        Regex::new(r"^[*\-+>]\s+").expect("valid list marker pattern"),
    ]
});

/// A list marker found at the start of a line's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarkerInfo {
    /// Width of the marker and its trailing whitespace, in characters
    pub length: usize,
    /// Same span in bytes
    pub byte_len: usize,
}

/// Detect a list marker at the very start of `content` (already stripped of indentation)
pub fn detect_list_marker(content: &str) -> Option<ListMarkerInfo> {
    MARKER_PATTERNS.iter().find_map(|pattern| {
        pattern.find(content).map(|m| ListMarkerInfo {
            length: m.as_str().chars().count(),
            byte_len: m.end(),
        })
    })
}
