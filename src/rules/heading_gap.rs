//! Heading gap detection
//!
//! A section heading is a title line followed by an underline. Two
//! consecutive headings with nothing but blank lines and comments
//! between them leave an empty section.

use super::Rule;
use crate::core::{Fix, Position, PositionIndex, Problem, Range};

pub const RULE_ID: &str = "rst.headingGap";
const MESSAGE: &str = "После заголовка нет текста. Добавьте содержимое раздела.";
pub const DEFAULT_PLACEHOLDER: &str = "Текст раздела.";

/// A detected heading; `underline_line` is always `title_line + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub title_line: usize,
    pub underline_line: usize,
}

fn utf16_width(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Whether `line` can underline a title of `title_width` UTF-16 units
fn is_underline(line: &str, title_width: usize) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    if first.is_alphanumeric() || first.is_whitespace() {
        return false;
    }

    utf16_width(trimmed) >= title_width && chars.all(|ch| ch == first)
}

/// Collect title/underline pairs in document order.
///
/// A consumed underline is never considered as the title of another heading.
pub fn collect_headings(index: &PositionIndex<'_>) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut line = 0;

    while line + 1 < index.line_count() {
        let title = index.line_text(line).trim();

        if !title.is_empty() && is_underline(index.line_text(line + 1), utf16_width(title)) {
            headings.push(Heading {
                title_line: line,
                underline_line: line + 1,
            });
            line += 2;
        } else {
            line += 1;
        }
    }

    headings
}

/// Lines that count as section content: not blank and not a `..` comment
fn is_content_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with("..")
}

/// Flags headings followed directly by another heading
#[derive(Debug, Clone)]
pub struct HeadingGapRule {
    placeholder: String,
}

impl HeadingGapRule {
    /// `placeholder` is the body text inserted by the fix, without line break
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl Default for HeadingGapRule {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Rule for HeadingGapRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn message(&self) -> &str {
        MESSAGE
    }

    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem> {
        let headings = collect_headings(index);

        headings
            .windows(2)
            .filter(|pair| {
                // An empty gap (adjacent headings) has no content line either
                !(pair[0].underline_line + 1..pair[1].title_line)
                    .any(|line| is_content_line(index.line_text(line)))
            })
            .map(|pair| {
                let (cur, next) = (pair[0], pair[1]);
                let start = index.offset_to_position(index.line_start(cur.underline_line));
                let end = index.offset_to_position(index.line_start(next.title_line));
                let body_line = Position::new(cur.underline_line as u32 + 1, 0);

                Problem::new(Range::new(start, end), MESSAGE, RULE_ID).with_fix(
                    Fix::insert(body_line, format!("{}\n", self.placeholder)),
                )
            })
            .collect()
    }
}
