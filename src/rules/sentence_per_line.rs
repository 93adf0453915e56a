//! One sentence per line
//!
//! A sentence is any run of characters ending in a period. The first
//! sentence of a line (or of a list item) is where it belongs; every
//! further sentence on the same line is moved to a line of its own,
//! aligned under the item text.

use super::list_marker::detect_list_marker;
use super::Rule;
use crate::core::{Fix, PositionIndex, Problem};

pub const RULE_ID: &str = "rst.sentencePerLine";
const MESSAGE: &str = "Каждое предложение должно начинаться с новой строки.";

/// Split `content` into minimal runs ending at a period.
///
/// A run needs at least one character before its period, so a lone
/// trailing period never produces an empty sentence. Text after the last
/// period is not a sentence.
fn sentence_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;

    while let Some(first) = content[start..].chars().next() {
        let body = start + first.len_utf8();
        let Some(period) = content[body..].find('.') else {
            break;
        };
        let end = body + period + 1;
        spans.push((start, end));
        start = end;
    }

    spans
}

/// Flags every sentence that shares a line with an earlier one
#[derive(Debug, Default, Clone)]
pub struct SentencePerLineRule;

impl SentencePerLineRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SentencePerLineRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn message(&self) -> &str {
        MESSAGE
    }

    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem> {
        let mut problems = Vec::new();

        for (line_no, line) in index.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let trimmed = line.trim_start();
            let indent_bytes = line.len() - trimmed.len();
            let indent_width = line[..indent_bytes].chars().count();

            let marker = detect_list_marker(trimmed);
            let content_start = indent_bytes + marker.map_or(0, |m| m.byte_len);
            let content = &line[content_start..];

            if !content.contains('.') {
                continue;
            }

            let continuation = " ".repeat(indent_width + marker.map_or(0, |m| m.length));
            let base = index.line_start(line_no) + content_start;

            for (start, end) in sentence_spans(content).into_iter().skip(1) {
                let range = index.range(base + start, base + end);
                let sentence = content[start..end].trim();
                let replacement = format!("\n{}{}", continuation, sentence);

                problems.push(
                    Problem::new(range, MESSAGE, RULE_ID).with_fix(Fix::replace(range, replacement)),
                );
            }
        }

        problems
    }
}
