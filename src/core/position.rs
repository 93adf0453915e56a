//! Position Index
//!
//! Maps byte offsets in a text snapshot to (line, column) pairs and back.
//! Columns are counted in UTF-16 code units, the unit LSP clients use.

use super::problem::{Position, Range};

/// Line table for one text snapshot.
///
/// Lines are split on `\n`; a `\r` directly before the `\n` belongs to the
/// line terminator and is not part of the line's text.
#[derive(Debug, Clone)]
pub struct PositionIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> PositionIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self { text, line_starts }
    }

    /// The text this index was built from
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of lines; an empty text or a trailing newline still counts a last (empty) line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` starts
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts[line]
    }

    /// Byte offset where the text of `line` ends (before any `\r\n` / `\n`)
    pub fn line_end(&self, line: usize) -> usize {
        let end = match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.text.len(),
        };

        if end > self.line_starts[line] && self.text.as_bytes()[end - 1] == b'\r' {
            end - 1
        } else {
            end
        }
    }

    /// Text of `line` without its terminator
    pub fn line_text(&self, line: usize) -> &'a str {
        &self.text[self.line_start(line)..self.line_end(line)]
    }

    /// Iterate over all lines as `(line_number, text)`
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        (0..self.line_count()).map(move |line| (line, self.line_text(line)))
    }

    /// Convert a byte offset into a position.
    ///
    /// Every offset in `0..=text.len()` that lies on a char boundary is valid.
    /// Anything else is a bug in the caller and panics.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        assert!(
            offset <= self.text.len() && self.text.is_char_boundary(offset),
            "offset {} is not a valid position in a text of {} bytes",
            offset,
            self.text.len()
        );

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = utf16_len(&self.text[line_start..offset]);

        Position::new(line as u32, column as u32)
    }

    /// Convert a byte span into a range
    pub fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.offset_to_position(start), self.offset_to_position(end))
    }

    /// Convert a position back into a byte offset.
    ///
    /// Positions come from outside (the editor), so a column past the end of
    /// its line clamps to the line end. A line past the end of the text is `None`.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        if line >= self.line_count() {
            return None;
        }

        let start = self.line_start(line);
        let end = self.line_end(line);
        let mut remaining = position.column as usize;

        for (idx, ch) in self.text[start..end].char_indices() {
            if remaining == 0 {
                return Some(start + idx);
            }
            remaining = remaining.saturating_sub(ch.len_utf16());
        }

        Some(end)
    }
}

/// Length of `s` in UTF-16 code units
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
