//! In-memory application of fixes
//!
//! Used by the batch checker and by tests. The language server renders
//! fixes into LSP text edits instead.

use super::position::PositionIndex;
use super::problem::{EditBuilder, Fix, Position, Range};

/// Edit builder that mutates an owned string.
///
/// Each edit is resolved against the text as it is at that moment, so a
/// builder should only ever receive the edits of a single fix.
#[derive(Debug, Clone)]
pub struct StringEditor {
    text: String,
}

impl StringEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn offset(&self, position: Position) -> usize {
        PositionIndex::new(&self.text)
            .position_to_offset(position)
            .unwrap_or(self.text.len())
    }
}

impl EditBuilder for StringEditor {
    fn replace(&mut self, range: Range, text: &str) {
        let start = self.offset(range.start);
        let end = self.offset(range.end).max(start);
        self.text.replace_range(start..end, text);
    }

    fn insert(&mut self, position: Position, text: &str) {
        let at = self.offset(position);
        self.text.insert_str(at, text);
    }
}

/// Apply a single fix to `text`, returning the edited copy
pub fn apply_fix(text: &str, fix: &Fix) -> String {
    let mut editor = StringEditor::new(text);
    fix.apply(&mut editor);
    editor.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_single_char() {
        let fix = Fix::replace(
            Range::new(Position::new(0, 1), Position::new(0, 2)),
            "е",
        );
        assert_eq!(apply_fix("лёд", &fix), "лед");
    }

    #[test]
    fn test_insert_at_line_start() {
        let fix = Fix::insert(Position::new(1, 0), "body\n");
        assert_eq!(apply_fix("a\nb\n", &fix), "a\nbody\nb\n");
    }

    #[test]
    fn test_replace_spanning_lines() {
        let fix = Fix::replace(
            Range::new(Position::new(0, 1), Position::new(1, 1)),
            "-",
        );
        assert_eq!(apply_fix("ab\ncd", &fix), "a-d");
    }
}
