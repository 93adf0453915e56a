//! Problem data model
//!
//! Positions, ranges, detected problems and the declarative fixes attached
//! to them. Everything here is valid only against the text snapshot it was
//! computed from.

use serde::{Deserialize, Serialize};

/// Zero-based line and UTF-16 column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Half-open span between two positions, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {:?} after end {:?}", start, end);
        Self { start, end }
    }

    /// Whether two ranges overlap or touch
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Identity used to deduplicate problems reported for the same span
    pub fn key(&self) -> (u32, u32, u32, u32) {
        (
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column,
        )
    }
}

/// Something that can perform text edits on behalf of a fix
pub trait EditBuilder {
    fn replace(&mut self, range: Range, text: &str);
    fn insert(&mut self, position: Position, text: &str);
}

/// A corrective edit, described rather than performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fix {
    Replace { range: Range, text: String },
    Insert { position: Position, text: String },
}

impl Fix {
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Fix::Replace {
            range,
            text: text.into(),
        }
    }

    pub fn insert(position: Position, text: impl Into<String>) -> Self {
        Fix::Insert {
            position,
            text: text.into(),
        }
    }

    /// Perform this edit through `builder`
    pub fn apply<B: EditBuilder + ?Sized>(&self, builder: &mut B) {
        match self {
            Fix::Replace { range, text } => builder.replace(*range, text),
            Fix::Insert { position, text } => builder.insert(*position, text),
        }
    }

    /// Text the fix writes into the document
    pub fn new_text(&self) -> &str {
        match self {
            Fix::Replace { text, .. } | Fix::Insert { text, .. } => text,
        }
    }
}

/// One style violation found by a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub range: Range,
    pub message: String,
    pub rule_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Problem {
    pub fn new(range: Range, message: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
            rule_id: rule_id.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}
