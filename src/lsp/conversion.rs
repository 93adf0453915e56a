//! Conversions between linter types and LSP types.
//!
//! Both sides count columns in UTF-16 code units, so positions map field
//! for field.

use tower_lsp::lsp_types;

use crate::core::{Position, Problem, Range};

/// Value of `Diagnostic::source` for every published problem
pub const DIAGNOSTIC_SOURCE: &str = "rst-style";

pub fn to_lsp_position(position: Position) -> lsp_types::Position {
    lsp_types::Position::new(position.line, position.column)
}

pub fn to_lsp_range(range: Range) -> lsp_types::Range {
    lsp_types::Range::new(to_lsp_position(range.start), to_lsp_position(range.end))
}

pub fn from_lsp_position(position: lsp_types::Position) -> Position {
    Position::new(position.line, position.character)
}

/// Client ranges are untrusted; a reversed range is normalised
pub fn from_lsp_range(range: lsp_types::Range) -> Range {
    let start = from_lsp_position(range.start);
    let end = from_lsp_position(range.end);
    if start <= end {
        Range::new(start, end)
    } else {
        Range::new(end, start)
    }
}

pub fn to_lsp_diagnostic(problem: &Problem) -> lsp_types::Diagnostic {
    lsp_types::Diagnostic {
        range: to_lsp_range(problem.range),
        severity: Some(lsp_types::DiagnosticSeverity::WARNING),
        code: Some(lsp_types::NumberOrString::String(problem.rule_id.clone())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: problem.message.clone(),
        ..Default::default()
    }
}
