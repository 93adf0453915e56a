use tower_lsp::lsp_types::TextEdit;

use super::conversion::{to_lsp_position, to_lsp_range};
use crate::core::{EditBuilder, Position, Range};

/// Records fix edits as LSP text edits for `workspace/applyEdit`
#[derive(Debug, Default)]
pub struct TextEditCollector {
    edits: Vec<TextEdit>,
}

impl TextEditCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }
}

impl EditBuilder for TextEditCollector {
    fn replace(&mut self, range: Range, text: &str) {
        self.edits.push(TextEdit::new(to_lsp_range(range), text.to_string()));
    }

    fn insert(&mut self, position: Position, text: &str) {
        let at = to_lsp_position(position);
        self.edits.push(TextEdit::new(
            tower_lsp::lsp_types::Range::new(at, at),
            text.to_string(),
        ));
    }
}
