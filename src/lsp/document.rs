use tower_lsp::lsp_types::Url;

/// Language id clients send for reStructuredText buffers
pub const RST_LANGUAGE_ID: &str = "restructuredtext";

/// State for each open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
    pub version: i32,
    pub language_id: String,
}

impl DocumentState {
    pub fn new(content: String, version: i32, language_id: String) -> Self {
        Self {
            content,
            version,
            language_id,
        }
    }

    /// Whether the style rules apply to this document
    pub fn is_rst(&self, uri: &Url) -> bool {
        self.language_id == RST_LANGUAGE_ID || uri.path().ends_with(".rst")
    }
}
