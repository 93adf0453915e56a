//! LSP Protocol Implementation
//!
//! Publishes style problems as diagnostics and offers their fixes as
//! quick-fix code actions.

pub mod backend;
pub mod conversion;
pub mod document;
pub mod edit;
pub mod handlers;
pub mod server;

pub use backend::Backend;
pub use handlers::{ApplyFixArgs, APPLY_FIX_COMMAND};
