//! reStructuredText Style Language Server
//!
//! Style checks for Russian-language technical documentation written in
//! reStructuredText, served over the Language Server Protocol.
//!
//! This library provides:
//! - Line/column mapping and the problem/fix data model
//! - The style rules and their registry
//! - Settings loading and live reload
//! - LSP protocol implementation

pub mod config;
pub mod core;
pub mod lsp;
pub mod rules;
pub mod settings;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{Fix, Position, PositionIndex, Problem, Range};
pub use rules::Rule;
pub use settings::LinterSettings;
pub use validation::{check_all, check_in_range, fix_all, RuleRegistry};
