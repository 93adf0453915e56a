//! Validation Engine
//!
//! Rule registry and the check/fix entry points used by both the
//! language server and the batch checker.

pub mod engine;
pub mod registry;

pub use engine::{check_all, check_in_range, dedup_by_range, fix_all, sort_by_range, FixOutcome};
pub use registry::{is_known_rule, RuleRegistry, RuleSettings, ALL_RULE_IDS};
