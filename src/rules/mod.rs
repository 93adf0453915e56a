//! Style Rules
//!
//! Each rule is a pure function of the document text. Rules never share
//! state and never see each other's results.

pub mod bureaucratic_words;
pub mod heading_gap;
pub mod list_marker;
pub mod placeholder_case;
pub mod replace_yo;
pub mod sentence_per_line;

use crate::core::{PositionIndex, Problem};

pub use bureaucratic_words::{BureaucraticWordsRule, PhraseEntry, PhraseTable};
pub use heading_gap::HeadingGapRule;
pub use placeholder_case::PlaceholderCaseRule;
pub use replace_yo::ReplaceYoRule;
pub use sentence_per_line::SentencePerLineRule;

/// A single independent style check
pub trait Rule: Send + Sync {
    /// Stable, globally unique identifier
    fn id(&self) -> &'static str;

    /// Message attached to every problem this rule reports
    fn message(&self) -> &str;

    /// Scan the whole text. Problems come back in document order.
    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem>;
}
