//! "ё" → "е" normalization.

use super::Rule;
use crate::core::{Fix, PositionIndex, Problem};

pub const RULE_ID: &str = "rst.replaceYo";
const MESSAGE: &str = "Буква «ё» должна быть заменена на «е».";

/// Flags every `ё`/`Ё` and offers the case-matching `е`/`Е`
#[derive(Debug, Default, Clone)]
pub struct ReplaceYoRule;

impl ReplaceYoRule {
    pub fn new() -> Self {
        Self
    }
}

fn normalized(ch: char) -> Option<&'static str> {
    match ch {
        'ё' => Some("е"),
        'Ё' => Some("Е"),
        _ => None,
    }
}

impl Rule for ReplaceYoRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn message(&self) -> &str {
        MESSAGE
    }

    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem> {
        index
            .text()
            .char_indices()
            .filter_map(|(offset, ch)| {
                let replacement = normalized(ch)?;
                let range = index.range(offset, offset + ch.len_utf8());
                Some(
                    Problem::new(range, MESSAGE, RULE_ID)
                        .with_fix(Fix::replace(range, replacement)),
                )
            })
            .collect()
    }
}
