//! Placeholder snake_case validation
//!
//! Placeholders are `<...>` tokens without nested angle brackets. Their
//! inner text must be lowercase ASCII words joined by single underscores.

use regex::Regex;
use std::sync::LazyLock;

use super::Rule;
use crate::core::{Fix, PositionIndex, Problem};

pub const RULE_ID: &str = "rst.placeholderSnakeCase";
const MESSAGE: &str = "Плейсхолдер должен быть записан в snake_case.";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]+)>").expect("valid placeholder pattern"));
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(_[a-z]+)*$").expect("valid snake_case pattern"));

/// Canonicalize placeholder text.
///
/// Runs of hyphens and whitespace become one underscore, repeated
/// underscores collapse, leading and trailing underscores go, and the
/// result is lowercased. CamelCase is not split: `IpAddress` → `ipaddress`.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_underscore = false;

    for ch in s.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            pending_underscore = true;
            continue;
        }
        if pending_underscore && !out.is_empty() {
            out.push('_');
        }
        pending_underscore = false;
        out.extend(ch.to_lowercase());
    }

    out
}

pub fn is_snake_case(s: &str) -> bool {
    SNAKE_CASE.is_match(s)
}

/// Whether `start..end` sits between two backticks with no line break between them
fn inside_inline_literal(text: &str, start: usize, end: usize) -> bool {
    let Some(open) = text[..start].rfind('`') else {
        return false;
    };
    let Some(close) = text[end..].find('`').map(|i| end + i) else {
        return false;
    };

    !text[open..=close].contains('\n')
}

/// Flags placeholders that are not snake_case
#[derive(Debug, Default, Clone)]
pub struct PlaceholderCaseRule;

impl PlaceholderCaseRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PlaceholderCaseRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn message(&self) -> &str {
        MESSAGE
    }

    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem> {
        let text = index.text();
        let mut problems = Vec::new();

        for captures in PLACEHOLDER.captures_iter(text) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            if is_snake_case(inner.as_str()) {
                continue;
            }

            if inside_inline_literal(text, whole.start(), whole.end()) {
                continue;
            }

            let range = index.range(whole.start(), whole.end());
            let fixed = format!("<{}>", to_snake_case(inner.as_str()));
            let problem = Problem::new(range, MESSAGE, RULE_ID);

            // Content such as digits survives canonicalization unchanged;
            // there is nothing to offer then.
            problems.push(if fixed == whole.as_str() {
                problem
            } else {
                problem.with_fix(Fix::replace(range, fixed))
            });
        }

        problems
    }
}
