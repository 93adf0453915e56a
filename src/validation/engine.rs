//! Check Engine
//!
//! Runs registered rules over a text snapshot, filters by range and
//! deduplicates. Every call starts from scratch; nothing is cached.

use std::collections::HashSet;

use super::registry::RuleRegistry;
use crate::core::{apply_fix, PositionIndex, Problem, Range};

/// Run every enabled rule and concatenate the results in registry order
pub fn check_all(text: &str, registry: &RuleRegistry) -> Vec<Problem> {
    let index = PositionIndex::new(text);

    registry
        .enabled_rules()
        .flat_map(|rule| {
            let problems = rule.check(&index);
            log::trace!("{} reported {} problem(s)", rule.id(), problems.len());
            problems
        })
        .collect()
}

/// Problems intersecting `range`, one per distinct problem range
pub fn check_in_range(text: &str, registry: &RuleRegistry, range: Range) -> Vec<Problem> {
    dedup_by_range(
        check_all(text, registry)
            .into_iter()
            .filter(|problem| problem.range.intersects(&range)),
    )
}

/// Keep only the first problem seen for each range
pub fn dedup_by_range(problems: impl IntoIterator<Item = Problem>) -> Vec<Problem> {
    let mut seen = HashSet::new();
    problems
        .into_iter()
        .filter(|problem| seen.insert(problem.range.key()))
        .collect()
}

/// Sort into document order; ties keep registry order
pub fn sort_by_range(problems: &mut [Problem]) {
    problems.sort_by_key(|problem| problem.range);
}

/// Result of fixing a text until no fix applies
#[derive(Debug, Clone, PartialEq)]
pub struct FixOutcome {
    pub text: String,
    /// Number of fixes applied
    pub applied: usize,
    /// Problems still present in the final text
    pub remaining: Vec<Problem>,
}

/// Apply fixes one at a time, re-checking the whole text after each edit.
///
/// Problems from an older snapshot are never reused. Stops when no fix
/// changes the text or after `max_passes` edits.
pub fn fix_all(text: &str, registry: &RuleRegistry, max_passes: usize) -> FixOutcome {
    let mut current = text.to_string();
    let mut applied = 0;

    while applied < max_passes {
        let mut problems = check_all(&current, registry);
        sort_by_range(&mut problems);

        let next = problems
            .iter()
            .filter_map(|problem| problem.fix.as_ref())
            .map(|fix| apply_fix(&current, fix))
            .find(|edited| *edited != current);

        match next {
            Some(edited) => {
                current = edited;
                applied += 1;
            }
            None => break,
        }
    }

    if applied == max_passes {
        log::warn!("Stopped fixing after {} passes", max_passes);
    }

    let mut remaining = check_all(&current, registry);
    sort_by_range(&mut remaining);

    FixOutcome {
        text: current,
        applied,
        remaining,
    }
}
