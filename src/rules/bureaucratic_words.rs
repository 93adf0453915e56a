//! Bureaucratic phrase detection
//!
//! Each phrase entry is a set of literal word forms mapped to one plainer
//! replacement. Forms match case-insensitively and only as whole words: the
//! characters on either side of a match must not be letters.

use serde::Deserialize;

use super::Rule;
use crate::core::{Fix, PositionIndex, Problem};

pub const RULE_ID: &str = "rst.bureaucraticWords";
const MESSAGE: &str =
    "Похоже на канцелярит – рекомендуется заменить на более простую формулировку.";

/// One group of word forms and the word offered instead of any of them
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhraseEntry {
    pub forms: Vec<String>,
    pub replacement: String,
}

/// Root of a phrase TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PhraseFile {
    #[serde(default)]
    pub phrases: Vec<PhraseEntry>,
}

impl PhraseEntry {
    /// Byte end of a form matched at `start`, if any form matches there as a whole word.
    ///
    /// Forms are tried in table order; the first one that fits wins.
    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        self.forms
            .iter()
            .find_map(|form| match_form(text, start, form))
    }

    /// All non-overlapping whole-word matches, left to right
    fn find_matches(&self, text: &str) -> Vec<(usize, usize)> {
        let mut matches = Vec::new();
        let mut prev: Option<char> = None;
        let mut resume_at = 0;

        for (offset, ch) in text.char_indices() {
            if offset >= resume_at && !prev.is_some_and(char::is_alphabetic) {
                if let Some(end) = self.match_at(text, offset) {
                    matches.push((offset, end));
                    resume_at = end;
                }
            }
            prev = Some(ch);
        }

        matches
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Match `form` at byte `start` and check the trailing word boundary
fn match_form(text: &str, start: usize, form: &str) -> Option<usize> {
    let mut rest = text[start..].char_indices();
    let mut end = start;

    for expected in form.chars() {
        let (idx, actual) = rest.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
        end = start + idx + actual.len_utf8();
    }

    if end == start || text[end..].chars().next().is_some_and(char::is_alphabetic) {
        return None;
    }

    Some(end)
}

/// Ordered collection of phrase entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table shipped with the server
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.add_embedded_phrases();
        table
    }

    /// Append an entry. Blank forms are dropped; an entry left without forms is skipped.
    pub fn add_entry(&mut self, entry: PhraseEntry) {
        let forms: Vec<String> = entry
            .forms
            .into_iter()
            .map(|form| form.trim().to_string())
            .filter(|form| !form.is_empty())
            .collect();

        if forms.is_empty() {
            log::warn!(
                "Ignoring phrase entry without forms (replacement '{}')",
                entry.replacement
            );
            return;
        }

        self.entries.push(PhraseEntry {
            forms,
            replacement: entry.replacement,
        });
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = PhraseEntry>) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add_embedded_phrases(&mut self) {
        let embedded_toml = include_str!("../../resources/phrases/bureaucratic.toml");

        match toml::from_str::<PhraseFile>(embedded_toml) {
            Ok(file) => self.extend(file.phrases),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded phrase table: {}. Using minimal fallback.",
                    e
                );
                self.add_minimal_phrases();
            }
        }
    }

    fn add_minimal_phrases(&mut self) {
        self.add_entry(PhraseEntry {
            forms: ["является", "являются", "являться"]
                .into_iter()
                .map(String::from)
                .collect(),
            replacement: "быть".to_string(),
        });
    }
}

/// Flags bureaucratic words and offers the configured replacement verbatim
#[derive(Debug, Clone)]
pub struct BureaucraticWordsRule {
    table: PhraseTable,
}

impl BureaucraticWordsRule {
    pub fn new(table: PhraseTable) -> Self {
        Self { table }
    }
}

impl Default for BureaucraticWordsRule {
    fn default() -> Self {
        Self::new(PhraseTable::builtin())
    }
}

impl Rule for BureaucraticWordsRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn message(&self) -> &str {
        MESSAGE
    }

    fn check(&self, index: &PositionIndex<'_>) -> Vec<Problem> {
        let text = index.text();

        let mut found: Vec<(usize, usize, &str)> = self
            .table
            .entries()
            .iter()
            .flat_map(|entry| {
                entry
                    .find_matches(text)
                    .into_iter()
                    .map(move |(start, end)| (start, end, entry.replacement.as_str()))
            })
            .collect();

        // Stable: entries matching at the same offset keep table order
        found.sort_by_key(|&(start, _, _)| start);

        found
            .into_iter()
            .map(|(start, end, replacement)| {
                let range = index.range(start, end);
                Problem::new(range, MESSAGE, RULE_ID).with_fix(Fix::replace(range, replacement))
            })
            .collect()
    }
}
