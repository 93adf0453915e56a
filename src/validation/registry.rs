//! Rule Registry
//!
//! The ordered list of every rule and the flags saying which of them run.

use std::collections::BTreeMap;

use crate::rules::{
    bureaucratic_words, heading_gap, placeholder_case, replace_yo, sentence_per_line,
    BureaucraticWordsRule, HeadingGapRule, PhraseTable, PlaceholderCaseRule, ReplaceYoRule, Rule,
    SentencePerLineRule,
};
use crate::settings::LinterSettings;

/// Every rule id, in evaluation order
pub const ALL_RULE_IDS: [&str; 5] = [
    replace_yo::RULE_ID,
    bureaucratic_words::RULE_ID,
    placeholder_case::RULE_ID,
    sentence_per_line::RULE_ID,
    heading_gap::RULE_ID,
];

pub fn is_known_rule(rule_id: &str) -> bool {
    ALL_RULE_IDS.contains(&rule_id)
}

/// One enable flag per rule id; rules without a flag are enabled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSettings {
    flags: BTreeMap<String, bool>,
}

impl RuleSettings {
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.flags.get(rule_id).copied().unwrap_or(true)
    }

    pub fn set(&mut self, rule_id: &str, enabled: bool) {
        self.flags.insert(rule_id.to_string(), enabled);
    }

    /// Whether an explicit flag exists for `rule_id`
    pub fn contains(&self, rule_id: &str) -> bool {
        self.flags.contains_key(rule_id)
    }
}

/// Ordered set of rules plus their enable flags
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    settings: RuleSettings,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new(&LinterSettings::default())
    }
}

impl RuleRegistry {
    /// Build the full rule set from effective settings
    pub fn new(settings: &LinterSettings) -> Self {
        let mut phrases = PhraseTable::builtin();
        phrases.extend(settings.extra_phrases.iter().cloned());
        if phrases.is_empty() {
            log::warn!("Phrase table is empty, {} will report nothing", bureaucratic_words::RULE_ID);
        }

        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(ReplaceYoRule::new()),
            Box::new(BureaucraticWordsRule::new(phrases)),
            Box::new(PlaceholderCaseRule::new()),
            Box::new(SentencePerLineRule::new()),
            Box::new(HeadingGapRule::new(settings.heading_placeholder.clone())),
        ];

        Self::from_rules(rules, settings.rules.clone())
    }

    /// Registry over an explicit rule list
    pub fn from_rules(rules: Vec<Box<dyn Rule>>, settings: RuleSettings) -> Self {
        Self { rules, settings }
    }

    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// All rules in evaluation order, enabled or not
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Rules that run on a check, in evaluation order
    pub fn enabled_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules().filter(move |rule| self.settings.is_enabled(rule.id()))
    }

    pub fn get_rule(&self, rule_id: &str) -> Option<&dyn Rule> {
        self.rules().find(|rule| rule.id() == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_rule_ids() {
        let registry = RuleRegistry::default();
        let ids: Vec<&str> = registry.rules().map(|r| r.id()).collect();
        assert_eq!(ids, ALL_RULE_IDS.to_vec());
    }

    #[test]
    fn test_rules_default_to_enabled() {
        let settings = RuleSettings::default();
        for id in ALL_RULE_IDS {
            assert!(settings.is_enabled(id));
        }
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let mut settings = LinterSettings::default();
        settings.rules.set(sentence_per_line::RULE_ID, false);

        let registry = RuleRegistry::new(&settings);
        let ids: Vec<&str> = registry.enabled_rules().map(|r| r.id()).collect();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&sentence_per_line::RULE_ID));
        assert!(registry.get_rule(sentence_per_line::RULE_ID).is_some());
    }

    #[test]
    fn test_extra_phrases_reach_the_rule() {
        let mut settings = LinterSettings::default();
        settings.extra_phrases.push(crate::rules::PhraseEntry {
            forms: vec!["данный".to_string()],
            replacement: "этот".to_string(),
        });

        let registry = RuleRegistry::new(&settings);
        let index = crate::core::PositionIndex::new("данный текст");
        let problems = registry
            .get_rule(bureaucratic_words::RULE_ID)
            .unwrap()
            .check(&index);
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_every_rule_has_a_message() {
        for rule in RuleRegistry::default().rules() {
            assert!(!rule.message().is_empty(), "{} has no message", rule.id());
        }
    }

    #[test]
    fn test_known_rules() {
        assert!(is_known_rule("rst.headingGap"));
        assert!(!is_known_rule("rst.unknown"));
    }
}
