//! Settings Loading
//!
//! Loading priority: built-in defaults < user-global < workspace < explicit
//! `--config` file < `--disable` flags. Missing files are skipped; broken
//! files are logged and skipped so one bad file never takes the linter down.

use anyhow::{Context, Result};
use std::path::Path;

use super::schema::{SettingsFile, SettingsSource};
use crate::rules::heading_gap::DEFAULT_PLACEHOLDER;
use crate::rules::PhraseEntry;
use crate::validation::registry::{is_known_rule, RuleSettings};

/// Effective linter settings after all sources are merged
#[derive(Debug, Clone, PartialEq)]
pub struct LinterSettings {
    pub rules: RuleSettings,
    pub heading_placeholder: String,
    pub extra_phrases: Vec<PhraseEntry>,
}

impl Default for LinterSettings {
    fn default() -> Self {
        Self {
            rules: RuleSettings::default(),
            heading_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            extra_phrases: Vec::new(),
        }
    }
}

impl LinterSettings {
    /// Load and merge every source in priority order, then apply `disabled` rule ids
    pub fn load(sources: &[SettingsSource], disabled: &[String]) -> Self {
        let mut sources = sources.to_vec();
        sources.sort_by_key(|source| source.priority);

        let mut settings = Self::default();

        for source in &sources {
            match load_settings_file(&source.path) {
                Ok(Some(file)) => {
                    log::info!(
                        "Loaded {:?} settings from {}",
                        source.priority,
                        source.path.display()
                    );
                    settings.merge(file);
                }
                Ok(None) => {
                    log::debug!("No settings file at {}", source.path.display());
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        for rule_id in disabled {
            settings.disable_rule(rule_id);
        }

        settings
    }

    /// Overlay one settings file on top of the current values
    pub fn merge(&mut self, file: SettingsFile) {
        for (rule_id, enabled) in file.rules {
            if !is_known_rule(&rule_id) {
                log::warn!("Unknown rule id '{}' in settings, ignoring", rule_id);
                continue;
            }
            self.rules.set(&rule_id, enabled);
        }

        if let Some(placeholder) = file.heading_gap.and_then(|section| section.placeholder) {
            let placeholder = placeholder.trim();
            // The inserted body must count as section content or the fix would re-trigger
            if placeholder.is_empty() || placeholder.starts_with("..") {
                log::warn!(
                    "Heading placeholder '{}' would not count as section text, keeping '{}'",
                    placeholder,
                    self.heading_placeholder
                );
            } else {
                self.heading_placeholder = placeholder.to_string();
            }
        }

        self.extra_phrases.extend(file.phrases);
    }

    pub fn disable_rule(&mut self, rule_id: &str) {
        if is_known_rule(rule_id) {
            self.rules.set(rule_id, false);
        } else {
            log::warn!("Cannot disable unknown rule '{}'", rule_id);
        }
    }
}

/// Parse settings TOML
pub fn parse_settings(content: &str, source_path: Option<&Path>) -> Result<SettingsFile> {
    toml::from_str(content).with_context(|| match source_path {
        Some(path) => format!("Failed to parse settings TOML: {}", path.display()),
        None => "Failed to parse settings TOML".to_string(),
    })
}

/// Read and parse one settings file; `Ok(None)` when it does not exist
pub fn load_settings_file(path: &Path) -> Result<Option<SettingsFile>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    parse_settings(&content, Some(path)).map(Some)
}
