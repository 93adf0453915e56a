//! Settings File Schema
//!
//! Serde types mirroring `rst-style.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::rules::PhraseEntry;

/// Root of a settings file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SettingsFile {
    /// Per-rule enable flags keyed by rule id
    #[serde(default)]
    pub rules: BTreeMap<String, bool>,
    #[serde(default)]
    pub heading_gap: Option<HeadingGapSection>,
    /// Extra bureaucratic phrase groups appended to the built-in table
    #[serde(default)]
    pub phrases: Vec<PhraseEntry>,
}

/// `[heading_gap]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HeadingGapSection {
    /// Body text inserted under an empty heading
    pub placeholder: Option<String>,
}

/// Where a settings file comes from; later sources override earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SettingsPriority {
    UserGlobal = 1,
    Workspace = 2,
    Explicit = 3,
}

/// A settings file location and its priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSource {
    pub priority: SettingsPriority,
    pub path: std::path::PathBuf,
}
