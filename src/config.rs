//! Configuration management for the reStructuredText style linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Settings file discovery (user-global, workspace, explicit)

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::settings::{LinterSettings, SettingsPriority, SettingsSource};

/// File name of the user-global settings file
pub const USER_SETTINGS_FILE: &str = "rst-style.toml";
/// File name of the per-workspace settings file
pub const WORKSPACE_SETTINGS_FILE: &str = ".rst-style.toml";

/// Arguments shared by the language server and the batch checker
#[derive(Debug, Clone, clap::Args)]
pub struct SettingsArgs {
    /// Explicit settings file, overriding user and workspace settings
    #[arg(long, help = "Path to an rst-style.toml settings file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Rules to turn off regardless of settings files
    #[arg(
        long = "disable",
        value_name = "RULE_ID",
        help = "Disable a rule by id (repeatable), e.g. 'rst.sentencePerLine'"
    )]
    pub disabled_rules: Vec<String>,
}

/// Command-line arguments for the language server
#[derive(Debug, Parser)]
#[command(name = "rst-style-ls")]
#[command(about = "Language server with style checks for reStructuredText files")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings file given with `--config`
    pub explicit_config: Option<PathBuf>,
    /// Directory holding the user-global settings file
    pub user_config_dir: Option<PathBuf>,
    /// Workspace root, known once the client has initialized
    pub workspace_root: Option<PathBuf>,
    pub disabled_rules: Vec<String>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_settings_args(args.settings)
    }

    pub fn from_settings_args(args: SettingsArgs) -> Result<Self> {
        let workspace_root = std::env::current_dir().ok();

        Ok(Config {
            explicit_config: args.config,
            user_config_dir: dirs::config_dir().map(|dir| dir.join("rst-style-ls")),
            workspace_root,
            disabled_rules: args.disabled_rules,
            log_level: args.log_level,
        })
    }

    pub fn set_workspace_root(&mut self, root: impl AsRef<Path>) {
        self.workspace_root = Some(root.as_ref().to_path_buf());
    }

    /// Every settings file location, lowest priority first
    pub fn settings_sources(&self) -> Vec<SettingsSource> {
        let mut sources = Vec::new();

        if let Some(dir) = &self.user_config_dir {
            sources.push(SettingsSource {
                priority: SettingsPriority::UserGlobal,
                path: dir.join(USER_SETTINGS_FILE),
            });
        }

        if let Some(root) = &self.workspace_root {
            sources.push(SettingsSource {
                priority: SettingsPriority::Workspace,
                path: root.join(WORKSPACE_SETTINGS_FILE),
            });
        }

        if let Some(path) = &self.explicit_config {
            sources.push(SettingsSource {
                priority: SettingsPriority::Explicit,
                path: path.clone(),
            });
        }

        sources
    }

    /// Load the effective linter settings from every source
    pub fn load_settings(&self) -> LinterSettings {
        LinterSettings::load(&self.settings_sources(), &self.disabled_rules)
    }
}
