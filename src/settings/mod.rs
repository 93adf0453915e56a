//! Linter Settings
//!
//! Rule enable flags, the heading placeholder and extra phrase groups,
//! read from `rst-style.toml` files and reloaded when they change.

pub mod loader;
pub mod schema;
pub mod watcher;

pub use loader::{load_settings_file, parse_settings, LinterSettings};
pub use schema::{SettingsFile, SettingsPriority, SettingsSource};
pub use watcher::{SettingsEvent, SettingsWatcher};
