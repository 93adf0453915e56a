//! Settings file watching for live reload.

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events from the settings watcher
#[derive(Debug)]
pub enum SettingsEvent {
    SettingsFileChanged(PathBuf),
    WatcherError(notify::Error),
}

/// Keeps the underlying file watcher alive; dropping it stops the events
pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
    watched_dirs: Vec<PathBuf>,
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher")
            .field("watched_dirs", &self.watched_dirs)
            .finish()
    }
}

impl SettingsWatcher {
    /// Watch the directories containing `paths`.
    ///
    /// Files need not exist yet: creating one is reported like a change.
    pub fn start(paths: &[PathBuf]) -> Result<(Self, mpsc::UnboundedReceiver<SettingsEvent>)> {
        let (tx, rx) = mpsc::unbounded_channel();

        let file_names: BTreeSet<OsString> = paths
            .iter()
            .filter_map(|path| path.file_name().map(|name| name.to_os_string()))
            .collect();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if let EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) =
                        event.kind
                    {
                        for path in event.paths {
                            if is_settings_file(&path, &file_names) {
                                let _ = tx.send(SettingsEvent::SettingsFileChanged(path));
                            }
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(SettingsEvent::WatcherError(e));
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )?;

        let watched_dirs: Vec<PathBuf> = paths
            .iter()
            .filter_map(|path| path.parent())
            .filter(|dir| dir.is_dir())
            .map(Path::to_path_buf)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for dir in &watched_dirs {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
        }

        Ok((
            Self {
                _watcher: watcher,
                watched_dirs,
            },
            rx,
        ))
    }

    pub fn watched_dirs(&self) -> &[PathBuf] {
        &self.watched_dirs
    }
}

fn is_settings_file(path: &Path, file_names: &BTreeSet<OsString>) -> bool {
    path.file_name()
        .is_some_and(|name| file_names.contains(name))
}
