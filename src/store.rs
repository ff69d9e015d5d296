//! JSON persistence for the app registry.
//!
//! The backing store is a single JSON object mapping app names to paths.
//! Writes go to a sibling temp file first and are renamed over the target.

use indexmap::IndexMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use crate::error::{Error, Result};
use crate::logger::{debug, info, warn};

pub const DEFAULT_STORE_FILE: &str = "apps.json";

pub type AppMap = IndexMap<String, String>;

/// Result of reading the backing store. `corrupted` is set when the file
/// existed but could not be used, in which case `apps` is empty.
#[derive(Debug, Default)]
pub struct Loaded {
    pub apps: AppMap,
    pub corrupted: Option<Error>,
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Loaded {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("store '{}' not found, starting empty", self.path.display());
                return Loaded::default();
            }
            Err(err) => return self.corrupted(err.to_string()),
        };

        match serde_json::from_str::<AppMap>(&contents) {
            Ok(apps) => {
                info!("loaded {} app(s) from '{}'", apps.len(), self.path.display());
                Loaded {
                    apps,
                    corrupted: None,
                }
            }
            Err(err) => self.corrupted(err.to_string()),
        }
    }

    pub fn save(&self, apps: &AppMap) -> Result<()> {
        self.write_atomic(apps).map_err(|source| {
            warn!("failed to save '{}': {}", self.path.display(), source);
            Error::WriteFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!("saved {} app(s) to '{}'", apps.len(), self.path.display());
        Ok(())
    }

    fn write_atomic(&self, apps: &AppMap) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(apps)?;
        let temp_path = self.temp_path();
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(serialized.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        });

        let result = written.and_then(|()| fs::rename(&temp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", process::id()));
        self.path.with_file_name(name)
    }

    fn corrupted(&self, reason: String) -> Loaded {
        warn!("store '{}' is unusable: {}", self.path.display(), reason);
        Loaded {
            apps: AppMap::new(),
            corrupted: Some(Error::LoadCorrupted {
                path: self.path.clone(),
                reason,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> AppMap {
        let mut apps = AppMap::new();
        apps.insert("Editor".to_string(), "/usr/bin/editor".to_string());
        apps.insert("Browser".to_string(), "/usr/bin/browser".to_string());
        apps
    }

    #[test]
    fn missing_file_loads_empty_without_error() {
        let dir = tempdir().unwrap();
        let loaded = JsonStore::new(dir.path().join("apps.json")).load();
        assert!(loaded.apps.is_empty());
        assert!(loaded.corrupted.is_none());
    }

    #[test]
    fn save_then_load_preserves_entries_and_order() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("apps.json"));
        store.save(&sample()).unwrap();

        let loaded = store.load();
        assert!(loaded.corrupted.is_none());
        assert_eq!(loaded.apps, sample());
        let names: Vec<&str> = loaded.apps.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Editor", "Browser"]);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested/state/apps.json"));
        store.save(&sample()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("apps.json"));
        store.save(&sample()).unwrap();
        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn non_object_content_is_reported_as_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apps.json");
        let contents = [
            "[\"Editor\", \"/usr/bin/editor\"]",
            "42",
            "\"apps\"",
            "{\"Editor\": 1}",
            "{not json",
        ];
        for content in contents {
            fs::write(&path, content).unwrap();
            let loaded = JsonStore::new(&path).load();
            assert!(loaded.apps.is_empty(), "content {content:?} should load empty");
            assert!(
                matches!(loaded.corrupted, Some(Error::LoadCorrupted { .. })),
                "content {content:?} should signal corruption"
            );
        }
    }

    #[test]
    fn unwritable_target_reports_write_failed() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let store = JsonStore::new(blocker.join("apps.json"));
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, Error::WriteFailed { .. }));
    }
}
