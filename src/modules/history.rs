use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};
use snafu::ResultExt;

use crate::errors::{CustomResult, HistorySerializeSnafu, HistoryWriteSnafu};
use crate::modules::models::entry::Entry;

/// # history of submitted results
/// entries are kept in insertion order, which is also chronological order.
pub trait HistoryStore: Send + Sync {
    /// all entries, oldest first. never fails, unreadable history is empty.
    fn load_all(&self) -> Vec<Entry>;

    fn append(&self, entry: Entry) -> CustomResult<()>;

    fn clear(&self) -> CustomResult<()>;
}

pub type SharedStore = Box<dyn HistoryStore>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// # history stored as a pretty printed json array in a single file
/// every change rewrites the whole file through a temp file and a rename.
/// read-modify-write cycles are serialized per store.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> JsonFileStore {
        JsonFileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn read_entries(&self) -> Vec<Entry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(target:"history:load", "no history file at {:?}", self.path);
                return Vec::new();
            }
            Err(error) => {
                warn!(target:"history:load", "Error reading {:?}, using empty history. (error: {})", self.path, error);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(error) => {
                warn!(target:"history:load", "{:?} is not a json array, using empty history. (error: {})", self.path, error);
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Entry>(value) {
                Ok(entry) => Some(entry),
                Err(error) => {
                    warn!(target:"history:load", "skipping malformed entry {} in {:?}. (error: {})", index, self.path, error);
                    None
                }
            })
            .collect()
    }

    fn write_entries(&self, entries: &[Entry]) -> CustomResult<()> {
        let json = serde_json::to_string_pretty(entries).context(HistorySerializeSnafu)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(HistoryWriteSnafu {
                    path: parent.to_path_buf(),
                })?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).context(HistoryWriteSnafu {
            path: temp_path.clone(),
        })?;
        fs::rename(&temp_path, &self.path).context(HistoryWriteSnafu {
            path: self.path.clone(),
        })?;

        Ok(())
    }
}

impl HistoryStore for JsonFileStore {
    fn load_all(&self) -> Vec<Entry> {
        let _guard = lock(&self.write_lock);
        self.read_entries()
    }

    fn append(&self, entry: Entry) -> CustomResult<()> {
        let _guard = lock(&self.write_lock);

        let mut entries = self.read_entries();
        entries.push(entry);
        self.write_entries(&entries)?;

        debug!(target:"history:append", "history now holds {} entries", entries.len());
        Ok(())
    }

    fn clear(&self) -> CustomResult<()> {
        let _guard = lock(&self.write_lock);

        self.write_entries(&[])?;

        info!(target:"history:clear", "cleared history at {:?}", self.path);
        Ok(())
    }
}

/// history kept in memory only, lost when dropped
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<Entry>>,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> InMemoryStore {
        InMemoryStore {
            entries: Mutex::new(entries),
        }
    }
}

impl HistoryStore for InMemoryStore {
    fn load_all(&self) -> Vec<Entry> {
        lock(&self.entries).clone()
    }

    fn append(&self, entry: Entry) -> CustomResult<()> {
        lock(&self.entries).push(entry);
        Ok(())
    }

    fn clear(&self) -> CustomResult<()> {
        lock(&self.entries).clear();
        Ok(())
    }
}
