//! Persistence backends for the complaint slot.
//!
//! A backend is a named-slot key-value store holding one serialized string
//! per slot. The complaint store only ever reads and replaces whole slots.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// Storage for named string slots.
pub trait PersistenceBackend: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn read(&self, slot: &str) -> io::Result<Option<String>>;

    /// Replace a slot's entire contents.
    fn write(&self, slot: &str, contents: &str) -> io::Result<()>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// In-process slot map. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with data exported from another session.
    pub fn with_slot(self, slot: &str, contents: impl Into<String>) -> Self {
        self.slots.write().insert(slot.to_string(), contents.into());
        self
    }
}

impl PersistenceBackend for MemoryBackend {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        Ok(self.slots.read().get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        self.slots.write().insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// One JSON file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::debug!("FILE_BACKEND_OPEN dir={}", dir.display());
        Ok(Self { dir })
    }

    /// Path of the file holding `slot`.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl PersistenceBackend for FileBackend {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        atomic_write(&self.slot_path(slot), contents)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

/// Write through a sibling temp file and rename it over the target, so a
/// reader never sees a half-written slot.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}
