//! Keyed blob persistence
//!
//! The record store treats persistence as "load/save an opaque byte blob by
//! key". Keys are short fixed names such as `profile` and `first-launch`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MapdError, Result};

/// Key-value byte storage used by the record store
pub trait BlobStore {
    /// Load the blob stored under `key`, `None` if nothing was ever saved
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).save(key, bytes)
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        crate::bail_invalid!("blob key", key);
    }
    Ok(())
}

/// In-process blob store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, Vec<u8>>>,
    fail_saves: Cell<bool>,
    fail_load: RefCell<Option<String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, simulating a full or read-only disk
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Make `load` of `key` fail, simulating an unreadable file
    pub fn set_fail_load(&self, key: Option<&str>) {
        *self.fail_load.borrow_mut() = key.map(str::to_string);
    }

    /// Raw access for assertions
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Seed a value without going through validation
    pub fn insert(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.blobs.borrow_mut().insert(key.to_string(), bytes.into());
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        if self.fail_load.borrow().as_deref() == Some(key) {
            return Err(MapdError::io_operation(
                "load",
                key,
                "simulated storage failure",
            ));
        }
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        validate_key(key)?;
        if self.fail_saves.get() {
            return Err(MapdError::io_operation(
                "save",
                key,
                "simulated storage failure",
            ));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Directory-backed blob store: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Use `dir` for blobs; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MapdError::io_operation("read", path.display(), e)),
        }
    }

    #[tracing::instrument(skip(self, bytes), fields(dir = %self.dir.display(), len = bytes.len()))]
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| MapdError::io_operation("create directory", self.dir.display(), e))?;

        // Readers only ever see a complete blob: write aside, then rename over
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, bytes).map_err(|e| MapdError::io_operation("write", tmp.display(), e))?;
        fs::rename(&tmp, &path).map_err(|e| MapdError::io_operation("rename", path.display(), e))?;
        Ok(())
    }
}
