//! # Cart Slots
//!
//! A slot is a single named, string-valued entry in durable storage: the
//! storefront's equivalent of one browser-local key.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartSlot (trait)                                                       │
//! │  ├── FileSlot    <data_dir>/<key>.json   (survives restarts)            │
//! │  └── MemorySlot  String in the process   (tests, --ephemeral)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots know nothing about carts; they move opaque strings. Last writer
//! wins, there is no versioning and no cross-process coordination.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// One named key-value entry.
pub trait CartSlot {
    /// The slot's key (for logs and errors).
    fn key(&self) -> &str;

    /// Reads the slot. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Overwrites the slot.
    fn write(&mut self, contents: &str) -> StorageResult<()>;
}

impl<S: CartSlot + ?Sized> CartSlot for Box<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> StorageResult<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        (**self).write(contents)
    }
}

// =============================================================================
// File Slot
// =============================================================================

/// A slot backed by `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file that is then renamed over the slot, so
/// a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{}.json", key));
        FileSlot { key, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn write_err(&self, source: std::io::Error) -> StorageError {
        StorageError::SlotWrite {
            key: self.key.clone(),
            source,
        }
    }
}

impl CartSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::SlotRead {
                key: self.key.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, contents).map_err(|e| self.write_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.write_err(e))?;

        debug!(path = ?self.path, bytes = contents.len(), "Slot written");
        Ok(())
    }
}

// =============================================================================
// Memory Slot
// =============================================================================

/// An in-process slot. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    key: String,
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        MemorySlot {
            key: key.into(),
            ..MemorySlot::default()
        }
    }

    /// A slot that already holds `contents`, as if written by an earlier session.
    pub fn with_contents(key: impl Into<String>, contents: impl Into<String>) -> Self {
        MemorySlot {
            contents: Some(contents.into()),
            ..MemorySlot::new(key)
        }
    }

    /// Makes every subsequent write fail, like a full storage quota.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl CartSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::SlotWrite {
                key: self.key.clone(),
                source: std::io::Error::other("storage quota exceeded"),
            });
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
