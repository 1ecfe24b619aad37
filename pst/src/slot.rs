//! Key-value slot abstraction over the persisted storage location

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::debug;

/// Minimal get/set-string-by-key persistence surface.
///
/// The store takes a slot instead of reaching for the filesystem itself, so
/// the template operations stay testable without a real storage directory.
pub trait KvSlot {
    /// Read the value under a key, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under a key
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Directory-backed slot: one file per key.
pub struct FileSlot {
    base_path: PathBuf,
}

impl FileSlot {
    /// Open or create a slot directory at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened file slot");
        Ok(Self { base_path })
    }
}

impl KvSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.base_path.join(key);
        if !path.exists() {
            return Ok(None);
        }
        let value =
            fs::read_to_string(&path).context(format!("Failed to read slot file: {}", path.display()))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.base_path.join(key);
        fs::write(&path, value).context(format!("Failed to write slot file: {}", path.display()))?;
        Ok(())
    }
}

/// In-memory slot for tests and embedding
#[derive(Default)]
pub struct MemSlot {
    entries: RefCell<HashMap<String, String>>,
}

impl KvSlot for MemSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
