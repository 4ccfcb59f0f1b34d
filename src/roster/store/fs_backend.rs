use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: every slot is a `<key>.json` file under one directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }

    fn check_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(RosterError::Store(format!("Invalid slot key: {:?}", key)))
        }
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::check_key(key)?;
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::check_key(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RosterError::Io)?;
        fs::rename(&tmp_path, self.slot_path(key)).map_err(RosterError::Io)?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::check_key(key)?;
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}
