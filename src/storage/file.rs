use super::{validate_key, BlobStore};
use crate::constants::BLOB_FILE_EXTENSION;
use crate::errors::StorageError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores each key as `<data_dir>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers only ever see a complete blob. Temporary files
/// are created owner-only, and the rename keeps those permissions.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    data_dir: PathBuf,
}

impl FileBlobStore {
    /// Creates a store rooted at `data_dir`. The directory must already exist
    /// when saving; see [`super::ensure_data_dir_exists`].
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FileBlobStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self
            .data_dir
            .join(format!("{}.{}", key, BLOB_FILE_EXTENSION)))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                path,
                source,
            }),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_error = |source: std::io::Error| StorageError::Write {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(write_error)?;
        temp.write_all(blob.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&path).map_err(|e| write_error(e.error))?;

        debug!(key, path = %path.display(), "wrote blob file");
        Ok(())
    }
}
