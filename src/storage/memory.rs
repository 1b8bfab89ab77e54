use super::{validate_key, BlobStore};
use crate::errors::StorageError;
use std::collections::HashMap;

/// Keeps blobs in memory. Used for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
