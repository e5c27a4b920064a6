use crate::storage::traits::{Storage, StorageError, StorageResult};
use std::path::Path;

/// Filesystem-backed page storage
///
/// Files are created with the platform's default permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FsStorage {
    fn ensure_dir(&mut self, dir: &Path) -> StorageResult<()> {
        if dir.as_os_str().is_empty() || dir.is_dir() {
            return Ok(());
        }

        tracing::debug!("Creating directory {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn write_page(&mut self, path: &Path, body: &[u8]) -> StorageResult<u64> {
        std::fs::write(path, body).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(body.len() as u64)
    }
}
