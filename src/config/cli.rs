use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads catalog files relative to a base directory. Absolute paths are used
/// as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_relative_to_base() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("reagents.json"), b"{}").unwrap();

        let storage = LocalStorage::new(dir.path());
        let bytes = storage.read_file("reagents.json").await.unwrap();
        assert_eq!(bytes, b"{}");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.read_file("nope.json").await.is_err());
    }

    #[test]
    fn test_absolute_path_wins() {
        let storage = LocalStorage::new("/srv/catalogs");
        let abs = std::env::temp_dir().join("equipment.json");
        assert_eq!(storage.resolve(abs.to_str().unwrap()), abs);
    }
}
