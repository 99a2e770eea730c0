use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem adapter for the `Storage` port, rooted at a base directory.
/// Missing parent directories are created on write.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Rooted at the configured library directory.
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.library_path())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HuegenError;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy());

        tokio_test::block_on(async {
            storage.write_file("data.json", b"[1, 2, 3]").await.unwrap();
            let bytes = storage.read_file("data.json").await.unwrap();
            assert_eq!(bytes, b"[1, 2, 3]");
        });
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy());

        let err = tokio_test::block_on(storage.read_file("absent.json")).unwrap_err();
        match err {
            HuegenError::IoError(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = LocalStorage::new(nested.to_string_lossy());

        tokio_test::block_on(storage.write_file("data.json", b"{}")).unwrap();
        assert!(nested.join("data.json").exists());
    }
}
