use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage
            .write_file("site/index.html", b"<html></html>")
            .await
            .unwrap();

        assert!(temp_dir.path().join("site/index.html").exists());
        let data = tokio::fs::read(temp_dir.path().join("site/index.html"))
            .await
            .unwrap();
        assert_eq!(data, b"<html></html>");
    }

    #[tokio::test]
    async fn test_write_under_a_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let storage = LocalStorage::new(blocker.to_str().unwrap().to_string());

        let err = storage
            .write_file("index.html", b"<html></html>")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::utils::error::CatalogError::IoError(_)));
    }
}
