/// File storage service - manages uploaded audio files on disk
use crate::error::{Result, ServerError};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Initialize the upload directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Store an uploaded file under a sanitized name
    ///
    /// An existing file with the same name is overwritten.
    pub async fn store_upload(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let safe_name = sanitize_filename(filename);
        if safe_name.is_empty() {
            return Err(ServerError::BadRequest("Invalid filename".to_string()));
        }

        let path = self.base_path.join(&safe_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&path, data).await?;
        Ok(path)
    }

    /// Remove a stored file, tolerating one that is already gone
    pub async fn remove(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reduce a client-supplied filename to a safe basename
///
/// Strips any path components and keeps only alphanumerics, dots, dashes,
/// and underscores; everything else becomes an underscore.
fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_matches('.');

    basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_remove() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        storage.initialize().await.unwrap();

        let data = b"fake audio data";
        let path = storage.store_upload("take five.mp3", data).await.unwrap();

        assert!(path.exists());
        assert!(path.starts_with(temp_dir.path()));
        assert_eq!(path.file_name().unwrap(), "take_five.mp3");

        storage.remove(&path).await.unwrap();
        assert!(!path.exists());

        // Removing again is not an error
        storage.remove(&path).await.unwrap();
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\music\\song.wav"), "song.wav");
        assert_eq!(sanitize_filename("ol' song!.mp3"), "ol__song_.mp3");
    }
}
