use std::path::{Component, Path, PathBuf};

use chrono::Utc;

use crate::error::storage::StorageError;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_PDF_BYTES: usize = 25 * 1024 * 1024;

pub const ALLOWED_IMAGE_MIMES: &[&str] = &["image/png", "image/webp", "image/jpeg"];
pub const ALLOWED_PDF_MIMES: &[&str] = &["application/pdf"];

/// Disk-backed storage for uploaded images and PDFs.
///
/// Files land under `<root>/<category>/<id>/` and are referenced by a
/// relative path stored on the owning row. Stored paths never carry a
/// leading slash.
#[derive(Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an uploaded file and returns the relative path to store.
    ///
    /// The original filename is sanitized and prefixed with a millisecond
    /// timestamp so replacing a file never reuses a name.
    pub async fn save(
        &self,
        category: &str,
        id: i32,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let name = sanitize_filename(filename);
        let relative = format!(
            "{category}/{id}/{}_{name}",
            Utc::now().timestamp_millis()
        );

        let absolute = self.root.join(&relative);
        if let Some(parent) = absolute.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&absolute, bytes).await?;

        Ok(relative)
    }

    /// Removes a stored file; a path that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> Result<(), StorageError> {
        let relative = normalize_path(relative);
        let path = Path::new(relative);

        if relative.is_empty()
            || path
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }

        match tokio::fs::remove_file(self.root.join(path)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Strips the historical leading slash from stored paths.
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

fn sanitize_filename(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("file");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, sanitize_filename, FileStorage};

    #[test]
    fn normalize_strips_leading_slash() {
        assert_eq!(normalize_path("/markets/1/a.png"), "markets/1/a.png");
        assert_eq!(normalize_path("markets/1/a.png"), "markets/1/a.png");
    }

    #[test]
    fn sanitize_drops_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("ürün fotoğrafı.png"), "-r-n-foto-raf-.png");
        assert_eq!(sanitize_filename(""), "file");
    }

    /// Saved files land under the category/id directory and round-trip
    #[tokio::test]
    async fn save_and_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let relative = storage
            .save("markets", 7, "photo.png", b"not-really-a-png")
            .await
            .unwrap();

        assert!(relative.starts_with("markets/7/"));
        assert!(!relative.starts_with('/'));
        assert!(dir.path().join(&relative).exists());

        storage.remove(&relative).await.unwrap();
        assert!(!dir.path().join(&relative).exists());

        // Removing again is fine
        storage.remove(&relative).await.unwrap();
    }

    /// Paths escaping the upload root are rejected
    #[tokio::test]
    async fn remove_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.remove("../outside.txt").await.is_err());
    }
}
