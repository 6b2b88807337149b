//! Filesystem-backed file containers
//!
//! This module provides the [`ContentFile`] struct, which loads paths on the
//! local filesystem into [`FileWrapper`] containers and writes exported
//! containers back out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::TRACING_TARGET_FS;
use crate::error::{Error, Result};
use crate::fs::MediaType;
use crate::io::{FileContainer, FileWrapper};

/// Size of the buffer used when reading files with a size limit.
const READ_CHUNK_SIZE: usize = 8192;

/// A path on the local filesystem acting as a file container
///
/// Loading never interprets the bytes; that is the job of the document
/// variants. The media type is inferred from the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    path: PathBuf,
}

impl ContentFile {
    /// Create a new `ContentFile` for the given path
    ///
    /// Nothing is touched on disk until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the filename if available
    pub fn filename(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// Get the file extension if available
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Media type inferred from the extension, [`MediaType::Data`] when unknown
    pub fn media_type(&self) -> MediaType {
        self.extension()
            .and_then(MediaType::from_extension)
            .unwrap_or_default()
    }

    /// Load the path into a container
    ///
    /// Directories become directory containers listing their entry names in
    /// sorted order; regular files become regular-file containers.
    ///
    /// # Errors
    ///
    /// Returns an [`Io`](crate::ErrorKind::Io) error if the path does not
    /// exist or cannot be read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tempbox_core::fs::ContentFile;
    ///
    /// async fn load() -> tempbox_core::Result<()> {
    ///     let wrapper = ContentFile::new("addresses.csv").load().await?;
    ///     println!("Loaded {} bytes", wrapper.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn load(&self) -> Result<FileWrapper> {
        self.load_with_limit(None).await
    }

    /// Load the path, rejecting regular files larger than `max_size` bytes
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInput`](crate::ErrorKind::InvalidInput) error when
    /// the file exceeds the limit, or an [`Io`](crate::ErrorKind::Io) error
    /// when it cannot be read.
    pub async fn load_limited(&self, max_size: usize) -> Result<FileWrapper> {
        self.load_with_limit(Some(max_size)).await
    }

    async fn load_with_limit(&self, max_size: Option<usize>) -> Result<FileWrapper> {
        let metadata = tokio::fs::metadata(&self.path).await?;

        let wrapper = if metadata.is_dir() {
            let entries = self.read_directory_entries().await?;
            tracing::debug!(
                target: TRACING_TARGET_FS,
                path = %self.path.display(),
                entries = entries.len(),
                "Loaded directory container"
            );
            FileWrapper::directory(entries)
        } else {
            let contents = match max_size {
                Some(max_size) => self.read_limited(max_size).await?,
                None => tokio::fs::read(&self.path).await?,
            };
            tracing::debug!(
                target: TRACING_TARGET_FS,
                path = %self.path.display(),
                size = contents.len(),
                "Loaded regular file container"
            );
            FileWrapper::regular_file(Bytes::from(contents))
        };

        let wrapper = wrapper.with_media_type(self.media_type());
        Ok(match self.filename() {
            Some(filename) => wrapper.with_preferred_filename(filename),
            None => wrapper,
        })
    }

    async fn read_directory_entries(&self) -> Result<Vec<String>> {
        let mut read_dir = tokio::fs::read_dir(&self.path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            entries.push(entry.file_name().to_string_lossy().into_owned());
        }

        entries.sort();
        Ok(entries)
    }

    async fn read_limited(&self, max_size: usize) -> Result<Vec<u8>> {
        let mut file = File::open(&self.path).await?;
        let mut buffer = Vec::with_capacity(max_size.min(READ_CHUNK_SIZE));
        let mut temp_buffer = vec![0u8; READ_CHUNK_SIZE];

        loop {
            let bytes_read = file.read(&mut temp_buffer).await?;
            if bytes_read == 0 {
                break; // EOF
            }

            if buffer.len() + bytes_read > max_size {
                tracing::warn!(
                    target: TRACING_TARGET_FS,
                    path = %self.path.display(),
                    max_size,
                    "Rejected file exceeding size limit"
                );
                return Err(Error::invalid_input().with_message(format!(
                    "File size exceeds maximum limit of {max_size} bytes"
                )));
            }

            buffer.extend_from_slice(&temp_buffer[..bytes_read]);
        }

        Ok(buffer)
    }

    /// Write a container's regular-file bytes to the path
    ///
    /// The bytes are written and synced to a hidden sibling file first, which
    /// is then renamed over the path. A failed save leaves any existing file
    /// at the path untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ContainerUnreadable`](crate::ErrorKind::ContainerUnreadable)
    /// error if the container holds no regular-file bytes, an
    /// [`InvalidInput`](crate::ErrorKind::InvalidInput) error if the path has
    /// no file name, or an [`Io`](crate::ErrorKind::Io) error if writing fails.
    pub async fn save(&self, container: &impl FileContainer) -> Result<()> {
        let contents = container.regular_file_contents().ok_or_else(|| {
            Error::container_unreadable()
                .with_message("container holds no regular-file bytes to save")
        })?;

        let staging_path = self.staging_path()?;
        if let Err(error) = Self::write_synced(&staging_path, contents.as_bytes()).await {
            let _ = tokio::fs::remove_file(&staging_path).await;
            return Err(error);
        }

        if let Err(error) = tokio::fs::rename(&staging_path, &self.path).await {
            let _ = tokio::fs::remove_file(&staging_path).await;
            return Err(error.into());
        }

        tracing::debug!(
            target: TRACING_TARGET_FS,
            path = %self.path.display(),
            size = contents.len(),
            "Saved regular file container"
        );

        Ok(())
    }

    /// Sibling path `.{filename}.partial` used while a save is in flight
    fn staging_path(&self) -> Result<PathBuf> {
        let filename = self.path.file_name().ok_or_else(|| {
            Error::invalid_input().with_message(format!(
                "cannot save to {}: path has no file name",
                self.path.display()
            ))
        })?;

        let mut staging_name = OsString::from(".");
        staging_name.push(filename);
        staging_name.push(".partial");

        Ok(self.path.with_file_name(staging_name))
    }

    async fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        Ok(())
    }

    /// Check if the path exists
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;

    #[tokio::test]
    async fn test_save_and_load_regular_file() {
        let dir = TempDir::new().unwrap();
        let content_file = ContentFile::new(dir.path().join("note.txt"));

        content_file
            .save(&FileWrapper::regular_file("Hello, world!"))
            .await
            .unwrap();
        assert!(content_file.exists().await);

        let wrapper = content_file.load().await.unwrap();
        assert!(wrapper.is_regular_file());
        assert_eq!(wrapper.media_type(), MediaType::PlainText);
        assert_eq!(wrapper.preferred_filename(), Some("note.txt"));
        assert_eq!(
            wrapper.regular_file_contents().unwrap().as_bytes(),
            b"Hello, world!"
        );
    }

    #[tokio::test]
    async fn test_load_directory() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("b.csv"), "x").await.unwrap();
        tokio::fs::write(dir.path().join("a.json"), "{}").await.unwrap();

        let wrapper = ContentFile::new(dir.path()).load().await.unwrap();

        assert!(wrapper.is_directory());
        assert!(wrapper.regular_file_contents().is_none());
        assert_eq!(
            wrapper.directory_entries().unwrap(),
            &["a.json".to_string(), "b.csv".to_string()]
        );
    }

    #[tokio::test]
    async fn test_load_missing_path() {
        let dir = TempDir::new().unwrap();
        let error = ContentFile::new(dir.path().join("missing.txt"))
            .load()
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Io);
    }

    #[tokio::test]
    async fn test_load_with_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("large.bin");
        tokio::fs::write(&path, vec![b'X'; 20_000]).await.unwrap();

        let content_file = ContentFile::new(&path);
        let error = content_file.load_limited(100).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);

        let wrapper = content_file.load_limited(20_000).await.unwrap();
        assert_eq!(wrapper.len(), 20_000);
        assert_eq!(wrapper.media_type(), MediaType::Data);
    }

    #[tokio::test]
    async fn test_save_directory_container_fails() {
        let dir = TempDir::new().unwrap();
        let content_file = ContentFile::new(dir.path().join("out.txt"));

        let error = content_file
            .save(&FileWrapper::directory(["a"]))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ContainerUnreadable);
        assert!(!content_file.exists().await);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inbox.json");
        tokio::fs::write(&path, "{\"messages\":[1,2,3]}").await.unwrap();

        ContentFile::new(&path)
            .save(&FileWrapper::regular_file("{}"))
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"{}");
        assert!(!dir.path().join(".inbox.json.partial").exists());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inbox.json");
        tokio::fs::write(&path, "original").await.unwrap();
        // Occupy the staging path so the write cannot start.
        tokio::fs::create_dir(dir.path().join(".inbox.json.partial"))
            .await
            .unwrap();

        let error = ContentFile::new(&path)
            .save(&FileWrapper::regular_file("replacement"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"original");
    }

    #[tokio::test]
    async fn test_failed_rename_removes_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("archive");
        tokio::fs::create_dir(&path).await.unwrap();
        tokio::fs::write(path.join("kept.txt"), "x").await.unwrap();

        let error = ContentFile::new(&path)
            .save(&FileWrapper::regular_file("bytes"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(path.join("kept.txt").exists());
        assert!(!dir.path().join(".archive.partial").exists());
    }

    #[tokio::test]
    async fn test_save_without_file_name_fails() {
        let error = ContentFile::new("/")
            .save(&FileWrapper::regular_file("bytes"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_file_metadata() {
        let content_file = ContentFile::new("/tmp/export/addresses.CSV");

        assert_eq!(content_file.filename(), Some("addresses.CSV"));
        assert_eq!(content_file.extension(), Some("CSV"));
        assert_eq!(content_file.media_type(), MediaType::Csv);
        assert_eq!(ContentFile::new("blob").media_type(), MediaType::Data);
    }
}
