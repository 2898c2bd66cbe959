use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use lj_core::journey::PhotoRef;
use lj_core::ports::{PhotoSourceError, PhotoSourcePort};

/// Loads memory photos from local files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPhotoSource;

impl FsPhotoSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PhotoSourcePort for FsPhotoSource {
    async fn load(&self, path: &Path) -> Result<PhotoRef, PhotoSourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => PhotoSourceError::NotFound(path.display().to_string()),
            _ => PhotoSourceError::Io(e),
        })?;

        let mime_type = mime_from_extension(path)
            .or_else(|| sniff_mime(&bytes))
            .ok_or_else(|| PhotoSourceError::Unsupported(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        debug!(path = %path.display(), mime_type, size = bytes.len(), "photo loaded");
        Ok(PhotoRef::new(file_name, mime_type, Bytes::from(bytes)))
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|f| f.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_file_with_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Praia.JPG");
        std::fs::write(&path, b"\xff\xd8\xff\xe0").unwrap();

        let photo = FsPhotoSource::new().load(&path).await.unwrap();

        assert_eq!(photo.file_name, "Praia.JPG");
        assert_eq!(photo.mime_type, "image/jpeg");
        assert_eq!(photo.bytes.as_ref(), b"\xff\xd8\xff\xe0");
    }

    #[tokio::test]
    async fn sniffs_mime_when_extension_is_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

        let photo = FsPhotoSource::new().load(file.path()).await.unwrap();
        assert_eq!(photo.mime_type, "image/png");
    }

    #[tokio::test]
    async fn unknown_content_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let err = FsPhotoSource::new().load(&path).await.unwrap_err();
        assert!(matches!(err, PhotoSourceError::Unsupported(_)));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsPhotoSource::new()
            .load(&dir.path().join("nope.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, PhotoSourceError::NotFound(_)));
    }
}
