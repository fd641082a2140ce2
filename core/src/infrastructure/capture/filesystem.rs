use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use url::Url;

use crate::domain::{
    capture::{is_supported_format, ports::ImageCapture},
    common::{CaptureConfig, entities::app_errors::CoreError},
    product_analysis::entities::CapturedImage,
};

/// Image capture backed by the local filesystem.
///
/// The "camera" is a still file that another tool keeps up to date; the "library" is a
/// directory of photos.
#[derive(Debug, Clone)]
pub struct FilesystemImageCapture {
    library_dir: PathBuf,
    camera_source: Option<PathBuf>,
    max_image_size: usize,
}

impl FilesystemImageCapture {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            library_dir: config.library_dir.clone(),
            camera_source: None,
            max_image_size: config.max_image_size,
        }
    }

    pub fn with_camera_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.camera_source = Some(path.into());
        self
    }

    async fn load(&self, path: &Path) -> Result<CapturedImage, CoreError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if !is_supported_format(extension) {
            return Err(CoreError::Capture(format!(
                "unsupported image format: {}",
                path.display()
            )));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| io_error(path, e))?;
        if data.len() > self.max_image_size {
            return Err(CoreError::Capture(format!(
                "image is {} bytes, max size is {} bytes",
                data.len(),
                self.max_image_size
            )));
        }

        debug!(path = %path.display(), size = data.len(), "Loaded image");
        Ok(CapturedImage {
            uri: file_uri(path)?,
            inline_data: Some(Bytes::from(data)),
            timestamp: Utc::now(),
        })
    }
}

fn file_uri(path: &Path) -> Result<String, CoreError> {
    let absolute = std::path::absolute(path).map_err(|e| io_error(path, e))?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|_| {
            CoreError::Capture(format!(
                "cannot build a file URI for {}",
                absolute.display()
            ))
        })
}

fn io_error(path: &Path, e: std::io::Error) -> CoreError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        CoreError::PermissionDenied(format!("{}: {}", path.display(), e))
    } else {
        CoreError::Capture(format!("{}: {}", path.display(), e))
    }
}

impl ImageCapture for FilesystemImageCapture {
    async fn request_permission(&self) -> Result<(), CoreError> {
        let metadata = tokio::fs::metadata(&self.library_dir)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CoreError::PermissionDenied(format!(
                    "photo library {} does not exist",
                    self.library_dir.display()
                )),
                _ => io_error(&self.library_dir, e),
            })?;

        if !metadata.is_dir() {
            return Err(CoreError::PermissionDenied(format!(
                "photo library {} is not a directory",
                self.library_dir.display()
            )));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn capture(&self) -> Result<CapturedImage, CoreError> {
        let source = self
            .camera_source
            .as_deref()
            .ok_or_else(|| CoreError::Capture("no camera source configured".to_string()))?;

        self.load(source).await
    }

    #[instrument(skip(self), fields(library = %self.library_dir.display()))]
    async fn pick_from_library(&self) -> Result<Option<CapturedImage>, CoreError> {
        self.request_permission().await?;

        let mut entries = tokio::fs::read_dir(&self.library_dir)
            .await
            .map_err(|e| io_error(&self.library_dir, e))?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.library_dir, e))?
        {
            let path = entry.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(is_supported_format);
            if !supported {
                continue;
            }

            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

            // Ties are broken by path so the pick is deterministic.
            let is_newer = match &newest {
                None => true,
                Some((time, current)) => (modified, &path) > (*time, current),
            };
            if is_newer {
                newest = Some((modified, path));
            }
        }

        match newest {
            Some((modified, path)) => {
                let mut image = self.load(&path).await?;
                image.timestamp = DateTime::<Utc>::from(modified);
                Ok(Some(image))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn capture_for(dir: &Path, max_image_size: usize) -> FilesystemImageCapture {
        FilesystemImageCapture::new(&CaptureConfig {
            library_dir: dir.to_path_buf(),
            max_image_size,
        })
    }

    #[tokio::test]
    async fn test_missing_library_is_permission_denied() {
        let dir = tempfile::tempdir().unwrap();
        let capture = capture_for(&dir.path().join("nope"), 1024);

        let err = capture.request_permission().await.unwrap_err();
        assert!(matches!(err, CoreError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_pick_from_empty_library_is_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        let picked = capture_for(dir.path(), 1024).pick_from_library().await.unwrap();
        assert!(picked.is_none());
    }

    #[tokio::test]
    async fn test_pick_returns_supported_image_with_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("label.JPG"), b"jpeg-bytes").unwrap();
        fs::write(dir.path().join("readme.md"), b"ignored").unwrap();

        let picked = capture_for(dir.path(), 1024)
            .pick_from_library()
            .await
            .unwrap()
            .unwrap();

        assert!(picked.uri.ends_with("label.JPG"));
        assert!(picked.uri.starts_with("file://"));
        assert_eq!(picked.inline_data.as_deref(), Some(&b"jpeg-bytes"[..]));
    }

    #[test]
    fn test_relative_path_becomes_absolute_file_uri() {
        let uri = file_uri(Path::new("photos/my label #2.jpg")).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(uri.starts_with("file:///"));
        assert!(uri.ends_with("/photos/my%20label%20%232.jpg"));
        let resolved = Url::parse(&uri).unwrap().to_file_path().unwrap();
        assert_eq!(resolved, cwd.join("photos/my label #2.jpg"));
    }

    #[tokio::test]
    async fn test_captured_uri_resolves_back_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let still = dir.path().join("shelf photo.png");
        fs::write(&still, b"png-bytes").unwrap();

        let image = capture_for(dir.path(), 1024)
            .with_camera_source(&still)
            .capture()
            .await
            .unwrap();

        assert_eq!(Url::parse(&image.uri).unwrap().to_file_path().unwrap(), still);
    }

    #[tokio::test]
    async fn test_capture_requires_camera_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = capture_for(dir.path(), 1024).capture().await.unwrap_err();
        assert!(matches!(err, CoreError::Capture(_)));
    }

    #[tokio::test]
    async fn test_capture_rejects_unsupported_and_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("frame.gif");
        let big = dir.path().join("frame.png");
        fs::write(&gif, b"gif").unwrap();
        fs::write(&big, vec![0u8; 64]).unwrap();

        let err = capture_for(dir.path(), 32)
            .with_camera_source(&gif)
            .capture()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Capture(msg) if msg.contains("unsupported")));

        let err = capture_for(dir.path(), 32)
            .with_camera_source(&big)
            .capture()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Capture(msg) if msg.contains("max size")));
    }
}
