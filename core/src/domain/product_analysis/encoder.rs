use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose};
use tracing::debug;
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{entities::CapturedImage, value_objects::InlineImage},
};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Reads the image behind `image` and returns its raw bytes as base64, without a data-URL prefix.
pub async fn encode_image(
    image: &CapturedImage,
    max_image_size: usize,
) -> Result<InlineImage, CoreError> {
    if let Some(data) = &image.inline_data {
        return encode_bytes(data, max_image_size);
    }

    if let Some(rest) = image.uri.strip_prefix("data:") {
        return decode_data_uri(rest, max_image_size);
    }

    let path = local_path(&image.uri)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| CoreError::Encoding(format!("cannot read {}: {e}", path.display())))?;

    debug!(path = %path.display(), size = bytes.len(), "Read captured image");
    encode_bytes(&bytes, max_image_size)
}

/// Resolves a `file:` URI (percent-decoded, `localhost` host allowed) or a plain path.
fn local_path(uri: &str) -> Result<PathBuf, CoreError> {
    if !uri.starts_with("file:") {
        return Ok(PathBuf::from(uri));
    }

    let url = Url::parse(uri)
        .map_err(|e| CoreError::Encoding(format!("invalid file URI {uri}: {e}")))?;
    url.to_file_path()
        .map_err(|_| CoreError::Encoding(format!("file URI is not a local path: {uri}")))
}

fn encode_bytes(bytes: &[u8], max_image_size: usize) -> Result<InlineImage, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Encoding("image is empty".to_string()));
    }
    ensure_size(bytes.len(), max_image_size)?;

    Ok(InlineImage {
        mime_type: sniff_mime_type(bytes).to_string(),
        data: general_purpose::STANDARD.encode(bytes),
    })
}

fn decode_data_uri(rest: &str, max_image_size: usize) -> Result<InlineImage, CoreError> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CoreError::Encoding("data URI has no payload".to_string()))?;

    let Some(mime_type) = header.strip_suffix(";base64") else {
        return Err(CoreError::Encoding(
            "only base64 data URIs are supported".to_string(),
        ));
    };

    let payload = payload.trim();
    let decoded = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| CoreError::Encoding(format!("invalid base64 payload: {e}")))?;
    ensure_size(decoded.len(), max_image_size)?;

    let mime_type = if mime_type.is_empty() {
        sniff_mime_type(&decoded)
    } else {
        mime_type
    };

    Ok(InlineImage {
        mime_type: mime_type.to_string(),
        data: payload.to_string(),
    })
}

fn ensure_size(size: usize, max_image_size: usize) -> Result<(), CoreError> {
    if size > max_image_size {
        return Err(CoreError::Encoding(format!(
            "image is {size} bytes, max size is {max_image_size} bytes"
        )));
    }
    Ok(())
}

fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(PNG_SIGNATURE) {
        "image/png"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bytes::Bytes;

    use super::*;

    const JPEG_BYTES: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[tokio::test]
    async fn test_encodes_inline_bytes_without_prefix() {
        let image = CapturedImage::from_bytes("memory://1", Bytes::from_static(JPEG_BYTES));
        let inline = encode_image(&image, 1024).await.unwrap();

        assert_eq!(inline.mime_type, "image/jpeg");
        assert!(!inline.data.starts_with("data:"));
        assert_eq!(
            general_purpose::STANDARD.decode(&inline.data).unwrap(),
            JPEG_BYTES
        );
    }

    #[tokio::test]
    async fn test_reads_file_uri() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_SIGNATURE).unwrap();
        file.write_all(b"rest-of-png").unwrap();

        let uri = format!("file://{}", file.path().display());
        let inline = encode_image(&CapturedImage::from_uri(uri), 1024)
            .await
            .unwrap();

        assert_eq!(inline.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_reads_percent_encoded_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my photo.jpg");
        std::fs::write(&path, JPEG_BYTES).unwrap();

        let uri = Url::from_file_path(&path).unwrap().to_string();
        assert!(uri.contains("my%20photo.jpg"));
        let inline = encode_image(&CapturedImage::from_uri(uri), 1024)
            .await
            .unwrap();

        assert_eq!(
            general_purpose::STANDARD.decode(&inline.data).unwrap(),
            JPEG_BYTES
        );
    }

    #[test]
    fn test_localhost_file_uri_resolves_to_path() {
        assert_eq!(
            local_path("file://localhost/tmp/label.jpg").unwrap(),
            PathBuf::from("/tmp/label.jpg")
        );
        assert!(matches!(
            local_path("file://camera-host/label.jpg"),
            Err(CoreError::Encoding(_))
        ));
    }

    #[tokio::test]
    async fn test_data_uri_payload_is_returned_as_is() {
        let payload = general_purpose::STANDARD.encode(JPEG_BYTES);
        let uri = format!("data:image/jpeg;base64,{payload}");
        let inline = encode_image(&CapturedImage::from_uri(uri), 1024)
            .await
            .unwrap();

        assert_eq!(inline.data, payload);
        assert_eq!(inline.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_missing_file_is_encoding_error() {
        let image = CapturedImage::from_uri("/definitely/not/here.jpg");
        let result = encode_image(&image, 1024).await;
        assert!(matches!(result, Err(CoreError::Encoding(_))));
    }

    #[tokio::test]
    async fn test_oversized_image_is_rejected() {
        let image = CapturedImage::from_bytes("memory://big", Bytes::from(vec![0u8; 64]));
        let result = encode_image(&image, 32).await;
        assert!(matches!(result, Err(CoreError::Encoding(msg)) if msg.contains("max size")));
    }
}
