//! # Profile photo encoding
//!
//! A photo picked by the user is read once, checked, and turned into a
//! self-contained `data:` URI that can be stored in
//! [`PersonalInfo::photo`](crate::PersonalInfo) and dropped straight into an
//! `<img src>`.
//!
//! Reading is abstracted behind [`PhotoSource`] so the UI can hand over a
//! browser/desktop file handle while tests use [`MemoryPhoto`]. The read is a
//! single future with one outcome; the caller merges a successful result
//! through the normal store replace.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::PhotoConfig;
use crate::error::PhotoError;

/// Something a photo can be read from.
pub trait PhotoSource {
    /// File name as chosen by the user. Used for type sniffing and messages.
    fn name(&self) -> &str;

    /// Read the whole file. `None` if it could not be read.
    fn read(&self) -> impl std::future::Future<Output = Option<Vec<u8>>>;
}

/// In-memory photo source.
#[derive(Clone, Debug, Default)]
pub struct MemoryPhoto {
    name: String,
    bytes: Option<Vec<u8>>,
}

impl MemoryPhoto {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: Some(bytes),
        }
    }

    /// A source whose read always fails.
    pub fn unreadable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes: None,
        }
    }
}

impl PhotoSource for MemoryPhoto {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Option<Vec<u8>> {
        self.bytes.clone()
    }
}

/// Read `source` and encode it as a data URI.
pub async fn read_photo<S: PhotoSource>(
    source: &S,
    config: &PhotoConfig,
) -> Result<String, PhotoError> {
    let name = source.name().to_string();
    let bytes = source
        .read()
        .await
        .ok_or_else(|| PhotoError::Unreadable(name.clone()))?;
    encode_photo(&name, &bytes, config)
}

/// Validate image bytes and wrap them in a `data:<mime>;base64,` URI.
pub fn encode_photo(name: &str, bytes: &[u8], config: &PhotoConfig) -> Result<String, PhotoError> {
    if bytes.is_empty() {
        return Err(PhotoError::Empty(name.to_string()));
    }
    if bytes.len() > config.max_bytes {
        return Err(PhotoError::TooLarge {
            name: name.to_string(),
            size: bytes.len(),
            max: config.max_bytes,
        });
    }
    let mime = image_mime(name, bytes).ok_or_else(|| PhotoError::UnsupportedType(name.to_string()))?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Sniff the image type from magic bytes, then from the file extension.
pub fn image_mime(name: &str, bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.starts_with(b"BM") {
        return Some("image/bmp");
    }

    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_sniffs_magic_before_extension() {
        assert_eq!(image_mime("photo.txt", PNG_HEADER), Some("image/png"));
        assert_eq!(image_mime("me.JPG", b"not really"), Some("image/jpeg"));
        assert_eq!(image_mime("logo.svg", b"<svg/>"), Some("image/svg+xml"));
        assert_eq!(image_mime("notes.txt", b"hello"), None);
        assert_eq!(image_mime("noext", b"hello"), None);
    }

    #[test]
    fn test_encode_photo_builds_data_uri() {
        let uri = encode_photo("a.gif", b"GIF89a", &PhotoConfig::default()).unwrap();
        assert_eq!(uri, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_encode_photo_rejects_bad_input() {
        let config = PhotoConfig { max_bytes: 8 };
        assert_eq!(
            encode_photo("empty.png", b"", &config),
            Err(PhotoError::Empty("empty.png".to_string()))
        );
        assert_eq!(
            encode_photo("big.png", PNG_HEADER, &config),
            Err(PhotoError::TooLarge {
                name: "big.png".to_string(),
                size: PNG_HEADER.len(),
                max: 8,
            })
        );
        assert_eq!(
            encode_photo("cv.pdf", b"%PDF", &config),
            Err(PhotoError::UnsupportedType("cv.pdf".to_string()))
        );
    }

    #[tokio::test]
    async fn test_read_photo_from_memory() {
        let source = MemoryPhoto::new("me.png", PNG_HEADER.to_vec());
        let uri = read_photo(&source, &PhotoConfig::default()).await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_failed_read_leaves_photo_unchanged() {
        use crate::store::ResumeStore;

        let mut store = ResumeStore::new();
        store.set_photo(Some("data:image/png;base64,OLD".to_string()));

        let source = MemoryPhoto::unreadable("broken.png");
        let result = read_photo(&source, &PhotoConfig::default()).await;
        assert_eq!(result, Err(PhotoError::Unreadable("broken.png".to_string())));
        if let Ok(uri) = result {
            store.set_photo(Some(uri));
        }
        assert_eq!(
            store.get().personal_info.photo.as_deref(),
            Some("data:image/png;base64,OLD")
        );
    }

    #[tokio::test]
    async fn test_last_completed_read_wins() {
        use crate::store::ResumeStore;

        let mut store = ResumeStore::new();
        let config = PhotoConfig::default();
        let a = MemoryPhoto::new("a.gif", b"GIF87a".to_vec());
        let b = MemoryPhoto::new("b.gif", b"GIF89a".to_vec());
        let first = read_photo(&a, &config);
        let second = read_photo(&b, &config);

        // Second selection completes first.
        let second = second.await.unwrap();
        store.set_photo(Some(second));
        let first = first.await.unwrap();
        store.set_photo(Some(first.clone()));

        assert_eq!(store.get().personal_info.photo, Some(first));
    }
}
