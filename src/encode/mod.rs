//! Image encoding.
//!
//! Two entry paths, matching the two ways a photo can arrive:
//! [`reencode_jpeg`] decodes the image and re-serializes it as JPEG, and
//! [`read_data_url`] ships the file bytes as-is.

use crate::error::EncodeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::io::Cursor;
use std::path::Path;

/// A base64 payload tagged with its MIME type.
///
/// Displays in `data:<mime>;base64,<payload>` form; the API client uses the
/// raw [`payload`](DataUrl::payload) when building the inline blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    data: String,
}

impl DataUrl {
    /// Create a data URL from a MIME type and an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Base64-encode raw bytes under the given MIME type.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` string.
    pub fn parse(s: &str) -> Result<Self, EncodeError> {
        let rest = s
            .strip_prefix("data:")
            .ok_or_else(|| EncodeError::InvalidDataUrl {
                message: "missing data: prefix".to_string(),
            })?;
        let (mime_type, data) =
            rest.split_once(";base64,")
                .ok_or_else(|| EncodeError::InvalidDataUrl {
                    message: "missing ;base64, separator".to_string(),
                })?;
        Ok(Self::new(mime_type, data))
    }

    /// The MIME type of the encoded content.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The raw base64 payload, without the data-URL prefix.
    pub fn payload(&self) -> &str {
        &self.data
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Decode the image at `path` and re-encode it as a JPEG data URL.
///
/// Any raster format the `image` crate understands is accepted; the result
/// always carries MIME `image/jpeg`.
pub fn reencode_jpeg(path: impl AsRef<Path>) -> Result<DataUrl, EncodeError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| EncodeError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .map_err(|e| EncodeError::JpegEncode {
            message: e.to_string(),
        })?;

    Ok(DataUrl::from_bytes(mime::IMAGE_JPEG.essence_str(), &buf))
}

/// Read the file at `path` and encode its bytes untouched.
///
/// The MIME type is guessed from the extension, defaulting to JPEG. No
/// validation is performed; non-image content goes to the API as-is and
/// surfaces through the usual failure path.
pub async fn read_data_url(path: impl AsRef<Path>) -> Result<DataUrl, EncodeError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| EncodeError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(DataUrl::from_bytes(guess_mime_type(path), &bytes))
}

fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => mime::IMAGE_PNG.essence_str(),
        Some("gif") => mime::IMAGE_GIF.essence_str(),
        Some("webp") => "image/webp",
        Some("bmp") => mime::IMAGE_BMP.essence_str(),
        _ => mime::IMAGE_JPEG.essence_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_test_png(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("sample.png");
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 120, 40]));
        image::DynamicImage::ImageRgb8(img).save(&path).unwrap();
        path
    }

    #[test]
    fn test_data_url_display_and_parse() {
        let url = DataUrl::from_bytes("image/jpeg", b"hello");
        let rendered = url.to_string();
        assert!(rendered.starts_with("data:image/jpeg;base64,"));

        let parsed = DataUrl::parse(&rendered).unwrap();
        assert_eq!(parsed, url);
        assert_eq!(parsed.payload(), STANDARD.encode(b"hello"));
    }

    #[test]
    fn test_parse_rejects_non_data_url() {
        assert!(DataUrl::parse("https://example.com/img.jpg").is_err());
        assert!(DataUrl::parse("data:image/jpeg,no-base64-marker").is_err());
    }

    #[test]
    fn test_reencode_jpeg_produces_jpeg_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(&dir);

        let url = reencode_jpeg(&path).unwrap();
        assert_eq!(url.mime_type(), "image/jpeg");
        assert!(url.to_string().starts_with("data:image/jpeg;base64,"));

        // The payload decodes back to JPEG magic bytes.
        let bytes = STANDARD.decode(url.payload()).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_reencode_jpeg_missing_file() {
        let err = reencode_jpeg("/nonexistent/food.png").unwrap_err();
        assert!(matches!(err, EncodeError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_read_data_url_keeps_bytes_and_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(&dir);

        let url = read_data_url(&path).await.unwrap();
        assert_eq!(url.mime_type(), "image/png");

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(STANDARD.decode(url.payload()).unwrap(), raw);
    }

    #[tokio::test]
    async fn test_read_data_url_defaults_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.bin");
        std::fs::write(&path, b"not an image").unwrap();

        let url = read_data_url(&path).await.unwrap();
        assert_eq!(url.mime_type(), "image/jpeg");
    }

    #[tokio::test]
    async fn test_read_data_url_missing_file() {
        let err = read_data_url("/nonexistent/upload.jpg").await.unwrap_err();
        assert!(matches!(err, EncodeError::Read { .. }));
    }
}
