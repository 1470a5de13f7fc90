//! Image retrieval and probing.
//!
//! Slides reference images by URL. An [`ImageSource`] turns a URL into bytes;
//! [`probe_image`] then identifies the format and reads the pixel dimensions
//! needed to keep the aspect ratio when the picture is placed.

use std::io::Cursor;

use crate::error::{Error, Result};
use crate::ooxml::pptx::ImageFormat;

/// Retrieves image bytes for a URL.
///
/// Failures are never fatal to a conversion; the renderer logs them and skips
/// the picture.
pub trait ImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Source that fetches images over HTTP(S) with a blocking client.
#[cfg(feature = "remote_images")]
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote_images")]
impl HttpImageSource {
    /// Build a client with the timeout and user agent from `options`.
    pub fn new(options: &crate::config::FetchOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(options.timeout())
            .user_agent(options.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "remote_images")]
impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Source for builds without network access; every fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageSource;

impl ImageSource for NoImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(Error::Other(format!(
            "cannot fetch {url}: remote images are disabled"
        )))
    }
}

/// Format and pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageInfo {
    /// Height over width, used to derive the placed height from a fixed width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height_px as f64 / self.width_px as f64
    }
}

/// Identify an image and read its dimensions from the header.
pub fn probe_image(bytes: &[u8]) -> Result<ImageInfo> {
    let format = ImageFormat::detect_from_bytes(bytes)
        .ok_or_else(|| Error::UnsupportedImage("unrecognized image data".to_string()))?;

    let (width_px, height_px) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;

    if width_px == 0 || height_px == 0 {
        return Err(Error::UnsupportedImage(format!(
            "image has empty dimensions {width_px}x{height_px}"
        )));
    }

    Ok(ImageInfo {
        format,
        width_px,
        height_px,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Encode a blank PNG of the given size.
    pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// In-memory image source keyed by URL.
    #[derive(Default)]
    pub(crate) struct MapImageSource(pub HashMap<String, Vec<u8>>);

    impl MapImageSource {
        pub(crate) fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
            self.0.insert(url.to_string(), bytes);
            self
        }
    }

    impl ImageSource for MapImageSource {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| Error::Other(format!("404 for {url}")))
        }
    }

    #[test]
    fn test_image_info_png() {
        let info = probe_image(&png(40, 20)).unwrap();
        assert_eq!(info.format, ImageFormat::Png);
        assert_eq!((info.width_px, info.height_px), (40, 20));
        assert_eq!(info.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_image_info_rejects_unknown_bytes() {
        let result = probe_image(b"<html>not found</html>");
        assert!(matches!(result, Err(Error::UnsupportedImage(_))));
    }

    #[test]
    fn test_image_info_rejects_truncated_png() {
        let bytes = png(8, 8);
        assert!(probe_image(&bytes[..12]).is_err());
    }

    #[test]
    fn test_no_image_source_fails() {
        assert!(NoImageSource.fetch("https://example.com/a.png").is_err());
    }

    #[test]
    fn test_map_source() {
        let source = MapImageSource::default().with("a.png", png(1, 1));
        assert!(source.fetch("a.png").is_ok());
        assert!(source.fetch("b.png").is_err());
    }
}
