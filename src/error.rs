//! Unified error types for md2pptx.
//!
//! Only file, package and configuration errors ever reach the caller of a
//! conversion. Image failures are reported through this type by the image
//! layer but are recovered by the slide renderer.
use thiserror::Error;

/// Main error type for md2pptx operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error while writing the package
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// HTTP error while fetching a remote image
    #[cfg(feature = "remote_images")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Image bytes could not be decoded
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// Image bytes are not in a format PPTX can embed
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    /// Invalid options file
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// Result type for md2pptx operations.
pub type Result<T> = std::result::Result<T, Error>;
