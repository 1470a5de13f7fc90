//! Conversion options.
//!
//! Options can be built in code with the `with_*` methods or read from a TOML
//! file where every key is optional:
//!
//! ```toml
//! slide_width_in = 13.333
//! slide_height_in = 7.5
//!
//! [image]
//! top_in = 2.0
//!
//! [list_font_sizes]
//! level0 = 20.0
//!
//! [fetch]
//! timeout_secs = 10
//! ```
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::ooxml::pptx::{Inches, Pt};

/// Options controlling slide size, styling constants and image fetching.
///
/// # Examples
///
/// ```rust
/// use md2pptx::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .with_slide_size(13.333, 7.5)
///     .with_fetch_timeout(10);
/// assert_eq!(options.slide_height_in, 7.5);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Slide width in inches
    pub slide_width_in: f64,
    /// Slide height in inches
    pub slide_height_in: f64,
    /// Where pictures are placed on a slide
    pub image: ImagePlacement,
    /// Font sizes of list paragraphs by nesting level
    pub list_font_sizes: ListFontSizes,
    /// HTTP settings for remote images
    pub fetch: FetchOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            slide_width_in: 16.0,
            slide_height_in: 9.0,
            image: ImagePlacement::default(),
            list_font_sizes: ListFontSizes::default(),
            fetch: FetchOptions::default(),
        }
    }
}

impl ConvertOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide size in inches.
    #[inline]
    pub fn with_slide_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.slide_width_in = width_in;
        self.slide_height_in = height_in;
        self
    }

    #[inline]
    pub fn with_image_placement(mut self, placement: ImagePlacement) -> Self {
        self.image = placement;
        self
    }

    #[inline]
    pub fn with_list_font_sizes(mut self, sizes: ListFontSizes) -> Self {
        self.list_font_sizes = sizes;
        self
    }

    /// Set the timeout for fetching one image, in seconds.
    #[inline]
    pub fn with_fetch_timeout(mut self, secs: u64) -> Self {
        self.fetch.timeout_secs = secs;
        self
    }

    /// Parse options from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    ///
    /// Unlike a lookup of an optional default location, a file passed here
    /// explicitly must exist and parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn slide_width(&self) -> Inches {
        Inches(self.slide_width_in)
    }

    pub fn slide_height(&self) -> Inches {
        Inches(self.slide_height_in)
    }
}

/// Fixed placement of pictures; the height follows the image aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImagePlacement {
    pub left_in: f64,
    pub top_in: f64,
    pub width_in: f64,
}

impl Default for ImagePlacement {
    fn default() -> Self {
        Self {
            left_in: 1.0,
            top_in: 2.5,
            width_in: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListFontSizes {
    /// Points, top-level items
    pub level0: f64,
    /// Points, first nesting level
    pub level1: f64,
    /// Points, every deeper level
    pub deeper: f64,
}

impl Default for ListFontSizes {
    fn default() -> Self {
        Self {
            level0: 18.0,
            level1: 16.0,
            deeper: 14.0,
        }
    }
}

impl ListFontSizes {
    /// Font size for a list item at `level`.
    pub fn for_level(&self, level: usize) -> Pt {
        match level {
            0 => Pt(self.level0),
            1 => Pt(self.level1),
            _ => Pt(self.deeper),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("md2pptx/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
