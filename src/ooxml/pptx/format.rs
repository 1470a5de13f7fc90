//! Format and unit types for PPTX presentations.

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;
/// English Metric Units per point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units, the native DrawingML coordinate unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Emu(pub i64);

impl Emu {
    /// Raw EMU value.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

/// A length in inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Inches(pub f64);

impl From<Inches> for Emu {
    fn from(value: Inches) -> Self {
        Emu((value.0 * EMU_PER_INCH as f64).round() as i64)
    }
}

/// A length in typographic points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pt(pub f64);

impl Pt {
    /// Size in hundredths of a point, as used by the `sz` attribute of `a:rPr`.
    #[inline]
    pub fn centipoints(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl From<Pt> for Emu {
    fn from(value: Pt) -> Self {
        Emu((value.0 * EMU_PER_POINT as f64).round() as i64)
    }
}

/// Image format types supported by PPTX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        // BMP: 42 4D (BM)
        if bytes.starts_with(&[0x42, 0x4D]) {
            return Some(Self::Bmp);
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        None
    }
}

/// Character formatting applied to every run of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Font {
    /// Font size
    pub size: Option<Pt>,
    /// Bold text
    pub bold: Option<bool>,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
}

impl Alignment {
    /// Value of the `algn` attribute of `a:pPr`.
    pub fn as_xml(&self) -> &'static str {
        match self {
            Self::Left => "l",
        }
    }
}

/// How a text frame reacts when its text overflows the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSize {
    /// Inherit from the layout.
    #[default]
    None,
    /// Shrink the text to fit the shape.
    TextToFitShape,
}
