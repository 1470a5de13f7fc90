//! md2pptx - Convert line-oriented markdown into PowerPoint presentations
//!
//! A document is a sequence of slides separated by `---` lines. The first line
//! of each slide is its title; the rest is classified line by line into
//! headers, images, bullet or numbered lists and plain text, then rendered
//! into the body placeholder of a "Title and Content" slide.
//!
//! # Features
//!
//! - **Small markdown dialect**: `#` headers, `![](url)` images, `-`/`*`
//!   bullets, `1.` numbered items nested by indentation, plain text
//! - **Per-level numbering**: each nesting level of a numbered list counts on
//!   its own
//! - **Self-contained PPTX writer**: no template file or Office install needed
//! - **Remote images**: fetched over HTTP(S) and scaled by aspect ratio
//!   (feature `remote_images`)
//!
//! # Example
//!
//! ```no_run
//! use md2pptx::{ConvertOptions, markdown_to_pptx};
//!
//! let deck = "# Agenda\n- Intro\n- Results\n---\n# Results\n1. Faster\n  1. 2x on cold start";
//! markdown_to_pptx(deck, "agenda.pptx", &ConvertOptions::default())?;
//! # Ok::<(), md2pptx::Error>(())
//! ```
//!
//! # Example - Custom image source
//!
//! ```
//! use md2pptx::{ConvertOptions, Converter, ImageSource, Result};
//!
//! struct Offline;
//!
//! impl ImageSource for Offline {
//!     fn fetch(&self, url: &str) -> Result<Vec<u8>> {
//!         Err(md2pptx::Error::Other(format!("offline: {url}")))
//!     }
//! }
//!
//! let pres = Converter::new(ConvertOptions::default(), &Offline)
//!     .convert("# Title\n![logo](https://example.com/logo.png)\ntext");
//! assert_eq!(pres.slide_count(), 1);
//! let bytes = pres.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), md2pptx::Error>(())
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod images;
pub mod markdown;
pub mod ooxml;
pub mod render;

pub use config::{ConvertOptions, FetchOptions, ImagePlacement, ListFontSizes};
pub use convert::{Converter, markdown_file_to_pptx, markdown_to_pptx};
pub use error::{Error, Result};
#[cfg(feature = "remote_images")]
pub use images::HttpImageSource;
pub use images::{ImageInfo, ImageSource, NoImageSource, probe_image};
pub use markdown::{ContentBlock, ListItem, ListKind, SlideSource, parse, split_slides};
pub use ooxml::pptx::Presentation;
pub use render::{SlideCanvas, SlideRenderer};
