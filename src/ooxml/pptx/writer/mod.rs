//! Presentation writer components for PPTX.

mod package;
pub mod pres;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::Presentation;
pub use shape::Picture;
pub use slide::Slide;
pub use text::{MAX_LEVEL, Paragraph, TextFrame};
