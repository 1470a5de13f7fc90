//! PowerPoint (.pptx) presentation writing.
//!
//! A minimal PresentationML writer: one slide master, one "Title and Content"
//! layout and any number of slides, each carrying a title, a body text frame
//! and embedded pictures.
//!
//! # Example
//!
//! ```rust,no_run
//! use md2pptx::ooxml::pptx::{Inches, Presentation};
//!
//! let mut pres = Presentation::new();
//! pres.set_slide_width(Inches(16.0));
//!
//! let slide = pres.add_slide();
//! slide.set_title("Agenda");
//! slide.body_mut().last_paragraph_mut().set_text("Intro");
//!
//! pres.save("agenda.pptx")?;
//! # Ok::<(), md2pptx::Error>(())
//! ```

pub mod format;
pub(crate) mod template;
pub mod writer;

pub use format::{Alignment, AutoSize, EMU_PER_INCH, EMU_PER_POINT, Emu, Font, ImageFormat, Inches, Pt};
pub use writer::{MAX_LEVEL, Paragraph, Picture, Presentation, Slide, TextFrame};
