//! Office Open XML output.
//!
//! Only the PresentationML subset needed to write slide decks lives here:
//! OPC constants, XML escaping and the [`pptx`] writer.

pub mod constants;
pub mod pptx;
mod xml;

pub use xml::escape_xml;
