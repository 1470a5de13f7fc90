/// Presentation implementation for PPTX files.
use crate::error::{Error, Result};
use std::fmt::Write as FmtWrite;
use std::io::{Seek, Write};
use std::path::Path;

use tracing::debug;

use super::super::format::{Emu, Inches};
use super::package;
use super::relmap::RelationshipMapper;
use super::slide::Slide;

/// First slide ID PowerPoint accepts.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation being built.
///
/// # Example
///
/// ```rust,no_run
/// use md2pptx::ooxml::pptx::{Inches, Presentation};
///
/// let mut pres = Presentation::new();
/// pres.set_slide_width(Inches(16.0));
/// pres.set_slide_height(Inches(9.0));
///
/// let slide = pres.add_slide();
/// slide.set_title("Hello World");
/// pres.save("output.pptx")?;
/// # Ok::<(), md2pptx::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
}

impl Presentation {
    /// Create a new empty presentation with the default 4:3 size (10 x 7.5 inches).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: Inches(10.0).into(),
            slide_height: Inches(7.5).into(),
        }
    }

    /// Append a slide using the "Title and Content" layout.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(Slide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the slide width.
    pub fn set_slide_width(&mut self, width: impl Into<Emu>) {
        self.slide_width = width.into();
    }

    /// Set the slide height.
    pub fn set_slide_height(&mut self, height: impl Into<Emu>) {
        self.slide_height = height.into();
    }

    /// Save the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), slides = self.slides.len(), "presentation saved");
        Ok(())
    }

    /// Write the presentation package to any seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        package::write_package(self, writer)
    }

    /// Serialize the presentation package into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::to_bytes(self)
    }

    /// Generate presentation.xml content using the slide relationship IDs.
    pub(crate) fn generate_presentation_xml(&self, rel_mapper: &RelationshipMapper) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#);
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // The master is always rId1 in presentation.xml.rels
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = rel_mapper.get_slide_id(index).ok_or_else(|| {
                    Error::Xml(format!("no relationship for slide {}", index))
                })?;
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id, rel_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width.get(),
            self.slide_height.get()
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            self.slide_height.get(),
            self.slide_width.get()
        )?;

        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str("</p:defaultTextStyle>");

        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_four_by_three() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_width(), Emu(9_144_000));
        assert_eq!(pres.slide_height(), Emu(6_858_000));
    }

    #[test]
    fn test_add_slide_assigns_sequential_ids() {
        let mut pres = Presentation::new();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let mut pres = Presentation::new();
        pres.set_slide_width(Inches(16.0));
        pres.set_slide_height(Inches(9.0));
        pres.add_slide();

        let mut map = RelationshipMapper::new();
        map.add_slide(0, "rId2".to_string());

        let xml = pres.generate_presentation_xml(&map).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="14630400" cy="8229600"/>"#));
    }

    #[test]
    fn test_presentation_xml_requires_slide_relationship() {
        let mut pres = Presentation::new();
        pres.add_slide();
        assert!(pres
            .generate_presentation_xml(&RelationshipMapper::new())
            .is_err());
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = Presentation::new();
        pres.add_slide().set_title("One");
        pres.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
