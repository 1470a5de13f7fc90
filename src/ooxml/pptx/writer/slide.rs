/// Slide types and implementation for PPTX presentations.
use crate::error::{Error, Result};
use crate::ooxml::escape_xml;
use std::fmt::Write as FmtWrite;

use super::super::format::{Emu, ImageFormat};
use super::relmap::RelationshipMapper;
use super::shape::Picture;
use super::text::TextFrame;

// IDs: 1=group, 2=title, 3=body, 4+=pictures
const TITLE_SHAPE_ID: u32 = 2;
const BODY_SHAPE_ID: u32 = 3;
const FIRST_PICTURE_ID: u32 = 4;

/// A slide built on the "Title and Content" layout.
///
/// The slide has exactly one title placeholder and one body placeholder; the
/// body text frame is always present, even when it only holds the single
/// empty paragraph every text frame starts with.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier within the presentation)
    pub(crate) slide_id: u32,
    /// Slide title (stored in title placeholder)
    pub(crate) title: Option<String>,
    /// Text of the body placeholder
    pub(crate) body: TextFrame,
    /// Pictures on the slide, in insertion order
    pub(crate) pictures: Vec<Picture>,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            title: None,
            body: TextFrame::new(),
            pictures: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The body placeholder's text frame.
    pub fn body(&self) -> &TextFrame {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut TextFrame {
        &mut self.body
    }

    /// Pictures on the slide.
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    /// Add a picture to the slide.
    ///
    /// `position` is the top-left corner and `size` the extent of the shape;
    /// the bytes are embedded as-is under the given format.
    pub fn add_picture(
        &mut self,
        data: Vec<u8>,
        format: ImageFormat,
        position: (Emu, Emu),
        size: (Emu, Emu),
    ) -> &mut Picture {
        let shape_id = FIRST_PICTURE_ID + self.pictures.len() as u32;
        self.pictures.push(Picture {
            shape_id,
            data,
            format,
            left: position.0,
            top: position.1,
            width: size.0,
            height: size.1,
            description: String::new(),
        });

        let last = self.pictures.len() - 1;
        &mut self.pictures[last]
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        self.write_title_shape(&mut xml)?;
        self.write_body_shape(&mut xml)?;

        for (image_index, picture) in self.pictures.iter().enumerate() {
            let rel_id = rel_mapper
                .get_image_id(slide_index, image_index)
                .ok_or_else(|| {
                    Error::Xml(format!(
                        "no relationship for image {} on slide {}",
                        image_index, slide_index
                    ))
                })?;
            picture.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    fn write_title_shape(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name="Title 1"/>"#, TITLE_SHAPE_ID)?;
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            xml.push_str("<a:r>");
            xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
            write!(xml, "<a:t>{}</a:t>", escape_xml(title))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("<a:endParaRPr lang=\"en-US\" dirty=\"0\"/>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write the body placeholder shape with every paragraph of the text frame.
    fn write_body_shape(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name="Content Placeholder 2"/>"#, BODY_SHAPE_ID)?;
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");
        self.body.to_xml(xml)?;

        xml.push_str("</p:sp>");

        Ok(())
    }
}
