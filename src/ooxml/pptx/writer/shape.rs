/// Picture shapes for PPTX slides.
use crate::error::Result;
use crate::ooxml::escape_xml;
use std::fmt::Write as FmtWrite;

use super::super::format::{Emu, ImageFormat};

/// An embedded picture placed on a slide.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) data: Vec<u8>,
    pub(crate) format: ImageFormat,
    pub(crate) left: Emu,
    pub(crate) top: Emu,
    pub(crate) width: Emu,
    pub(crate) height: Emu,
    pub(crate) description: String,
}

impl Picture {
    /// Image bytes as embedded in the package.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Position of the top-left corner.
    pub fn position(&self) -> (Emu, Emu) {
        (self.left, self.top)
    }

    /// Extent of the shape.
    pub fn size(&self) -> (Emu, Emu) {
        (self.width, self.height)
    }

    /// Alternative text of the picture.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Write the `<p:pic>` element, referencing the image through `rel_id`.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: &str) -> Result<()> {
        xml.push_str("<p:pic>");
        xml.push_str("<p:nvPicPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
            self.shape_id,
            self.shape_id - 1,
            escape_xml(&self.description)
        )?;
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.left.get(), self.top.get())?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width.get(), self.height.get())?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");
        xml.push_str("</p:pic>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_xml() {
        let picture = Picture {
            shape_id: 4,
            data: vec![0x89, 0x50, 0x4E, 0x47],
            format: ImageFormat::Png,
            left: Emu(914_400),
            top: Emu(2_286_000),
            width: Emu(5_486_400),
            height: Emu(2_743_200),
            description: "chart <1>".to_string(),
        };

        let mut xml = String::new();
        picture.to_xml(&mut xml, "rId2").unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Picture 3" descr="chart &lt;1&gt;"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="2286000"/>"#));
        assert!(xml.contains(r#"<a:ext cx="5486400" cy="2743200"/>"#));
    }
}
