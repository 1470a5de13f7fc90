/// Text frame and paragraph types for the body placeholder of a slide.
use crate::error::Result;
use crate::ooxml::escape_xml;
use std::fmt::Write as FmtWrite;

use super::super::format::{Alignment, AutoSize, Font};

/// Deepest outline level PowerPoint supports (`lvl` is 0..=8).
pub const MAX_LEVEL: u8 = 8;

/// A single paragraph in a text frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    level: u8,
    alignment: Option<Alignment>,
    font: Font,
}

impl Paragraph {
    /// Create an empty paragraph at level 0 with inherited formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the paragraph text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Outline (indentation) level, 0-based.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the outline level. Values above [`MAX_LEVEL`] are clamped.
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        self.level = level.min(MAX_LEVEL);
        self
    }

    /// Explicit alignment, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Character formatting for the paragraph's runs.
    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Check whether the paragraph carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Write the `<a:p>` element for this paragraph.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.level > 0 || self.alignment.is_some() {
            xml.push_str("<a:pPr");
            if self.level > 0 {
                write!(xml, r#" lvl="{}""#, self.level)?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_xml())?;
            }
            xml.push_str("/>");
        }

        let mut rpr = String::from(r#"lang="en-US""#);
        if let Some(size) = self.font.size {
            write!(rpr, r#" sz="{}""#, size.centipoints())?;
        }
        if let Some(bold) = self.font.bold {
            write!(rpr, r#" b="{}""#, if bold { 1 } else { 0 })?;
        }
        rpr.push_str(r#" dirty="0""#);

        if !self.text.is_empty() {
            xml.push_str("<a:r>");
            write!(xml, "<a:rPr {}/>", rpr)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }
        write!(xml, "<a:endParaRPr {}/>", rpr)?;

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The paragraphs of a text-bearing shape.
///
/// A text frame is never empty: like PowerPoint, it always holds at least one
/// paragraph, and [`TextFrame::clear`] leaves a single empty one behind.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    auto_size: AutoSize,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFrame {
    /// Create a text frame holding one empty paragraph.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            auto_size: AutoSize::None,
        }
    }

    /// Remove all text, leaving one empty paragraph.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::new());
    }

    /// All paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The last paragraph, which is where the next text is written.
    pub fn last_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Append a new empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        self.last_paragraph_mut()
    }

    pub fn auto_size(&self) -> AutoSize {
        self.auto_size
    }

    pub fn set_auto_size(&mut self, auto_size: AutoSize) {
        self.auto_size = auto_size;
    }

    /// All paragraph text joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the `<p:txBody>` element for this frame.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        match self.auto_size {
            AutoSize::None => xml.push_str("<a:bodyPr/>"),
            AutoSize::TextToFitShape => xml.push_str("<a:bodyPr><a:normAutofit/></a:bodyPr>"),
        }
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}
