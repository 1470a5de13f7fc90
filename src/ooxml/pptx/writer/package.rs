//! Package writer for presentations.
//!
//! Serializes a [`Presentation`] into an OPC zip package: `[Content_Types].xml`,
//! the package and part relationships, the fixed template parts and one part
//! per slide and embedded image.

use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::ooxml::constants::content_type as ct;
use crate::ooxml::constants::relationship_type as rt;
use crate::ooxml::escape_xml;
use crate::ooxml::pptx::template;

use super::pres::Presentation;
use super::relmap::RelationshipMapper;

/// Part names of the fixed parts.
const PRESENTATION_PART: &str = "ppt/presentation.xml";
const SLIDE_MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_PART: &str = "ppt/slideLayouts/slideLayout1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";

/// Relationships of one source part, rendered as a `.rels` part.
#[derive(Debug, Default)]
struct Relationships {
    rels: Vec<(String, &'static str, String)>,
}

impl Relationships {
    fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID. IDs are allocated sequentially
    /// starting at `rId1`.
    fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push((r_id.clone(), reltype, target.into()));
        r_id
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for (r_id, reltype, target) in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(r_id),
                escape_xml(reltype),
                escape_xml(target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn add_default(&mut self, ext: &str, content_type: &str) {
        self.defaults
            .insert(ext.to_string(), content_type.to_string());
    }

    /// Register a part by name (without the leading slash).
    fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(format!("/{}", partname), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

/// Streams parts into a zip archive.
struct PartWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> PartWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn write(&mut self, partname: &str, data: &[u8]) -> Result<()> {
        self.zip.start_file(partname, self.options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    fn write_rels(&mut self, partname: &str, rels: &Relationships) -> Result<()> {
        self.write(&rels_partname(partname), rels.to_xml().as_bytes())
    }

    fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

/// Name of the relationships part belonging to `partname`.
fn rels_partname(partname: &str) -> String {
    match partname.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", partname),
    }
}

/// Serialize a presentation to a writer.
pub(crate) fn write_package<W: Write + Seek>(pres: &Presentation, writer: W) -> Result<W> {
    let mut parts = PartWriter::new(writer);
    let mut content_types = ContentTypesItem::new();
    let mut rel_mapper = RelationshipMapper::new();

    // Package relationships (_rels/.rels)
    let mut pkg_rels = Relationships::new();
    pkg_rels.add(rt::OFFICE_DOCUMENT, PRESENTATION_PART);
    pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

    // Presentation relationships: master first, then slides, then props.
    let mut pres_rels = Relationships::new();
    pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    for index in 0..pres.slide_count() {
        let r_id = pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", index + 1));
        rel_mapper.add_slide(index, r_id);
    }
    pres_rels.add(rt::PRES_PROPS, "presProps.xml");
    pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(rt::THEME, "theme/theme1.xml");
    pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

    // Slide relationships: layout is always rId1, pictures follow.
    let mut slide_rels = Vec::with_capacity(pres.slide_count());
    let mut media_counter = 0usize;
    for (slide_index, slide) in pres.slides().iter().enumerate() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        for (image_index, picture) in slide.pictures().iter().enumerate() {
            media_counter += 1;
            let ext = picture.format().extension();
            let media_name = format!("image{}.{}", media_counter, ext);
            let r_id = rels.add(rt::IMAGE, format!("../media/{}", media_name));
            content_types.add_default(ext, picture.format().mime_type());
            rel_mapper.add_image(slide_index, image_index, r_id, media_name);
        }
        slide_rels.push(rels);
    }

    content_types.add_override(PRESENTATION_PART, ct::PML_PRESENTATION_MAIN);
    content_types.add_override(SLIDE_MASTER_PART, ct::PML_SLIDE_MASTER);
    content_types.add_override(SLIDE_LAYOUT_PART, ct::PML_SLIDE_LAYOUT);
    content_types.add_override(THEME_PART, ct::OFC_THEME);
    content_types.add_override("ppt/presProps.xml", ct::PML_PRES_PROPS);
    content_types.add_override("ppt/viewProps.xml", ct::PML_VIEW_PROPS);
    content_types.add_override("ppt/tableStyles.xml", ct::PML_TABLE_STYLES);
    content_types.add_override("docProps/core.xml", ct::OPC_CORE_PROPERTIES);
    content_types.add_override("docProps/app.xml", ct::OFC_EXTENDED_PROPERTIES);
    for index in 0..pres.slide_count() {
        content_types.add_override(&format!("ppt/slides/slide{}.xml", index + 1), ct::PML_SLIDE);
    }

    parts.write("[Content_Types].xml", content_types.to_xml().as_bytes())?;
    parts.write("_rels/.rels", pkg_rels.to_xml().as_bytes())?;

    let title = pres
        .slides()
        .first()
        .and_then(|s| s.title())
        .unwrap_or_default();
    parts.write("docProps/core.xml", template::core_props_xml(title).as_bytes())?;
    parts.write(
        "docProps/app.xml",
        template::app_props_xml(pres.slide_count()).as_bytes(),
    )?;

    parts.write(
        PRESENTATION_PART,
        pres.generate_presentation_xml(&rel_mapper)?.as_bytes(),
    )?;
    parts.write_rels(PRESENTATION_PART, &pres_rels)?;
    parts.write("ppt/presProps.xml", template::pres_props_xml().as_bytes())?;
    parts.write("ppt/viewProps.xml", template::view_props_xml().as_bytes())?;
    parts.write("ppt/tableStyles.xml", template::table_styles_xml().as_bytes())?;
    parts.write(THEME_PART, template::theme_xml().as_bytes())?;

    let master = template::slide_master_xml(pres.slide_width().get(), pres.slide_height().get())?;
    parts.write(SLIDE_MASTER_PART, master.as_bytes())?;
    let mut master_rels = Relationships::new();
    master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    parts.write_rels(SLIDE_MASTER_PART, &master_rels)?;

    parts.write(SLIDE_LAYOUT_PART, template::slide_layout_xml()?.as_bytes())?;
    let mut layout_rels = Relationships::new();
    layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    parts.write_rels(SLIDE_LAYOUT_PART, &layout_rels)?;

    for ((slide_index, slide), rels) in pres.slides().iter().enumerate().zip(&slide_rels) {
        let partname = format!("ppt/slides/slide{}.xml", slide_index + 1);
        let xml = slide.to_xml_with_rels(slide_index, &rel_mapper)?;
        parts.write(&partname, xml.as_bytes())?;
        parts.write_rels(&partname, rels)?;

        for (image_index, picture) in slide.pictures().iter().enumerate() {
            if let Some(media_name) = rel_mapper.get_image_part(slide_index, image_index) {
                parts.write(&format!("ppt/media/{}", media_name), picture.data())?;
            }
        }
    }

    parts.finish()
}

/// Serialize a presentation to bytes.
pub(crate) fn to_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    let cursor = write_package(pres, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}
