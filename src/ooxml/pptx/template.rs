//! Presentation template parts.
//!
//! Provides the fixed parts every generated presentation shares: one theme,
//! one slide master and the single "Title and Content" layout every slide is
//! built on. Placeholder geometry is derived from the slide size so that the
//! title and body regions span the slide whatever its aspect ratio.

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::ooxml::escape_xml;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Default sizes of the body text levels, in hundredths of a point.
const BODY_LEVEL_SIZES: [u32; 9] = [3200, 2800, 2400, 2000, 2000, 2000, 2000, 2000, 2000];

/// Placeholder geometry (x, y, cx, cy) in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Title placeholder geometry for a slide of the given size.
pub fn title_frame(slide_width: i64, slide_height: i64) -> Frame {
    let margin = slide_width / 20;
    Frame {
        x: margin,
        y: slide_height / 25,
        cx: slide_width - 2 * margin,
        cy: slide_height / 6,
    }
}

/// Body placeholder geometry for a slide of the given size.
pub fn body_frame(slide_width: i64, slide_height: i64) -> Frame {
    let margin = slide_width / 20;
    Frame {
        x: margin,
        y: slide_height * 7 / 30,
        cx: slide_width - 2 * margin,
        cy: slide_height * 2 / 3,
    }
}

fn write_xfrm(xml: &mut String, frame: Frame) -> Result<()> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        frame.x, frame.y, frame.cx, frame.cy
    )?;
    Ok(())
}

fn write_group_properties(xml: &mut String) {
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);
}

/// Generate the slide master with title and body placeholders and text styles.
pub fn slide_master_xml(slide_width: i64, slide_height: i64) -> Result<String> {
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);

    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Title Placeholder 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#);
    xml.push_str("<p:spPr>");
    write_xfrm(&mut xml, title_frame(slide_width, slide_height))?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#);
    xml.push_str(r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="ctr"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#);
    xml.push_str(r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r><a:endParaRPr lang="en-US"/></a:p>"#);
    xml.push_str("</p:txBody></p:sp>");

    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Text Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>"#);
    xml.push_str("<p:spPr>");
    write_xfrm(&mut xml, body_frame(slide_width, slide_height))?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#);
    xml.push_str(r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#);
    xml.push_str(r#"<a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p>"#);
    xml.push_str("</p:txBody></p:sp>");

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);

    xml.push_str("<p:txStyles>");
    xml.push_str(r#"<p:titleStyle><a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#);
    xml.push_str("<p:bodyStyle>");
    for (index, size) in BODY_LEVEL_SIZES.iter().enumerate() {
        // Bullets are part of the paragraph text, so the master draws none.
        write!(
            xml,
            r#"<a:lvl{n}pPr marL="{mar}" indent="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buNone/><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{n}pPr>"#,
            n = index + 1,
            mar = 457_200 * index as i64,
            size = size,
        )?;
    }
    xml.push_str("</p:bodyStyle>");
    xml.push_str(r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr><a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:otherStyle>"#);
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");

    Ok(xml)
}

/// Generate the "Title and Content" layout. Placeholders inherit their
/// geometry and styles from the master.
pub fn slide_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="obj" preserve="1">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str(r#"<p:cSld name="Title and Content"><p:spTree>"#);
    write_group_properties(&mut xml);
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#);
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p></p:txBody></p:sp>"#);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");

    Ok(xml)
}

/// Generate a minimal valid theme.xml content.
pub fn theme_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
        r#"<a:themeElements>"#,
        r#"<a:clrScheme name="Office">"#,
        r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
        r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
        r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
        r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
        r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
        r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
        r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
        r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
        r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
        r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
        r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
        r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
        r#"</a:clrScheme>"#,
        r#"<a:fontScheme name="Office">"#,
        r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        r#"</a:fontScheme>"#,
        r#"<a:fmtScheme name="Office">"#,
        r#"<a:fillStyleLst>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
        r#"</a:fillStyleLst>"#,
        r#"<a:lnStyleLst>"#,
        r#"<a:ln w="9525" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
        r#"<a:ln w="25400" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
        r#"<a:ln w="38100" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
        r#"</a:lnStyleLst>"#,
        r#"<a:effectStyleLst>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
        r#"</a:effectStyleLst>"#,
        r#"<a:bgFillStyleLst>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
        r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
        r#"</a:bgFillStyleLst>"#,
        r#"</a:fmtScheme>"#,
        r#"</a:themeElements>"#,
        r#"<a:objectDefaults/><a:extraClrSchemeLst/>"#,
        r#"</a:theme>"#,
    )
}

/// Generate a minimal valid tableStyles.xml content.
pub fn table_styles_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#,
    )
}

/// Generate a minimal valid viewProps.xml content.
pub fn view_props_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<p:viewPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
        r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
        r#"</p:viewPr>"#,
    )
}

/// Generate a minimal valid presProps.xml content.
pub fn pres_props_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<p:presentationPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#,
    )
}

/// Generate core.xml (core properties) content.
pub fn core_props_xml(title: &str) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    xml.push_str("<dc:title>");
    xml.push_str(&escape_xml(title));
    xml.push_str("</dc:title>");
    xml.push_str("<dc:creator>md2pptx</dc:creator>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate app.xml (extended properties) content.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            r#"<Application>md2pptx</Application>"#,
            r#"<PresentationFormat>Custom</PresentationFormat>"#,
            r#"<Slides>{}</Slides>"#,
            r#"</Properties>"#,
        ),
        slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_scale_with_slide() {
        // 16 x 9 inches
        let title = title_frame(14_630_400, 8_229_600);
        assert_eq!(title.x, 731_520);
        assert_eq!(title.cx, 14_630_400 - 2 * 731_520);

        let body = body_frame(14_630_400, 8_229_600);
        assert!(body.y > title.y + title.cy);
        assert!(body.y + body.cy <= 8_229_600);
    }

    #[test]
    fn test_master_lists_layout_and_levels() {
        let xml = slide_master_xml(9_144_000, 6_858_000).unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains("<a:lvl1pPr marL=\"0\""));
        assert!(xml.contains("<a:lvl9pPr"));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
    }

    #[test]
    fn test_core_props_escapes_title() {
        let xml = core_props_xml("R&D");
        assert!(xml.contains("<dc:title>R&amp;D</dc:title>"));
    }
}
