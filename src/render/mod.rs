//! Rendering of content blocks onto a slide.
//!
//! The renderer writes one paragraph per content line into the body
//! placeholder of a slide and places pictures for image blocks. It works
//! against the [`SlideCanvas`] trait so any slide model exposing a title, a
//! body text frame and picture insertion can be targeted.

mod numbering;

pub use numbering::LevelCounters;

use tracing::warn;

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::images::{ImageSource, probe_image};
use crate::markdown::{ContentBlock, ListItem, ListKind};
use crate::ooxml::pptx::{
    Alignment, AutoSize, Emu, ImageFormat, Inches, MAX_LEVEL, Paragraph, Slide, TextFrame,
};

/// Bullet glyph prepended to bullet list items.
const BULLET: char = '\u{2022}';

/// A slide with one title region and one body region.
pub trait SlideCanvas {
    fn set_title(&mut self, title: &str);

    /// Text frame of the body region.
    fn body_mut(&mut self) -> &mut TextFrame;

    /// Place a picture with its top-left corner at `position`, scaled to
    /// `size`. `description` becomes the alternative text.
    fn add_picture(
        &mut self,
        data: Vec<u8>,
        format: ImageFormat,
        position: (Emu, Emu),
        size: (Emu, Emu),
        description: &str,
    );
}

impl SlideCanvas for Slide {
    fn set_title(&mut self, title: &str) {
        Slide::set_title(self, title);
    }

    fn body_mut(&mut self) -> &mut TextFrame {
        Slide::body_mut(self)
    }

    fn add_picture(
        &mut self,
        data: Vec<u8>,
        format: ImageFormat,
        position: (Emu, Emu),
        size: (Emu, Emu),
        description: &str,
    ) {
        Slide::add_picture(self, data, format, position, size).set_description(description);
    }
}

/// Maps content blocks onto slides.
pub struct SlideRenderer<'a> {
    options: &'a ConvertOptions,
    images: &'a dyn ImageSource,
}

impl<'a> SlideRenderer<'a> {
    pub fn new(options: &'a ConvertOptions, images: &'a dyn ImageSource) -> Self {
        Self { options, images }
    }

    /// Render `title` and `blocks` onto `slide`.
    ///
    /// The body is cleared first and set to shrink text on overflow. Every
    /// written paragraph is followed by a fresh empty one, so a body with N
    /// lines of content ends with exactly one empty paragraph. Image failures
    /// are logged and skipped.
    pub fn render<C: SlideCanvas + ?Sized>(&self, slide: &mut C, title: &str, blocks: &[ContentBlock]) {
        slide.set_title(title);

        let body = slide.body_mut();
        body.clear();
        body.set_auto_size(AutoSize::TextToFitShape);

        for block in blocks {
            match block {
                ContentBlock::Header { level, text } => {
                    write_paragraph(slide.body_mut(), |p| {
                        p.set_text(text.as_str()).set_level(level.saturating_sub(1));
                        p.font_mut().bold = Some(true);
                    });
                }
                ContentBlock::Image { url } => {
                    if let Err(e) = self.place_image(slide, url) {
                        warn!(url = %url, error = %e, "skipping image");
                    }
                }
                ContentBlock::List { kind, items } => self.render_list(slide.body_mut(), *kind, items),
                ContentBlock::Text { text } => {
                    write_paragraph(slide.body_mut(), |p| {
                        p.set_text(text.as_str()).set_alignment(Alignment::Left);
                    });
                }
            }
        }
    }

    fn render_list(&self, body: &mut TextFrame, kind: ListKind, items: &[ListItem]) {
        let mut counters = LevelCounters::new();

        for item in items {
            let text = match kind {
                ListKind::Numbered => format!("{}. {}", counters.next(item.level), item.text),
                ListKind::Bullet => format!("{} {}", BULLET, item.text),
            };
            let size = self.options.list_font_sizes.for_level(item.level);

            write_paragraph(body, |p| {
                // Deeper levels are capped by the paragraph at MAX_LEVEL
                p.set_text(text)
                    .set_level(u8::try_from(item.level).unwrap_or(MAX_LEVEL));
                p.font_mut().size = Some(size);
            });
        }
    }

    /// Fetch, inspect and place one picture at the configured position, scaled
    /// to the configured width. The URL is kept as the alternative text.
    fn place_image<C: SlideCanvas + ?Sized>(&self, slide: &mut C, url: &str) -> Result<()> {
        let data = self.images.fetch(url)?;
        let info = probe_image(&data)?;

        let placement = &self.options.image;
        let height_in = placement.width_in * info.aspect_ratio();
        slide.add_picture(
            data,
            info.format,
            (Inches(placement.left_in).into(), Inches(placement.top_in).into()),
            (Inches(placement.width_in).into(), Inches(height_in).into()),
            url,
        );
        Ok(())
    }
}

/// Style the current last paragraph, then open the next one.
fn write_paragraph(body: &mut TextFrame, style: impl FnOnce(&mut Paragraph)) {
    style(body.last_paragraph_mut());
    body.add_paragraph();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::NoImageSource;
    use crate::images::tests::{MapImageSource, png};
    use crate::markdown::parse;
    use crate::ooxml::pptx::{Presentation, Pt};

    fn render(content: &str, images: &dyn ImageSource) -> Slide {
        render_with(&ConvertOptions::default(), content, images)
    }

    fn render_with(options: &ConvertOptions, content: &str, images: &dyn ImageSource) -> Slide {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        SlideRenderer::new(options, images).render(slide, "Title", &parse(content));
        slide.clone()
    }

    fn texts(slide: &Slide) -> Vec<&str> {
        slide.body().paragraphs().iter().map(Paragraph::text).collect()
    }

    #[test]
    fn test_empty_body_keeps_one_paragraph() {
        let slide = render("", &NoImageSource);
        assert_eq!(slide.title(), Some("Title"));
        assert_eq!(texts(&slide), vec![""]);
        assert_eq!(slide.body().auto_size(), AutoSize::TextToFitShape);
    }

    #[test]
    fn test_bullets_and_numbers() {
        let slide = render("- Bullet 1\n- Bullet 2\n1. Numbered 1\n2. Numbered 2", &NoImageSource);
        assert_eq!(
            texts(&slide),
            vec!["• Bullet 1", "• Bullet 2", "1. Numbered 1", "2. Numbered 2", ""]
        );

        let first = &slide.body().paragraphs()[0];
        assert_eq!(first.level(), 0);
        assert_eq!(first.font().size, Some(Pt(18.0)));
    }

    #[test]
    fn test_nested_numbering() {
        let slide = render("1. Numbered 1\n2. Numbered 2\n  1. Nested Numbered", &NoImageSource);
        let paragraphs = slide.body().paragraphs();
        assert_eq!(paragraphs[2].text(), "1. Nested Numbered");
        assert_eq!(paragraphs[2].level(), 1);
        assert_eq!(paragraphs[2].font().size, Some(Pt(16.0)));
    }

    #[test]
    fn test_levels_number_independently() {
        let slide = render("1. a\n  1. b\n1. c\n  1. d", &NoImageSource);
        assert_eq!(texts(&slide), vec!["1. a", "1. b", "2. c", "2. d", ""]);
    }

    #[test]
    fn test_counters_reset_per_list() {
        let slide = render("1. a\n2. b\ntext\n1. c", &NoImageSource);
        assert_eq!(texts(&slide), vec!["1. a", "2. b", "text", "1. c", ""]);
    }

    #[test]
    fn test_source_numbers_are_ignored() {
        let slide = render("7. a\n7. b", &NoImageSource);
        assert_eq!(texts(&slide), vec!["1. a", "2. b", ""]);
    }

    #[test]
    fn test_deep_items_use_smallest_size() {
        let slide = render("- a\n    - b\n        - c", &NoImageSource);
        let sizes: Vec<_> = slide.body().paragraphs()[..3]
            .iter()
            .map(|p| p.font().size)
            .collect();
        assert_eq!(sizes, vec![Some(Pt(18.0)), Some(Pt(14.0)), Some(Pt(14.0))]);
    }

    #[test]
    fn test_header_is_bold_one_level_up() {
        let slide = render("### Section", &NoImageSource);
        let p = &slide.body().paragraphs()[0];
        assert_eq!(p.text(), "Section");
        assert_eq!(p.level(), 2);
        assert_eq!(p.font().bold, Some(true));
        assert_eq!(slide.title(), Some("Title"));
    }

    #[test]
    fn test_text_left_aligned() {
        let slide = render("plain", &NoImageSource);
        let p = &slide.body().paragraphs()[0];
        assert_eq!(p.alignment(), Some(Alignment::Left));
        assert_eq!(p.font().size, None);
        assert_eq!(p.font().bold, None);
    }

    #[test]
    fn test_image_failure_continues() {
        let slide = render("![x](https://x/y.jpg)\nafter", &NoImageSource);
        assert!(slide.pictures().is_empty());
        assert_eq!(texts(&slide), vec!["after", ""]);
    }

    #[test]
    fn test_undecodable_image_is_skipped() {
        let images = MapImageSource::default().with("bad.png", b"not an image".to_vec());
        let slide = render("![x](bad.png)", &images);
        assert!(slide.pictures().is_empty());
    }

    #[test]
    fn test_image_placed_with_aspect_ratio() {
        let images = MapImageSource::default().with("wide.png", png(300, 150));
        let slide = render("![chart](wide.png)", &images);

        assert_eq!(slide.pictures().len(), 1);
        let picture = &slide.pictures()[0];
        assert_eq!(picture.position(), (Emu(914_400), Emu(2_286_000)));
        assert_eq!(picture.size(), (Emu(5_486_400), Emu(2_743_200)));
        assert_eq!(picture.format(), ImageFormat::Png);
        assert_eq!(picture.description(), "wide.png");
        // Pictures do not produce paragraphs
        assert_eq!(texts(&slide), vec![""]);
    }

    #[test]
    fn test_styling_follows_options() {
        let options = ConvertOptions::from_toml_str(
            "[image]\nleft_in = 0.5\ntop_in = 1.0\nwidth_in = 4.0\n\
             [list_font_sizes]\nlevel0 = 24.0\nlevel1 = 20.0\ndeeper = 12.0\n",
        )
        .unwrap();
        let images = MapImageSource::default().with("tall.png", png(100, 200));
        let slide = render_with(&options, "- a\n  - b\n    - c\n![x](tall.png)", &images);

        let sizes: Vec<_> = slide.body().paragraphs()[..3]
            .iter()
            .map(|p| p.font().size)
            .collect();
        assert_eq!(sizes, vec![Some(Pt(24.0)), Some(Pt(20.0)), Some(Pt(12.0))]);

        let picture = &slide.pictures()[0];
        assert_eq!(picture.position(), (Emu(457_200), Emu(914_400)));
        assert_eq!(picture.size(), (Emu(3_657_600), Emu(7_315_200)));
    }

    #[test]
    fn test_levels_past_max_are_capped() {
        let content = format!("{}- deep", " ".repeat(40));
        let slide = render(&content, &NoImageSource);
        let p = &slide.body().paragraphs()[0];
        assert_eq!(p.level(), MAX_LEVEL);
        assert_eq!(p.font().size, Some(Pt(14.0)));
    }

    #[test]
    fn test_render_replaces_previous_body() {
        let options = ConvertOptions::default();
        let renderer = SlideRenderer::new(&options, &NoImageSource);
        let mut pres = Presentation::new();
        let slide = pres.add_slide();

        renderer.render(slide, "One", &parse("first\nsecond"));
        renderer.render(slide, "Two", &parse("third"));
        assert_eq!(slide.title(), Some("Two"));
        assert_eq!(slide.body().text(), "third\n");
    }
}
