//! Document conversion driver.
//!
//! Ties the pieces together: the document is split into slides, each slide
//! body is parsed into blocks, and the blocks are rendered onto a new slide of
//! the presentation, in document order.

use std::fs;
use std::path::Path;

#[cfg(feature = "remote_images")]
use tracing::warn;
use tracing::debug;

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::images::{ImageSource, NoImageSource};
use crate::markdown::{parse, split_slides};
use crate::ooxml::pptx::Presentation;
use crate::render::SlideRenderer;

/// Converts markdown documents into presentations.
pub struct Converter<'a> {
    options: ConvertOptions,
    images: &'a dyn ImageSource,
}

impl<'a> Converter<'a> {
    pub fn new(options: ConvertOptions, images: &'a dyn ImageSource) -> Self {
        Self { options, images }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Build a presentation from a whole document.
    ///
    /// Conversion itself cannot fail: malformed lines degrade to text and
    /// images that cannot be fetched or decoded are skipped.
    pub fn convert(&self, markdown: &str) -> Presentation {
        let mut pres = Presentation::new();
        pres.set_slide_width(self.options.slide_width());
        pres.set_slide_height(self.options.slide_height());

        let renderer = SlideRenderer::new(&self.options, self.images);
        for (index, source) in split_slides(markdown).iter().enumerate() {
            let blocks = parse(&source.content);
            debug!(index, title = %source.title, blocks = blocks.len(), "rendering slide");
            renderer.render(pres.add_slide(), &source.title, &blocks);
        }

        pres
    }
}

/// Default image source for convenience conversions.
///
/// A client that cannot be built only costs the images, never the deck.
#[cfg(feature = "remote_images")]
fn default_image_source(options: &ConvertOptions) -> Box<dyn ImageSource> {
    match crate::images::HttpImageSource::new(&options.fetch) {
        Ok(source) => Box::new(source),
        Err(e) => {
            warn!(error = %e, "HTTP client unavailable, images will be skipped");
            Box::new(NoImageSource)
        }
    }
}

#[cfg(not(feature = "remote_images"))]
fn default_image_source(_options: &ConvertOptions) -> Box<dyn ImageSource> {
    Box::new(NoImageSource)
}

/// Convert markdown text and save the presentation to `output`.
///
/// Images are fetched over HTTP when the `remote_images` feature is enabled.
///
/// # Example
///
/// ```rust,no_run
/// use md2pptx::{ConvertOptions, markdown_to_pptx};
///
/// markdown_to_pptx("# Hello\n- world", "hello.pptx", &ConvertOptions::default())?;
/// # Ok::<(), md2pptx::Error>(())
/// ```
pub fn markdown_to_pptx(
    markdown: &str,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let images = default_image_source(options);
    let pres = Converter::new(options.clone(), images.as_ref()).convert(markdown);
    pres.save(output)
}

/// Read a markdown file and save the converted presentation to `output`.
pub fn markdown_file_to_pptx(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let markdown = fs::read_to_string(input)?;
    markdown_to_pptx(&markdown, output, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ooxml::pptx::Emu;

    #[test]
    fn test_two_slides() {
        let converter = Converter::new(ConvertOptions::default(), &NoImageSource);
        let pres = converter.convert(
            "# Slide 1\n- Bullet 1\n- Bullet 2\n---\n# Slide 2\n1. Numbered 1\n2. Numbered 2",
        );

        assert_eq!(pres.slide_count(), 2);
        let titles: Vec<_> = pres.slides().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec![Some("Slide 1"), Some("Slide 2")]);
        assert_eq!(pres.slides()[0].body().text(), "• Bullet 1\n• Bullet 2\n");
        assert_eq!(pres.slides()[1].body().text(), "1. Numbered 1\n2. Numbered 2\n");
    }

    #[test]
    fn test_slide_size_from_options() {
        let options = ConvertOptions::default().with_slide_size(10.0, 7.5);
        let pres = Converter::new(options, &NoImageSource).convert("# Only");
        assert_eq!(pres.slide_width(), Emu(9_144_000));
        assert_eq!(pres.slide_height(), Emu(6_858_000));
    }

    #[test]
    fn test_empty_document_has_one_slide() {
        let pres = Converter::new(ConvertOptions::default(), &NoImageSource).convert("");
        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slides()[0].title(), Some(""));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = markdown_file_to_pptx(
            dir.path().join("missing.md"),
            dir.path().join("out.pptx"),
            &ConvertOptions::default(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!dir.path().join("out.pptx").exists());
    }

    #[cfg(feature = "remote_images")]
    #[test]
    fn test_unusable_http_client_still_converts() {
        let mut options = ConvertOptions::default();
        // Not a valid header value, so the client builder rejects it
        options.fetch.user_agent = "bad\nagent".to_string();
        assert!(crate::images::HttpImageSource::new(&options.fetch).is_err());

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deck.pptx");
        markdown_to_pptx("# Hello\n![x](https://x/y.png)\nworld", &output, &options).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.md");
        let output = dir.path().join("deck.pptx");
        fs::write(&input, "# Hello\nworld\n").unwrap();

        markdown_file_to_pptx(&input, &output, &ConvertOptions::default()).unwrap();
        assert!(output.metadata().unwrap().len() > 0);
    }
}
