//! Splits a whole document into per-slide sources.

/// Line that separates two slides.
const SLIDE_DELIMITER: &str = "\n---\n";

/// Title and body text of one slide, before block parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSource {
    pub title: String,
    pub content: String,
}

/// Split a document into slides.
///
/// Slides are separated by a `---` line. Within each chunk the first line,
/// stripped of leading `#` characters, is the slide title and the remaining
/// lines are the content. A document without separators is a single slide;
/// an empty document still yields one slide with an empty title.
pub fn split_slides(markdown: &str) -> Vec<SlideSource> {
    let normalized = markdown.replace("\r\n", "\n");

    normalized
        .split(SLIDE_DELIMITER)
        .map(|chunk| {
            let chunk = chunk.trim();
            let (first, rest) = chunk.split_once('\n').unwrap_or((chunk, ""));
            SlideSource {
                title: first.trim_start_matches('#').trim().to_string(),
                content: rest.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_slides() {
        let slides = split_slides("# Slide 1\n- Bullet 1\n---\n# Slide 2\n1. Numbered 1\n");
        assert_eq!(
            slides,
            vec![
                SlideSource {
                    title: "Slide 1".to_string(),
                    content: "- Bullet 1".to_string(),
                },
                SlideSource {
                    title: "Slide 2".to_string(),
                    content: "1. Numbered 1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(split_slides(""), vec![SlideSource::default()]);
    }

    #[test]
    fn test_title_only() {
        let slides = split_slides("## Just a title  ");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Just a title");
        assert_eq!(slides[0].content, "");
    }

    #[test]
    fn test_plain_first_line_is_title() {
        let slides = split_slides("Overview\nsome text");
        assert_eq!(slides[0].title, "Overview");
        assert_eq!(slides[0].content, "some text");
    }

    #[test]
    fn test_crlf_delimiter() {
        let slides = split_slides("# A\r\nx\r\n---\r\n# B\r\ny");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].title, "B");
        assert_eq!(slides[1].content, "y");
    }

    #[test]
    fn test_content_keeps_indentation() {
        let slides = split_slides("# A\n- a\n  - nested");
        assert_eq!(slides[0].content, "- a\n  - nested");
    }

    #[test]
    fn test_rule_needs_surrounding_lines() {
        // A leading rule has no newline before it
        let slides = split_slides("---\n# A");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "---");
    }
}
