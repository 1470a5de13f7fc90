/// Line classifier that groups slide body lines into content blocks.
use tracing::trace;

use super::block::{ContentBlock, ListItem, ListKind};

/// Deepest heading marker recognized (`######`).
const MAX_HEADER_LEVEL: usize = 6;

/// Classification of one physical line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    /// Image line without a parenthesized URL
    Dropped,
    Image(&'a str),
    Header(u8, &'a str),
    Item(ListKind, usize, &'a str),
    Text(&'a str),
}

/// Parse the body of one slide into blocks.
///
/// Each line is classified independently, first match wins: image, header,
/// list item, text. Consecutive list lines of the same kind are collected into
/// one [`ContentBlock::List`]; any other non-blank line or a change of list
/// kind closes the open list. Blank lines are skipped and leave an open list
/// untouched.
///
/// Parsing never fails: lines that fit no rule become text, and image lines
/// without a URL are dropped.
pub fn parse(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut open_list: Option<(ListKind, Vec<ListItem>)> = None;

    for raw in content.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let class = classify(line);
        trace!(?class, line, "classified line");

        match class {
            Line::Blank => {}
            Line::Dropped => flush(&mut open_list, &mut blocks),
            Line::Image(url) => {
                flush(&mut open_list, &mut blocks);
                blocks.push(ContentBlock::Image {
                    url: url.to_string(),
                });
            }
            Line::Header(level, text) => {
                flush(&mut open_list, &mut blocks);
                blocks.push(ContentBlock::Header {
                    level,
                    text: text.to_string(),
                });
            }
            Line::Item(kind, level, text) => {
                if open_list.as_ref().is_some_and(|(open, _)| *open != kind) {
                    flush(&mut open_list, &mut blocks);
                }
                open_list
                    .get_or_insert_with(|| (kind, Vec::new()))
                    .1
                    .push(ListItem::new(level, text));
            }
            Line::Text(text) => {
                flush(&mut open_list, &mut blocks);
                blocks.push(ContentBlock::Text {
                    text: text.to_string(),
                });
            }
        }
    }

    flush(&mut open_list, &mut blocks);
    blocks
}

fn flush(open_list: &mut Option<(ListKind, Vec<ListItem>)>, blocks: &mut Vec<ContentBlock>) {
    if let Some((kind, items)) = open_list.take()
        && !items.is_empty()
    {
        blocks.push(ContentBlock::List { kind, items });
    }
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if line.starts_with("![") {
        return match image_url(line) {
            Some(url) => Line::Image(url),
            None => Line::Dropped,
        };
    }
    if let Some((level, text)) = header(line) {
        return Line::Header(level, text);
    }
    if let Some((kind, level, text)) = list_item(line) {
        return Line::Item(kind, level, text);
    }
    Line::Text(line.trim())
}

/// Contents of the first `(...)` pair, shortest match.
fn image_url(line: &str) -> Option<&str> {
    let open = line.find('(')?;
    let rest = &line[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

/// `#{1,6}` followed by whitespace.
fn header(line: &str) -> Option<(u8, &str)> {
    let rest = line.trim_start_matches('#');
    let hashes = line.len() - rest.len();
    if hashes == 0 || hashes > MAX_HEADER_LEVEL {
        return None;
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

/// Optional indentation, then `N.` or `-`/`*`, then whitespace.
fn list_item(line: &str) -> Option<(ListKind, usize, &str)> {
    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();

    let (kind, after_marker) = if let Some(rest) = body.strip_prefix(['-', '*']) {
        (ListKind::Bullet, rest)
    } else {
        let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        (ListKind::Numbered, body[digits..].strip_prefix('.')?)
    };

    let mut chars = after_marker.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some((kind, indent / 2, chars.as_str().trim())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bullets(items: &[(usize, &str)]) -> ContentBlock {
        list(ListKind::Bullet, items)
    }

    fn numbered(items: &[(usize, &str)]) -> ContentBlock {
        list(ListKind::Numbered, items)
    }

    fn list(kind: ListKind, items: &[(usize, &str)]) -> ContentBlock {
        ContentBlock::List {
            kind,
            items: items
                .iter()
                .map(|(level, text)| ListItem::new(*level, *text))
                .collect(),
        }
    }

    fn text(t: &str) -> ContentBlock {
        ContentBlock::Text {
            text: t.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            parse("# One\n###### Six\n####### Seven"),
            vec![
                ContentBlock::Header {
                    level: 1,
                    text: "One".to_string()
                },
                ContentBlock::Header {
                    level: 6,
                    text: "Six".to_string()
                },
                text("####### Seven"),
            ]
        );
    }

    #[test]
    fn test_header_requires_whitespace() {
        assert_eq!(parse("#hashtag"), vec![text("#hashtag")]);
        assert_eq!(parse("  # indented"), vec![text("# indented")]);
    }

    #[test]
    fn test_bullet_and_numbered_runs() {
        let blocks = parse("- Bullet 1\n- Bullet 2\n1. Numbered 1\n2. Numbered 2");
        assert_eq!(
            blocks,
            vec![
                bullets(&[(0, "Bullet 1"), (0, "Bullet 2")]),
                numbered(&[(0, "Numbered 1"), (0, "Numbered 2")]),
            ]
        );
    }

    #[test]
    fn test_nested_levels() {
        let blocks = parse("1. Numbered 1\n2. Numbered 2\n  1. Nested Numbered\n    - deep");
        assert_eq!(
            blocks,
            vec![
                numbered(&[(0, "Numbered 1"), (0, "Numbered 2"), (1, "Nested Numbered")]),
                bullets(&[(2, "deep")]),
            ]
        );
    }

    #[test]
    fn test_odd_indent_floors() {
        assert_eq!(parse("   * three"), vec![bullets(&[(1, "three")])]);
        assert_eq!(parse("\t- tab"), vec![bullets(&[(0, "tab")])]);
    }

    #[test]
    fn test_marker_needs_whitespace() {
        assert_eq!(parse("-dash\n1.5 apples\n**bold**"), vec![
            text("-dash"),
            text("1.5 apples"),
            text("**bold**"),
        ]);
    }

    #[test]
    fn test_image_closes_list() {
        let blocks = parse("- a\n![Image](https://x/y.jpg)\n- b");
        assert_eq!(
            blocks,
            vec![
                bullets(&[(0, "a")]),
                ContentBlock::Image {
                    url: "https://x/y.jpg".to_string()
                },
                bullets(&[(0, "b")]),
            ]
        );
    }

    #[test]
    fn test_image_url_shortest_match() {
        assert_eq!(
            parse("![a](one.png) (two.png)\n![empty]()"),
            vec![
                ContentBlock::Image {
                    url: "one.png".to_string()
                },
                ContentBlock::Image { url: String::new() },
            ]
        );
    }

    #[test]
    fn test_image_without_url_is_dropped_but_flushes() {
        let blocks = parse("- a\n![no url]\n- b");
        assert_eq!(blocks, vec![bullets(&[(0, "a")]), bullets(&[(0, "b")])]);
    }

    #[test]
    fn test_blank_lines_keep_list_open() {
        let blocks = parse("- a\n\n   \n- b");
        assert_eq!(blocks, vec![bullets(&[(0, "a"), (0, "b")])]);
    }

    #[test]
    fn test_text_trimmed_and_closes_list() {
        let blocks = parse("- a\n  plain words  \n- b");
        assert_eq!(
            blocks,
            vec![bullets(&[(0, "a")]), text("plain words"), bullets(&[(0, "b")])]
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            parse("# Title\r\n- a\r\n"),
            vec![
                ContentBlock::Header {
                    level: 1,
                    text: "Title".to_string()
                },
                bullets(&[(0, "a")]),
            ]
        );
    }

    #[derive(Debug, Clone)]
    enum Gen {
        Bullet(usize),
        Numbered(usize),
        Text,
        Blank,
    }

    fn gen_line() -> impl Strategy<Value = Gen> {
        prop_oneof![
            (0usize..8).prop_map(Gen::Bullet),
            (0usize..8).prop_map(Gen::Numbered),
            Just(Gen::Text),
            Just(Gen::Blank),
        ]
    }

    fn render_line(line: &Gen) -> String {
        match line {
            Gen::Bullet(indent) => format!("{}- item", " ".repeat(*indent)),
            Gen::Numbered(indent) => format!("{}3. item", " ".repeat(*indent)),
            Gen::Text => "words".to_string(),
            Gen::Blank => String::new(),
        }
    }

    /// Number of maximal same-kind runs of list lines, ignoring blanks.
    fn expected_runs(lines: &[Gen]) -> usize {
        let mut runs = 0;
        let mut current: Option<ListKind> = None;
        for line in lines {
            let kind = match line {
                Gen::Bullet(_) => Some(ListKind::Bullet),
                Gen::Numbered(_) => Some(ListKind::Numbered),
                Gen::Text => None,
                Gen::Blank => continue,
            };
            if kind.is_some() && kind != current {
                runs += 1;
            }
            current = kind;
        }
        runs
    }

    proptest! {
        #[test]
        fn prop_list_blocks_match_runs(lines in prop::collection::vec(gen_line(), 0..40)) {
            let content: Vec<String> = lines.iter().map(render_line).collect();
            let blocks = parse(&content.join("\n"));

            let lists: Vec<_> = blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::List { items, .. } => Some(items),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(lists.len(), expected_runs(&lines));
            prop_assert!(lists.iter().all(|items| !items.is_empty()));
        }

        #[test]
        fn prop_level_is_half_indent(indent in 0usize..32, numbered in any::<bool>()) {
            let marker = if numbered { "12." } else { "*" };
            let line = format!("{}{} x", " ".repeat(indent), marker);
            match parse(&line).as_slice() {
                [ContentBlock::List { items, .. }] => prop_assert_eq!(items[0].level, indent / 2),
                other => prop_assert!(false, "unexpected blocks {:?}", other),
            }
        }

        #[test]
        fn prop_header_level_in_range(hashes in 1usize..10, title in "[a-z]{1,12}") {
            let line = format!("{} {}", "#".repeat(hashes), title);
            match parse(&line).as_slice() {
                [ContentBlock::Header { level, text }] => {
                    prop_assert!(hashes <= MAX_HEADER_LEVEL);
                    prop_assert_eq!(*level as usize, hashes);
                    prop_assert_eq!(text, &title);
                }
                [ContentBlock::Text { .. }] => prop_assert!(hashes > MAX_HEADER_LEVEL),
                other => prop_assert!(false, "unexpected blocks {:?}", other),
            }
        }
    }
}
