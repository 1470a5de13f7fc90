/// Kind of a list block. A list never mixes kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A single list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting depth, one level per two leading whitespace characters
    pub level: usize,
    pub text: String,
}

impl ListItem {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Block-level elements of a slide body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// `#` to `######` heading; `level` is in `1..=6`
    Header { level: u8, text: String },
    /// `![alt](url)` line; the URL may be empty
    Image { url: String },
    /// A maximal run of list lines of the same kind, never empty
    List { kind: ListKind, items: Vec<ListItem> },
    /// Any other non-blank line
    Text { text: String },
}
