//! Markdown-dialect parsing for slide decks.
//!
//! The input is a small, line-oriented subset of markdown. A document is split
//! into slides on `---` lines ([`split_slides`]); the body of each slide is then
//! classified line by line into [`ContentBlock`]s ([`parse`]).
//!
//! ```rust
//! use md2pptx::markdown::{ContentBlock, ListKind, parse, split_slides};
//!
//! let slides = split_slides("# Intro\n- a\n- b\n---\n# Outro\nbye");
//! assert_eq!(slides[0].title, "Intro");
//!
//! let blocks = parse(&slides[0].content);
//! assert!(matches!(
//!     &blocks[0],
//!     ContentBlock::List { kind: ListKind::Bullet, items } if items.len() == 2
//! ));
//! ```

pub mod block;
pub mod parser;
pub mod splitter;

pub use block::{ContentBlock, ListItem, ListKind};
pub use parser::parse;
pub use splitter::{SlideSource, split_slides};
