pub mod blocks;
pub mod components;
pub mod inline;
pub mod snapshot;
pub mod source;
pub mod toc;

use serde::Serialize;
use xi_rope::Rope;

use blocks::{Block, BlockBuilder, BlockNode};
use source::LineSource;

/// An ordered sequence of blocks in source order.
///
/// Built fresh from a text snapshot and never mutated; a content change
/// means a new parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub nodes: Vec<BlockNode>,
}

impl Document {
    pub fn nodes(&self) -> &[BlockNode] {
        &self.nodes
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.nodes.iter().map(|n| &n.block)
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.nodes.into_iter().map(|n| n.block).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parses extended-markdown text into a [`Document`].
///
/// Total: malformed input degrades to paragraph text, never an error.
pub fn parse(text: &str) -> Document {
    parse_lines(&LineSource::new(text))
}

pub fn parse_document(rope: &Rope) -> Document {
    parse_lines(&LineSource::from_rope(rope))
}

pub fn parse_lines(src: &LineSource) -> Document {
    Document {
        nodes: BlockBuilder::new(src).finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineRun;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn header_then_body() {
        assert_eq!(
            parse("# Title\n\nBody text").into_blocks(),
            vec![
                Block::Header {
                    level: 1,
                    text: vec![InlineRun::plain("Title")]
                },
                Block::Paragraph {
                    runs: vec![InlineRun::plain("Body text")]
                },
            ]
        );
    }

    #[test]
    fn rope_and_str_agree() {
        let text = "- a\n- b\n\n```\ncode\n```";
        assert_eq!(parse(text), parse_document(&Rope::from(text)));
    }
}
