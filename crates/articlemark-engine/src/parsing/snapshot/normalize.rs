use serde::Serialize;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::InlineRun,
    source::{LineSource, Span},
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind name (e.g. "paragraph", "pull_quote").
    pub kind: String,
    /// Line range as (start, end) tuple.
    pub lines: (usize, usize),
    /// Preview of the source lines (truncated for readability).
    pub source: String,
    /// Inline runs of the block's main text, as `Style(text)` labels.
    pub inline: Vec<String>,
}

/// Converts a parsed document into a serializable snapshot.
pub fn normalize(src: &LineSource, doc: &Document) -> Snap {
    let blocks = doc
        .nodes()
        .iter()
        .map(|node| BlockSnap {
            kind: node.block.kind_name().to_string(),
            lines: (node.lines.start, node.lines.end),
            source: preview(src, node.lines, 80),
            inline: main_runs(&node.block).iter().map(label).collect(),
        })
        .collect();
    Snap { blocks }
}

fn main_runs(block: &Block) -> &[InlineRun] {
    match block {
        Block::Header { text, .. } | Block::BlockQuote { text } => text,
        Block::Paragraph { runs } => runs,
        Block::Callout { body, .. } => body,
        Block::DropCap { rest, .. } => rest,
        _ => &[],
    }
}

fn label(run: &InlineRun) -> String {
    match run {
        InlineRun::PlainText(s) => format!("Plain({s})"),
        InlineRun::Bold(s) => format!("Bold({s})"),
        InlineRun::Italic(s) => format!("Italic({s})"),
        InlineRun::Code(s) => format!("Code({s})"),
        InlineRun::Link { text, url } => format!("Link({text} -> {url})"),
    }
}

/// Source lines of `lines` joined with `\n`, truncated to `max` bytes with a
/// "..." suffix.
pub fn preview(src: &LineSource, lines: Span, max: usize) -> String {
    let mut s = (lines.start..lines.end)
        .filter_map(|i| src.get(i))
        .map(|l| l.raw.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let src = LineSource::new("hello\nworld");
        assert_eq!(preview(&src, Span::new(0, 2), 20), "hello\nworld");
    }

    #[test]
    fn preview_truncates_long_text() {
        let src = LineSource::new("hello world");
        assert_eq!(preview(&src, Span::new(0, 1), 5), "hello...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let src = LineSource::new("héllo");
        assert_eq!(preview(&src, Span::new(0, 1), 2), "h...");
    }
}
