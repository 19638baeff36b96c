use crate::parsing::{
    components,
    inline::parse_inline,
    source::{LineSource, Span},
};

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    extract::{self, Extracted},
    types::{Block, BlockNode},
};

/// Lines folded into a paragraph that has not been emitted yet.
#[derive(Debug, Default)]
struct PendingParagraph {
    parts: Vec<String>,
    first: usize,
    last: usize,
}

/// The block dispatcher: a single forward cursor over the lines.
///
/// At each position the line's classification picks one detector; the
/// matched extractor reports how far the cursor moves. Anything unmatched
/// accumulates into a pending paragraph, flushed by the next block, blank
/// line or end of input.
pub struct BlockBuilder<'a> {
    src: &'a LineSource,
    classifier: MarkdownLineClassifier,
    cursor: usize,
    paragraph: Option<PendingParagraph>,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(src: &'a LineSource) -> Self {
        Self {
            src,
            classifier: MarkdownLineClassifier,
            cursor: 0,
            paragraph: None,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        let src = self.src;
        while let Some(lr) = src.get(self.cursor) {
            let class = self.classifier.classify(lr);
            self.step(class.index, class.kind);
        }
        // EOF flush
        self.flush_paragraph();
        log::trace!(
            "parsed {} lines into {} blocks",
            src.len(),
            self.out.len()
        );
        self.out
    }

    fn step(&mut self, index: usize, kind: LineKind<'_>) {
        match kind {
            LineKind::Blank => {
                self.flush_paragraph();
                self.cursor += 1;
            }
            LineKind::Header { level, text } => {
                self.emit_line(
                    Block::Header {
                        level,
                        text: parse_inline(text),
                    },
                    index,
                );
            }
            LineKind::Divider => self.emit_line(Block::Divider, index),
            LineKind::Component(tag) => match components::build(&tag, self.src, index) {
                Some(ex) => {
                    self.emit(ex);
                    if let Some(rest) = components::leftover(&tag) {
                        self.start_paragraph(index, rest);
                    }
                }
                None => {
                    log::debug!(
                        "![{}] on line {} has nothing to attach to; kept as text",
                        tag.tag.name(),
                        index + 1
                    );
                    self.extend_paragraph(index);
                }
            },
            LineKind::Callout { kind, body } => {
                self.emit_line(
                    Block::Callout {
                        kind,
                        body: parse_inline(body),
                    },
                    index,
                );
            }
            LineKind::ChecklistItem { .. } => {
                let ex = extract::checklist(self.src, index);
                self.emit(ex.map(|items| Block::Checklist { items }));
            }
            LineKind::BulletItem(_) => {
                let ex = extract::bullet_list(self.src, index);
                self.emit(ex.map(|items| Block::BulletList { items }));
            }
            LineKind::NumberedItem { .. } => {
                let ex = extract::numbered_list(self.src, index);
                self.emit(ex.map(|items| Block::NumberedList { items }));
            }
            LineKind::FenceOpen { .. } => {
                let ex = extract::code_block(self.src, index);
                self.emit(ex.map(|(language, code)| Block::CodeBlock { language, code }));
            }
            LineKind::Quote(_) => {
                let ex = extract::block_quote(self.src, index);
                self.emit(ex.map(|text| Block::BlockQuote { text }));
            }
            LineKind::Text(text) => {
                if text.starts_with(components::TagLine::OPEN) {
                    log::debug!("line {} is not a known component; kept as text", index + 1);
                }
                self.extend_paragraph(index);
            }
        }
    }

    fn emit_line(&mut self, block: Block, index: usize) {
        self.emit(Extracted {
            value: block,
            lines: Span::new(index, index + 1),
            next: index + 1,
        });
    }

    fn emit(&mut self, ex: Extracted<Block>) {
        self.flush_paragraph();
        self.push_node(ex.value, ex.lines);
        // Extractors always consume at least the line they started on.
        self.cursor = ex.next.max(self.cursor + 1);
    }

    fn push_node(&mut self, block: Block, lines: Span) {
        self.out.push(BlockNode {
            block,
            lines,
            span: self.src.byte_span(lines),
        });
    }

    fn extend_paragraph(&mut self, index: usize) {
        let text = self
            .src
            .get(index)
            .map(|l| l.text().to_string())
            .unwrap_or_default();
        let pending = self.paragraph.get_or_insert_with(|| PendingParagraph {
            first: index,
            ..Default::default()
        });
        pending.parts.push(text);
        pending.last = index;
        self.cursor = index + 1;
    }

    /// Opens a paragraph with text left over on a line another block already
    /// claimed. The paragraph's line range starts on that shared line.
    fn start_paragraph(&mut self, index: usize, text: &str) {
        self.paragraph = Some(PendingParagraph {
            parts: vec![text.to_string()],
            first: index,
            last: index,
        });
    }

    fn flush_paragraph(&mut self) {
        if let Some(p) = self.paragraph.take() {
            let runs = parse_inline(&p.parts.join(" "));
            self.push_node(Block::Paragraph { runs }, Span::new(p.first, p.last + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::types::CalloutKind, inline::InlineRun};
    use pretty_assertions::assert_eq;

    fn blocks(input: &str) -> Vec<Block> {
        let src = LineSource::new(input);
        BlockBuilder::new(&src)
            .finish()
            .into_iter()
            .map(|n| n.block)
            .collect()
    }

    #[test]
    fn paragraph_lines_join_with_spaces() {
        assert_eq!(
            blocks("one\ntwo\n\nthree"),
            vec![
                Block::Paragraph {
                    runs: vec![InlineRun::plain("one two")]
                },
                Block::Paragraph {
                    runs: vec![InlineRun::plain("three")]
                },
            ]
        );
    }

    #[test]
    fn header_flushes_pending_paragraph() {
        assert_eq!(
            blocks("intro\n## Next"),
            vec![
                Block::Paragraph {
                    runs: vec![InlineRun::plain("intro")]
                },
                Block::Header {
                    level: 2,
                    text: vec![InlineRun::plain("Next")]
                },
            ]
        );
    }

    #[test]
    fn callout_is_single_line() {
        assert_eq!(
            blocks("💡 **Tip**: Breathe.\nthen text"),
            vec![
                Block::Callout {
                    kind: CalloutKind::Tip,
                    body: vec![InlineRun::plain("Breathe.")]
                },
                Block::Paragraph {
                    runs: vec![InlineRun::plain("then text")]
                },
            ]
        );
    }

    #[test]
    fn unknown_tag_folds_into_paragraph() {
        assert_eq!(
            blocks("before\n![photo](cat.png)\nafter"),
            vec![Block::Paragraph {
                runs: vec![
                    InlineRun::plain("before !"),
                    InlineRun::link("photo", "cat.png"),
                    InlineRun::plain(" after"),
                ]
            }]
        );
    }

    #[test]
    fn text_after_component_starts_paragraph() {
        let src = LineSource::new("![hero](img, T) and *more* words\nnext line\n\nend");
        let nodes = BlockBuilder::new(&src).finish();
        assert_eq!(nodes[0].block.kind_name(), "hero_image");
        assert_eq!(
            nodes[1].block,
            Block::Paragraph {
                runs: vec![
                    InlineRun::plain("and "),
                    InlineRun::italic("more"),
                    InlineRun::plain(" words next line"),
                ]
            }
        );
        assert_eq!(nodes[1].lines, Span::new(0, 2));
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn orphan_dropcap_is_text() {
        assert_eq!(
            blocks("![dropcap]"),
            vec![Block::Paragraph {
                runs: vec![InlineRun::plain("![dropcap]")]
            }]
        );
    }

    #[test]
    fn line_without_run_prefix_is_handed_back() {
        let src = LineSource::new("- a\n1. b\n> c");
        let nodes = BlockBuilder::new(&src).finish();
        let kinds: Vec<_> = nodes.iter().map(|n| n.block.kind_name()).collect();
        assert_eq!(kinds, vec!["bullet_list", "numbered_list", "block_quote"]);
        let lines: Vec<_> = nodes.iter().map(|n| n.lines).collect();
        assert_eq!(
            lines,
            vec![Span::new(0, 1), Span::new(1, 2), Span::new(2, 3)]
        );
    }

    #[test]
    fn bullet_prefixed_lines_stay_in_one_list() {
        let src = LineSource::new("- a\n- [ ] b\n* * *\n- c");
        let nodes = BlockBuilder::new(&src).finish();
        let kinds: Vec<_> = nodes.iter().map(|n| n.block.kind_name()).collect();
        assert_eq!(kinds, vec!["bullet_list"]);
        assert_eq!(nodes[0].lines, Span::new(0, 4));
    }

    #[test]
    fn node_byte_spans_follow_lines() {
        let src = LineSource::new("# T\n\nbody\n");
        let nodes = BlockBuilder::new(&src).finish();
        assert_eq!(nodes[0].span, Span::new(0, 4));
        assert_eq!(nodes[1].span, Span::new(5, 10));
    }
}
