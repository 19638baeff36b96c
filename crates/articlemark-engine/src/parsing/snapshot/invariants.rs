use crate::parsing::{Document, blocks::Block, source::LineSource};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every block's line range is non-empty and within the source
/// - Line ranges are in source order and do not overlap, except that a
///   paragraph may open on the last line of the block before it (text left
///   over after a component on that line)
/// - Each byte span is exactly the bytes of its line range
/// - Every line outside all ranges is blank
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &LineSource, doc: &Document) {
    let n = src.len();
    let mut covered_to = 0usize;
    for node in doc.nodes() {
        let lines = node.lines;
        assert!(
            !lines.is_empty() && lines.end <= n,
            "{} line range out of bounds: {:?} (line count: {})",
            node.block.kind_name(),
            lines,
            n
        );
        let shares_line = matches!(node.block, Block::Paragraph { .. })
            && covered_to > 0
            && lines.start == covered_to - 1;
        assert!(
            lines.start >= covered_to || shares_line,
            "{} line range {:?} overlaps or precedes previous block ending at {}",
            node.block.kind_name(),
            lines,
            covered_to
        );
        assert_eq!(
            node.span,
            src.byte_span(lines),
            "byte span does not match line range {lines:?}"
        );
        for skipped in covered_to..lines.start {
            assert_blank(src, skipped);
        }
        covered_to = lines.end;
    }
    for skipped in covered_to..n {
        assert_blank(src, skipped);
    }
}

fn assert_blank(src: &LineSource, index: usize) {
    if let Some(line) = src.get(index) {
        assert!(
            line.is_blank(),
            "line {} was dropped by every block: {:?}",
            index,
            line.raw
        );
    }
}
