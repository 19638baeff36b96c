use xi_rope::Rope;

use super::span::Span;

/// A single line of the source with its position.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Zero-based line index.
    pub index: usize,
    /// Byte span of this line in the source (includes newline if present).
    pub span: Span,
    /// The line without its line terminator. Leading and trailing whitespace
    /// is kept so code blocks can reproduce it exactly.
    pub raw: String,
}

impl LineRef {
    /// The view used for classification: surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.raw.trim()
    }

    /// Returns true if the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so spans stay exact; the
/// terminator (`\n` or `\r\n`) is then stripped from `raw`.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            index,
            span: Span { start, end: offset },
            raw: line.trim_end_matches(['\n', '\r']).to_string(),
        }
    })
}

/// The indexed sequence of lines a document is parsed from.
///
/// Empty input yields zero lines. A trailing newline does not produce an
/// extra empty line.
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    lines: Vec<LineRef>,
}

impl LineSource {
    pub fn new(text: &str) -> Self {
        Self::from_rope(&Rope::from(text))
    }

    pub fn from_rope(rope: &Rope) -> Self {
        Self {
            lines: lines_with_spans(rope).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineRef> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[LineRef] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineRef> {
        self.lines.iter()
    }

    /// Converts a range of line indices into the byte span it covers.
    ///
    /// An empty or out-of-range line span maps to an empty byte span.
    pub fn byte_span(&self, lines: Span) -> Span {
        let first = self.lines.get(lines.start);
        let last = lines
            .end
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .filter(|_| !lines.is_empty());
        match (first, last) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::default(),
        }
    }
}
