use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineRun,
};

/// Outcome of trying to read a formatted run at the cursor.
enum Scan {
    /// A complete run was read and the cursor moved past its closer.
    Matched(InlineRun),
    /// An opener was found with no closer before end of line.
    Unclosed,
    /// Delimiters with nothing between them; this many bytes stay plain text.
    Empty(usize),
    /// The byte at the cursor does not start a run.
    NoMatch,
}

/// Parses a line of text into a sequence of [`InlineRun`]s.
///
/// Single left-to-right pass with no lookback. Constructs are tried in this
/// order at each position: `**bold**`, `*italic*` / `_italic_`, `` `code` ``,
/// `[text](url)`.
///
/// # Unmatched delimiters
/// When an opener has no closer before end of line, the opener and all
/// remaining text are emitted verbatim as `PlainText`. Nothing is dropped:
/// concatenating plain text with the delimiters of formatted runs gives back
/// the input.
pub fn parse_inline(s: &str) -> Vec<InlineRun> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<InlineRun>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineRun::PlainText(s[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        match scan_at(&mut cur) {
            Scan::Matched(run) => {
                flush_text(&mut out, s, text_start, start);
                out.push(run);
                text_start = cur.pos();
            }
            Scan::Unclosed => cur.skip_to_end(),
            Scan::Empty(len) => cur.bump_n(len),
            Scan::NoMatch => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

fn scan_at(cur: &mut Cursor<'_>) -> Scan {
    match cur.peek() {
        Some(_) if cur.starts_with(Emphasis::STRONG) => scan_bold(cur),
        Some(b) if Emphasis::is_italic_delim(b) => scan_italic(cur, b),
        Some(CodeSpan::TICK) => scan_code_span(cur),
        Some(Link::OPEN) => scan_link(cur),
        _ => Scan::NoMatch,
    }
}

fn scan_bold(cur: &mut Cursor<'_>) -> Scan {
    let inner_start = cur.pos() + Emphasis::STRONG.len();
    let Some(close) = cur.find(inner_start, Emphasis::STRONG) else {
        return Scan::Unclosed;
    };
    if close == inner_start {
        return Scan::Empty(2 * Emphasis::STRONG.len());
    }
    let run = InlineRun::Bold(cur.slice(inner_start, close).to_string());
    cur.bump_n(close + Emphasis::STRONG.len() - cur.pos());
    Scan::Matched(run)
}

fn scan_italic(cur: &mut Cursor<'_>, delim: u8) -> Scan {
    let inner_start = cur.pos() + 1;
    let Some(close) = cur.find(inner_start, &[delim]) else {
        return Scan::Unclosed;
    };
    if close == inner_start {
        return Scan::Empty(2);
    }
    let run = InlineRun::Italic(cur.slice(inner_start, close).to_string());
    cur.bump_n(close + 1 - cur.pos());
    Scan::Matched(run)
}

fn scan_code_span(cur: &mut Cursor<'_>) -> Scan {
    let inner_start = cur.pos() + 1;
    let Some(close) = cur.find(inner_start, &[CodeSpan::TICK]) else {
        return Scan::Unclosed;
    };
    if close == inner_start {
        return Scan::Empty(2);
    }
    let run = InlineRun::Code(cur.slice(inner_start, close).to_string());
    cur.bump_n(close + 1 - cur.pos());
    Scan::Matched(run)
}

/// `[text]` without a following `(` is not a link and is left as text.
fn scan_link(cur: &mut Cursor<'_>) -> Scan {
    let text_start = cur.pos() + 1;
    let Some(text_end) = cur.find(text_start, &[Link::TEXT_CLOSE]) else {
        return Scan::Unclosed;
    };
    if cur.s.as_bytes().get(text_end + 1) != Some(&Link::URL_OPEN) {
        return Scan::NoMatch;
    }
    let url_start = text_end + 2;
    let Some(url_end) = cur.find(url_start, &[Link::URL_CLOSE]) else {
        return Scan::Unclosed;
    };
    let run = InlineRun::Link {
        text: cur.slice(text_start, text_end).to_string(),
        url: cur.slice(url_start, url_end).to_string(),
    };
    cur.bump_n(url_end + 1 - cur.pos());
    Scan::Matched(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a __ b")]
    #[case("empty ** bold")]
    #[case("tick `` pair")]
    #[case("****")]
    fn empty_spans_stay_plain(#[case] line: &str) {
        assert_eq!(parse_inline(line), vec![InlineRun::plain(line)]);
    }

    #[test]
    fn empty_span_does_not_pair_with_later_delimiter() {
        assert_eq!(
            parse_inline("a __ b _c_"),
            vec![InlineRun::plain("a __ b "), InlineRun::italic("c")]
        );
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![InlineRun::plain("hello world")]);
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_then_italic() {
        assert_eq!(
            parse_inline("**bold** and *italic*"),
            vec![
                InlineRun::bold("bold"),
                InlineRun::plain(" and "),
                InlineRun::italic("italic"),
            ]
        );
    }

    #[test]
    fn underscore_italic() {
        assert_eq!(
            parse_inline("an _aside_ here"),
            vec![
                InlineRun::plain("an "),
                InlineRun::italic("aside"),
                InlineRun::plain(" here"),
            ]
        );
    }

    #[test]
    fn code_span_is_raw() {
        assert_eq!(
            parse_inline("run `**not bold**` now"),
            vec![
                InlineRun::plain("run "),
                InlineRun::code("**not bold**"),
                InlineRun::plain(" now"),
            ]
        );
    }

    #[test]
    fn link_keeps_text_and_url() {
        assert_eq!(
            parse_inline("visit [our site](https://growth.app)."),
            vec![
                InlineRun::plain("visit "),
                InlineRun::link("our site", "https://growth.app"),
                InlineRun::plain("."),
            ]
        );
    }

    #[test]
    fn bracket_without_url_is_text() {
        assert_eq!(
            parse_inline("[note] **b**"),
            vec![InlineRun::plain("[note] "), InlineRun::bold("b")]
        );
    }

    #[test]
    fn adjacent_runs_have_no_empty_plain_between() {
        assert_eq!(
            parse_inline("**a***b*"),
            vec![InlineRun::bold("a"), InlineRun::italic("b")]
        );
    }

    #[test]
    fn multibyte_text_around_runs() {
        assert_eq!(
            parse_inline("café **crème** 🥐"),
            vec![
                InlineRun::plain("café "),
                InlineRun::bold("crème"),
                InlineRun::plain(" 🥐"),
            ]
        );
    }

    #[rstest]
    #[case("*no close")]
    #[case("**never closed")]
    #[case("_dangling")]
    #[case("`unclosed code")]
    #[case("[text without end")]
    #[case("[text](no close paren")]
    #[case("trailing star *")]
    fn unmatched_delimiter_is_literal(#[case] input: &str) {
        let runs = parse_inline(input);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], InlineRun::plain(input));
    }

    #[test]
    fn unmatched_opener_swallows_rest_of_line() {
        assert_eq!(
            parse_inline("ok **bold** then *open `code`"),
            vec![
                InlineRun::plain("ok "),
                InlineRun::bold("bold"),
                InlineRun::plain(" then *open `code`"),
            ]
        );
    }

    #[test]
    fn unmatched_bold_does_not_fall_back_to_italic() {
        assert_eq!(parse_inline("**a*"), vec![InlineRun::plain("**a*")]);
    }
}
