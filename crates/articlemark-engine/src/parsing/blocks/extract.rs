//! Contiguous-run extractors.
//!
//! Each extractor starts at the dispatcher's cursor, consumes lines while they
//! match, and reports the value, the recognized line range and where the
//! cursor goes next. A terminating blank line is consumed but is not part of
//! the recognized range; a non-matching line is left for the dispatcher.
//!
//! Continuation only asks whether a line carries the run's own prefix. A line
//! such as `- [ ] x` or `* * *` continues a bullet run even though the
//! dispatcher would classify it differently on its own.

use crate::parsing::{
    inline::{InlineRun, parse_inline},
    source::{LineSource, Span},
};

use super::{
    kinds::{BlockQuote, BulletList, Checklist, CodeFence, NumberedList},
    types::{ChecklistItem, NumberedItem},
};

/// The result of consuming lines from the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<T> {
    pub value: T,
    /// Lines the value was built from.
    pub lines: Span,
    /// Cursor position after extraction.
    pub next: usize,
}

impl<T> Extracted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        Extracted {
            value: f(self.value),
            lines: self.lines,
            next: self.next,
        }
    }
}

/// Consumes lines while `matcher` accepts their trimmed text.
///
/// Stops at the first blank line (consuming it) or the first line the matcher
/// rejects (not consuming it). Never backtracks.
fn contiguous_run<'a, T>(
    src: &'a LineSource,
    start: usize,
    mut matcher: impl FnMut(&'a str) -> Option<T>,
) -> Extracted<Vec<T>> {
    let mut items = vec![];
    let mut i = start;
    while let Some(line) = src.get(i) {
        if line.is_blank() {
            return Extracted {
                value: items,
                lines: Span::new(start, i),
                next: i + 1,
            };
        }
        match matcher(line.text()) {
            Some(item) => {
                items.push(item);
                i += 1;
            }
            None => break,
        }
    }
    Extracted {
        value: items,
        lines: Span::new(start, i),
        next: i,
    }
}

pub fn checklist(src: &LineSource, start: usize) -> Extracted<Vec<ChecklistItem>> {
    contiguous_run(src, start, |line| {
        Checklist::match_line(line).map(|(checked, text)| ChecklistItem {
            text: parse_inline(text),
            checked,
        })
    })
}

pub fn bullet_list(src: &LineSource, start: usize) -> Extracted<Vec<Vec<InlineRun>>> {
    contiguous_run(src, start, |line| BulletList::match_line(line).map(parse_inline))
}

pub fn numbered_list(src: &LineSource, start: usize) -> Extracted<Vec<NumberedItem>> {
    contiguous_run(src, start, |line| {
        NumberedList::match_line(line).map(|(label, text)| NumberedItem {
            label: label.to_string(),
            text: parse_inline(text),
        })
    })
}

/// Quoted lines are joined with single spaces into one formatted text.
pub fn block_quote(src: &LineSource, start: usize) -> Extracted<Vec<InlineRun>> {
    contiguous_run(src, start, BlockQuote::strip)
    .map(|parts| {
        let joined = parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        parse_inline(&joined)
    })
}

/// Extracts a fenced code block whose opening fence is at `start`.
///
/// Blank lines are part of the code. Runs through the closing fence or to
/// end of input when the fence is never closed.
pub fn code_block(src: &LineSource, start: usize) -> Extracted<(Option<String>, String)> {
    let language = src
        .get(start)
        .and_then(|l| CodeFence::open(l.text()))
        .flatten()
        .map(str::to_string);

    let mut code_lines = vec![];
    let mut i = start + 1;
    while let Some(line) = src.get(i) {
        if CodeFence::closes(line.text()) {
            return Extracted {
                value: (language, code_lines.join("\n")),
                lines: Span::new(start, i + 1),
                next: i + 1,
            };
        }
        code_lines.push(line.raw.as_str());
        i += 1;
    }

    log::debug!("code fence opened on line {} is never closed", start + 1);
    Extracted {
        value: (language, code_lines.join("\n")),
        lines: Span::new(start, i),
        next: i,
    }
}

/// Extracts the body of an expandable section starting at `start`: every
/// line up to (not including) the next blank line, kept raw.
pub fn expandable_body(src: &LineSource, start: usize) -> Extracted<String> {
    let mut body = vec![];
    let mut i = start;
    while let Some(line) = src.get(i) {
        if line.is_blank() {
            break;
        }
        body.push(line.raw.as_str());
        i += 1;
    }
    Extracted {
        value: body.join("\n"),
        lines: Span::new(start, i),
        next: i,
    }
}
