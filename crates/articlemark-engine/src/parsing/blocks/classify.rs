use crate::parsing::{components::TagLine, source::LineRef};

use super::kinds::{BlockQuote, BulletList, Callout, Checklist, CodeFence, Divider, Heading, NumberedList};
use super::types::CalloutKind;

/// What a single line looks like, judged without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Header { level: u8, text: &'a str },
    Divider,
    /// A well-formed `![tag](…)` line with a known tag.
    Component(TagLine<'a>),
    Callout { kind: CalloutKind, body: &'a str },
    ChecklistItem { checked: bool, text: &'a str },
    BulletItem(&'a str),
    NumberedItem { label: &'a str, text: &'a str },
    FenceOpen { language: Option<&'a str> },
    Quote(&'a str),
    /// Anything else; accumulates into a paragraph.
    Text(&'a str),
}

/// Classification of one line of the source.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub index: usize,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block dispatcher.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, lr: &'a LineRef) -> LineClass<'a> {
        LineClass {
            index: lr.index,
            kind: classify_text(lr.text()),
        }
    }
}

/// Applies the detectors in priority order to a trimmed line; the first
/// match wins.
///
/// blank → header → divider / extended component → callout → checklist →
/// bullet → numbered → code fence → blockquote → text.
pub fn classify_text(text: &str) -> LineKind<'_> {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if let Some((level, text)) = Heading::match_line(text) {
        return LineKind::Header { level, text };
    }
    if Divider::is_divider(text) {
        return LineKind::Divider;
    }
    if let Some(tag) = TagLine::parse(text) {
        return LineKind::Component(tag);
    }
    if let Some((kind, body)) = Callout::detect(text) {
        return LineKind::Callout { kind, body };
    }
    if let Some((checked, text)) = Checklist::match_line(text) {
        return LineKind::ChecklistItem { checked, text };
    }
    if let Some(text) = BulletList::match_line(text) {
        return LineKind::BulletItem(text);
    }
    if let Some((label, text)) = NumberedList::match_line(text) {
        return LineKind::NumberedItem { label, text };
    }
    if let Some(language) = CodeFence::open(text) {
        return LineKind::FenceOpen { language };
    }
    if let Some(text) = BlockQuote::strip(text) {
        return LineKind::Quote(text);
    }
    LineKind::Text(text)
}
