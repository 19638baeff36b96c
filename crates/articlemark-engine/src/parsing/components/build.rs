//! Builders turning a tokenized tag line into a component block.

use crate::parsing::{
    blocks::{
        extract::{self, Extracted},
        types::{Block, ColorToken},
    },
    inline::parse_inline,
    source::{LineSource, Span},
};

use super::{
    params::{Params, SplitRule},
    tag::{ComponentTag, TagLine},
};

pub const HERO_IMAGE: &str = "placeholder";
pub const DEFAULT_ICON: &str = "star.fill";
pub const BANNER_TITLE: &str = "Banner";
pub const STEP_CURRENT: u32 = 1;
pub const STEP_TOTAL: u32 = 3;
pub const STEP_TITLE: &str = "Step";
pub const FEATURE_TITLE: &str = "Feature";
pub const PROGRESS_TITLE: &str = "Progress";
pub const VIDEO_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Builds the block for the tag line at `index`.
///
/// Returns `None` when the component cannot be formed (a drop cap with no
/// following text); the dispatcher then treats the line as paragraph text.
pub fn build(tag: &TagLine<'_>, src: &LineSource, index: usize) -> Option<Extracted<Block>> {
    let raw = tag.params.unwrap_or("");
    let block = match tag.tag {
        ComponentTag::Expandable => return Some(expandable(raw, tag.trailing, src, index)),
        ComponentTag::DropCap => return drop_cap(src, index),
        ComponentTag::Hero => hero(raw),
        ComponentTag::Banner => banner(raw),
        ComponentTag::Step => step(raw),
        ComponentTag::Feature => feature(raw),
        ComponentTag::Quote => pull_quote(raw),
        ComponentTag::Highlight => highlight(raw),
        ComponentTag::Progress => progress(raw),
        ComponentTag::Video => video(raw),
        ComponentTag::VideoThumbnail => video_thumbnail(raw),
    };
    Some(single_line(block, index))
}

/// Text after the closing parenthesis that the built block does not hold.
///
/// An expandable section folds it into its title; for every other tag the
/// dispatcher starts a paragraph with it.
pub fn leftover<'a>(tag: &TagLine<'a>) -> Option<&'a str> {
    let rest = tag.trailing.trim();
    (tag.tag != ComponentTag::Expandable && !rest.is_empty()).then_some(rest)
}

fn single_line(block: Block, index: usize) -> Extracted<Block> {
    Extracted {
        value: block,
        lines: Span::new(index, index + 1),
        next: index + 1,
    }
}

fn hero(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Every);
    Block::HeroImage {
        image: p.text_or(0, HERO_IMAGE),
        title: p.optional(1),
        subtitle: p.optional(2),
    }
}

fn banner(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Every);
    Block::Banner {
        icon: p.text_or(0, DEFAULT_ICON),
        title: p.text_or(1, BANNER_TITLE),
        subtitle: p.nullable(2),
        color: p.get(3).map(ColorToken::from_name).unwrap_or_default(),
    }
}

fn step(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Every);
    Block::StepIndicator {
        current: p.parse_or(0, STEP_CURRENT),
        total: p.parse_or(1, STEP_TOTAL),
        title: p.text_or(2, STEP_TITLE),
    }
}

fn feature(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Every);
    Block::FeatureCard {
        icon: p.text_or(0, DEFAULT_ICON),
        title: p.text_or(1, FEATURE_TITLE),
        description: p.text_or(2, ""),
    }
}

/// The author follows the last comma so the quote itself may contain commas.
fn pull_quote(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::LastComma);
    Block::PullQuote {
        text: p.text_or(0, ""),
        author: p.optional(1),
    }
}

/// `title, content[, color]`. The content keeps its commas; a trailing field
/// is only taken as the color when it names one.
fn highlight(raw: &str) -> Block {
    let head = Params::split(raw, SplitRule::Bounded(2));
    let (content, color) = match head.get(1) {
        Some(rest) => split_trailing(rest, ColorToken::parse),
        None => (None, None),
    };
    Block::HighlightBox {
        title: head.nullable(0),
        content: content.unwrap_or_default(),
        color: color.unwrap_or_default(),
    }
}

fn progress(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Every);
    Block::ProgressCard {
        title: p.text_or(0, PROGRESS_TITLE),
        progress: p.get(1).map_or(0.0, parse_percent),
        description: p.optional(2),
    }
}

/// `url[, title][, ratio]`. The title keeps its commas; a trailing field is
/// only taken as the ratio when it is a positive number.
fn video(raw: &str) -> Block {
    let head = Params::split(raw, SplitRule::Bounded(2));
    let (title, ratio) = match head.get(1) {
        Some(rest) => split_trailing(rest, parse_ratio),
        None => (None, None),
    };
    Block::VideoEmbed {
        url: head.text_or(0, ""),
        title: title.filter(|t| t != super::params::NULL_SENTINEL),
        aspect_ratio: ratio.unwrap_or(VIDEO_ASPECT_RATIO),
    }
}

fn video_thumbnail(raw: &str) -> Block {
    let p = Params::split(raw, SplitRule::Bounded(4));
    Block::VideoThumbnail {
        thumbnail_url: p.text_or(0, ""),
        video_url: p.text_or(1, ""),
        title: p.nullable(2),
        duration: p.nullable(3),
    }
}

/// The title is the whole parameter string; the body is every following
/// non-blank line.
fn expandable(raw: &str, trailing: &str, src: &LineSource, index: usize) -> Extracted<Block> {
    let title = match trailing.trim() {
        "" => raw.trim().to_string(),
        rest => format!("{} {rest}", raw.trim()).trim_start().to_string(),
    };
    let body = extract::expandable_body(src, index + 1);
    Extracted {
        value: Block::ExpandableSection {
            title,
            body: body.value,
        },
        lines: Span::new(index, body.lines.end),
        next: body.next,
    }
}

/// The marker consumes the next line whole: its first character is the
/// letter, the rest is formatted text.
fn drop_cap(src: &LineSource, index: usize) -> Option<Extracted<Block>> {
    let next = src.get(index + 1).filter(|l| !l.is_blank())?;
    let text = next.text();
    let mut chars = text.chars();
    let letter = chars.next()?.to_string();
    Some(Extracted {
        value: Block::DropCap {
            letter,
            rest: parse_inline(chars.as_str()),
        },
        lines: Span::new(index, index + 2),
        next: index + 2,
    })
}

/// Splits `rest` at its last comma when `recognize` accepts the trailing
/// field; otherwise the whole of `rest` is the leading value.
fn split_trailing<T>(
    rest: &str,
    recognize: impl Fn(&str) -> Option<T>,
) -> (Option<String>, Option<T>) {
    let lead = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string);
    match rest.rsplit_once(',') {
        Some((head, tail)) => match recognize(tail.trim()) {
            Some(value) => (lead(head), Some(value)),
            None => (lead(rest), None),
        },
        None => match recognize(rest.trim()) {
            Some(value) => (None, Some(value)),
            None => (lead(rest), None),
        },
    }
}

fn parse_percent(field: &str) -> f64 {
    let number = field.strip_suffix('%').unwrap_or(field).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => (v / 100.0).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

fn parse_ratio(field: &str) -> Option<f64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build_line(text: &str) -> Block {
        let src = LineSource::new(text);
        let tag = TagLine::parse(src.get(0).unwrap().text()).unwrap();
        build(&tag, &src, 0).unwrap().value
    }

    #[test]
    fn quote_author_after_last_comma() {
        assert_eq!(
            build_line("![quote](Stay hungry, stay foolish, Steve Jobs)"),
            Block::PullQuote {
                text: "Stay hungry, stay foolish".into(),
                author: Some("Steve Jobs".into()),
            }
        );
    }

    #[test]
    fn quote_without_author() {
        assert_eq!(
            build_line("![quote](Just words)"),
            Block::PullQuote {
                text: "Just words".into(),
                author: None,
            }
        );
    }

    #[test]
    fn highlight_null_title_and_color() {
        assert_eq!(
            build_line("![highlight](null, Some content, green)"),
            Block::HighlightBox {
                title: None,
                content: "Some content".into(),
                color: ColorToken::Green,
            }
        );
    }

    #[test]
    fn highlight_content_keeps_commas_without_color() {
        assert_eq!(
            build_line("![highlight](Note, one, two, three)"),
            Block::HighlightBox {
                title: Some("Note".into()),
                content: "one, two, three".into(),
                color: ColorToken::Blue,
            }
        );
    }

    #[test]
    fn hero_defaults() {
        assert_eq!(
            build_line("![hero]()"),
            Block::HeroImage {
                image: HERO_IMAGE.into(),
                title: None,
                subtitle: None,
            }
        );
    }

    #[test]
    fn banner_fields_and_null_subtitle() {
        assert_eq!(
            build_line("![banner](bolt.fill, Go, null, Purple)"),
            Block::Banner {
                icon: "bolt.fill".into(),
                title: "Go".into(),
                subtitle: None,
                color: ColorToken::Purple,
            }
        );
    }

    #[test]
    fn step_falls_back_on_bad_numbers() {
        assert_eq!(
            build_line("![step](two, 5, Warm up)"),
            Block::StepIndicator {
                current: STEP_CURRENT,
                total: 5,
                title: "Warm up".into(),
            }
        );
    }

    #[test]
    fn feature_defaults_missing_fields() {
        assert_eq!(
            build_line("![feature](bell)"),
            Block::FeatureCard {
                icon: "bell".into(),
                title: FEATURE_TITLE.into(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn progress_percent_is_clamped() {
        let progress_of = |line: &str| match build_line(line) {
            Block::ProgressCard { progress, .. } => progress,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(progress_of("![progress](Week 1, 75, Keep going)"), 0.75);
        assert_eq!(progress_of("![progress](Week 1, 40%)"), 0.4);
        assert_eq!(progress_of("![progress](Week 1, 250)"), 1.0);
        assert_eq!(progress_of("![progress](Week 1, lots)"), 0.0);
    }

    #[test]
    fn video_ratio_and_title() {
        assert_eq!(
            build_line("![video](https://v.example/1, Intro, part one, 1.5)"),
            Block::VideoEmbed {
                url: "https://v.example/1".into(),
                title: Some("Intro, part one".into()),
                aspect_ratio: 1.5,
            }
        );
        assert_eq!(
            build_line("![video](https://v.example/1, null)"),
            Block::VideoEmbed {
                url: "https://v.example/1".into(),
                title: None,
                aspect_ratio: VIDEO_ASPECT_RATIO,
            }
        );
    }

    #[test]
    fn video_thumbnail_keeps_commas_in_duration() {
        assert_eq!(
            build_line("![video-thumbnail](t.jpg, v.mp4, null, 1:02, extra)"),
            Block::VideoThumbnail {
                thumbnail_url: "t.jpg".into(),
                video_url: "v.mp4".into(),
                title: None,
                duration: Some("1:02, extra".into()),
            }
        );
    }

    #[test]
    fn expandable_folds_trailing_text_into_title() {
        let src = LineSource::new("![expandable](More) details\nbody");
        let tag = TagLine::parse(src.get(0).unwrap().text()).unwrap();
        let ex = build(&tag, &src, 0).unwrap();
        assert_eq!(
            ex.value,
            Block::ExpandableSection {
                title: "More details".into(),
                body: "body".into(),
            }
        );
        assert_eq!(leftover(&tag), None);
    }

    #[test]
    fn leftover_is_trimmed_trailing_text() {
        let tag = TagLine::parse("![hero](img, T)  and more words ").unwrap();
        assert_eq!(leftover(&tag), Some("and more words"));
        let tag = TagLine::parse("![hero](img, T)").unwrap();
        assert_eq!(leftover(&tag), None);
    }

    #[test]
    fn expandable_takes_body_until_blank() {
        let src = LineSource::new("![expandable](More, please)\n- one\n- two\n\nafter");
        let tag = TagLine::parse(src.get(0).unwrap().text()).unwrap();
        let ex = build(&tag, &src, 0).unwrap();
        assert_eq!(
            ex.value,
            Block::ExpandableSection {
                title: "More, please".into(),
                body: "- one\n- two".into(),
            }
        );
        assert_eq!(ex.lines, Span::new(0, 3));
        assert_eq!(ex.next, 3);
    }

    #[test]
    fn drop_cap_splits_first_letter() {
        let src = LineSource::new("![dropcap]\nOnce upon a **time**");
        let tag = TagLine::parse(src.get(0).unwrap().text()).unwrap();
        let ex = build(&tag, &src, 0).unwrap();
        assert_eq!(
            ex.value,
            Block::DropCap {
                letter: "O".into(),
                rest: vec![
                    crate::parsing::inline::InlineRun::plain("nce upon a "),
                    crate::parsing::inline::InlineRun::bold("time"),
                ],
            }
        );
        assert_eq!(ex.next, 2);
    }

    #[test]
    fn drop_cap_needs_following_text() {
        let src = LineSource::new("![dropcap]\n\nlater");
        let tag = TagLine::parse(src.get(0).unwrap().text()).unwrap();
        assert!(build(&tag, &src, 0).is_none());
    }
}
