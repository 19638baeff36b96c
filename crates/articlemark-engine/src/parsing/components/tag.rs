/// The extended component tags of the `![tag](params)` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    Hero,
    Banner,
    Step,
    Expandable,
    Feature,
    Quote,
    DropCap,
    Highlight,
    Progress,
    Video,
    VideoThumbnail,
}

impl ComponentTag {
    pub const ALL: [ComponentTag; 11] = [
        ComponentTag::Hero,
        ComponentTag::Banner,
        ComponentTag::Step,
        ComponentTag::Expandable,
        ComponentTag::Feature,
        ComponentTag::Quote,
        ComponentTag::DropCap,
        ComponentTag::Highlight,
        ComponentTag::Progress,
        ComponentTag::Video,
        ComponentTag::VideoThumbnail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentTag::Hero => "hero",
            ComponentTag::Banner => "banner",
            ComponentTag::Step => "step",
            ComponentTag::Expandable => "expandable",
            ComponentTag::Feature => "feature",
            ComponentTag::Quote => "quote",
            ComponentTag::DropCap => "dropcap",
            ComponentTag::Highlight => "highlight",
            ComponentTag::Progress => "progress",
            ComponentTag::Video => "video",
            ComponentTag::VideoThumbnail => "video-thumbnail",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// `dropcap` is a bare marker; every other tag needs a parameter list.
    pub fn takes_params(self) -> bool {
        !matches!(self, ComponentTag::DropCap)
    }
}

/// A line of the shape `![tag](params)` with a known tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    pub tag: ComponentTag,
    /// Text between the balanced parentheses, untrimmed.
    pub params: Option<&'a str>,
    /// Anything after the closing parenthesis; see [`leftover`](super::leftover).
    pub trailing: &'a str,
}

impl<'a> TagLine<'a> {
    pub const OPEN: &'static str = "![";

    /// Tokenizes a trimmed line. Linear scan, no backtracking.
    ///
    /// Returns `None` for unknown tag names and malformed shapes (missing `]`,
    /// unbalanced parentheses, missing parameter list, parameters on a bare
    /// marker). Such lines are ordinary paragraph text.
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.strip_prefix(Self::OPEN)?;
        let name_end = rest.find(']')?;
        let tag = ComponentTag::from_name(&rest[..name_end])?;
        let after = &rest[name_end + 1..];

        let (params, trailing) = if after.starts_with('(') {
            let close = balanced_close(after)?;
            (Some(&after[1..close]), &after[close + 1..])
        } else {
            (None, after)
        };

        if tag.takes_params() {
            if params.is_none() {
                return None;
            }
        } else if params.is_some_and(|p| !p.trim().is_empty()) || !trailing.trim().is_empty() {
            return None;
        }

        Some(Self {
            tag,
            params,
            trailing,
        })
    }
}

/// Byte index of the `)` matching the `(` that starts `s`.
fn balanced_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
