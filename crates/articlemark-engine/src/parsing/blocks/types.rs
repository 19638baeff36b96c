use serde::Serialize;

use crate::parsing::{inline::InlineRun, source::Span};

/// One semantic unit of a parsed document.
///
/// Prose-holding variants carry inline-formatted text; component variants
/// carry the parameters of their `![tag](…)` line with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        /// 1, 2 or 3.
        level: u8,
        text: Vec<InlineRun>,
    },
    Paragraph {
        runs: Vec<InlineRun>,
    },
    BulletList {
        items: Vec<Vec<InlineRun>>,
    },
    NumberedList {
        items: Vec<NumberedItem>,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    CodeBlock {
        language: Option<String>,
        /// Verbatim lines between the fences, joined with `\n`.
        code: String,
    },
    BlockQuote {
        text: Vec<InlineRun>,
    },
    Callout {
        kind: CalloutKind,
        body: Vec<InlineRun>,
    },
    HeroImage {
        image: String,
        title: Option<String>,
        subtitle: Option<String>,
    },
    Banner {
        icon: String,
        title: String,
        subtitle: Option<String>,
        color: ColorToken,
    },
    StepIndicator {
        current: u32,
        total: u32,
        title: String,
    },
    ExpandableSection {
        title: String,
        /// Unparsed body lines joined with `\n`; see [`Block::expandable_body`].
        body: String,
    },
    FeatureCard {
        icon: String,
        title: String,
        description: String,
    },
    PullQuote {
        text: String,
        author: Option<String>,
    },
    Divider,
    DropCap {
        letter: String,
        rest: Vec<InlineRun>,
    },
    HighlightBox {
        title: Option<String>,
        content: String,
        color: ColorToken,
    },
    ProgressCard {
        title: String,
        /// Fraction in `[0, 1]`.
        progress: f64,
        description: Option<String>,
    },
    VideoEmbed {
        url: String,
        title: Option<String>,
        aspect_ratio: f64,
    },
    VideoThumbnail {
        thumbnail_url: String,
        video_url: String,
        title: Option<String>,
        duration: Option<String>,
    },
}

impl Block {
    /// Parses the body of an `ExpandableSection` as its own document.
    ///
    /// Returns `None` for every other variant.
    pub fn expandable_body(&self) -> Option<crate::parsing::Document> {
        match self {
            Block::ExpandableSection { body, .. } => Some(crate::parsing::parse(body)),
            _ => None,
        }
    }

    /// Short, stable name of the variant (used by snapshots and renderers).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList { .. } => "bullet_list",
            Block::NumberedList { .. } => "numbered_list",
            Block::Checklist { .. } => "checklist",
            Block::CodeBlock { .. } => "code_block",
            Block::BlockQuote { .. } => "block_quote",
            Block::Callout { .. } => "callout",
            Block::HeroImage { .. } => "hero_image",
            Block::Banner { .. } => "banner",
            Block::StepIndicator { .. } => "step_indicator",
            Block::ExpandableSection { .. } => "expandable_section",
            Block::FeatureCard { .. } => "feature_card",
            Block::PullQuote { .. } => "pull_quote",
            Block::Divider => "divider",
            Block::DropCap { .. } => "drop_cap",
            Block::HighlightBox { .. } => "highlight_box",
            Block::ProgressCard { .. } => "progress_card",
            Block::VideoEmbed { .. } => "video_embed",
            Block::VideoThumbnail { .. } => "video_thumbnail",
        }
    }
}

/// An item of a numbered list: the digits before the `.` and the item text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedItem {
    pub label: String,
    pub text: Vec<InlineRun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub text: Vec<InlineRun>,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Tip,
    Warning,
    Info,
    Success,
    Note,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 5] = [
        CalloutKind::Tip,
        CalloutKind::Warning,
        CalloutKind::Info,
        CalloutKind::Success,
        CalloutKind::Note,
    ];

    /// The label as written in `**Label**:` form.
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Tip => "Tip",
            CalloutKind::Warning => "Warning",
            CalloutKind::Info => "Info",
            CalloutKind::Success => "Success",
            CalloutKind::Note => "Note",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(label))
    }
}

/// Named accent color of banners and highlight boxes.
///
/// The renderer decides what each token looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl ColorToken {
    /// Case-insensitive lookup; `None` for names outside the palette.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(ColorToken::Blue),
            "green" => Some(ColorToken::Green),
            "red" => Some(ColorToken::Red),
            "yellow" => Some(ColorToken::Yellow),
            "purple" => Some(ColorToken::Purple),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse) but unknown names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Yellow => "yellow",
            ColorToken::Purple => "purple",
        }
    }
}

/// A block together with the part of the source it was recognized from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    /// Half-open range of line indices. Blank lines that merely terminated the
    /// block are not included.
    pub lines: Span,
    /// Byte span of those lines in the source.
    pub span: Span,
}
