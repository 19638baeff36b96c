//! UniFFI bindings for articlemark mobile readers
//!
//! Exposes parsed articles to Kotlin and Swift as plain records: the block
//! list, the table of contents and lazily parsed expandable bodies.

use articlemark_engine::{
    Block, ChecklistItem, Document, InlineRun, NumberedItem, TocItem, generate_toc, parse,
    render_html, slugify,
};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
#[derive(Debug, PartialEq, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("No block at index {index}")]
    IndexOutOfRange { index: u64 },
    #[error("Block {index} is not an expandable section")]
    NotExpandable { index: u64 },
}

// ============ Article Handle ============

struct Parsed {
    document: Document,
    toc: Vec<TocItem>,
}

impl Parsed {
    fn new(content: &str) -> Self {
        Self {
            document: parse(content),
            toc: generate_toc(content),
        }
    }
}

/// A handle to a parsed article.
#[derive(uniffi::Object)]
pub struct ArticleHandle {
    inner: Mutex<Parsed>,
}

#[uniffi::export]
impl ArticleHandle {
    /// Parse an article from its markdown text. Parsing never fails.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Self {
        Self {
            inner: Mutex::new(Parsed::new(&content)),
        }
    }

    /// Replace the article's content and re-parse it.
    pub fn reload(&self, content: String) {
        let mut parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *parsed = Parsed::new(&content);
    }

    pub fn get_blocks(&self) -> Vec<BlockDto> {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        blocks_to_dto(&parsed.document)
    }

    pub fn get_toc(&self) -> Vec<TocItemDto> {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        parsed.toc.iter().map(TocItemDto::from_engine).collect()
    }

    /// Parse the body of the expandable section at `index` on demand.
    pub fn expandable_body(&self, index: u64) -> Result<Vec<BlockDto>, FfiError> {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let block = usize::try_from(index)
            .ok()
            .and_then(|i| parsed.document.nodes().get(i))
            .map(|node| &node.block)
            .ok_or(FfiError::IndexOutOfRange { index })?;
        let body = block
            .expandable_body()
            .ok_or(FfiError::NotExpandable { index })?;
        Ok(blocks_to_dto(&body))
    }

    pub fn get_html(&self) -> String {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        render_html(&parsed.document)
    }
}

fn blocks_to_dto(document: &Document) -> Vec<BlockDto> {
    document.blocks().map(BlockDto::from_engine).collect()
}

// ============ DTOs ============

/// A span of formatted text.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct InlineRunDto {
    /// One of "plain_text", "bold", "italic", "code" or "link"
    pub style: String,
    pub text: String,
    /// Link target; set only when `style` is "link"
    pub url: Option<String>,
}

impl InlineRunDto {
    fn from_engine(run: &InlineRun) -> Self {
        let (style, url) = match run {
            InlineRun::PlainText(_) => ("plain_text", None),
            InlineRun::Bold(_) => ("bold", None),
            InlineRun::Italic(_) => ("italic", None),
            InlineRun::Code(_) => ("code", None),
            InlineRun::Link { url, .. } => ("link", Some(url.clone())),
        };
        Self {
            style: style.to_string(),
            text: run.text().to_string(),
            url,
        }
    }
}

fn runs(runs: &[InlineRun]) -> Vec<InlineRunDto> {
    runs.iter().map(InlineRunDto::from_engine).collect()
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct NumberedItemDto {
    pub label: String,
    pub text: Vec<InlineRunDto>,
}

impl NumberedItemDto {
    fn from_engine(item: &NumberedItem) -> Self {
        Self {
            label: item.label.clone(),
            text: runs(&item.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ChecklistItemDto {
    pub checked: bool,
    pub text: Vec<InlineRunDto>,
}

impl ChecklistItemDto {
    fn from_engine(item: &ChecklistItem) -> Self {
        Self {
            checked: item.checked,
            text: runs(&item.text),
        }
    }
}

/// A table-of-contents entry with the anchor id renderers use.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct TocItemDto {
    pub title: String,
    pub level: u8,
    pub slug: String,
}

impl TocItemDto {
    fn from_engine(item: &TocItem) -> Self {
        Self {
            title: item.title.clone(),
            level: item.level,
            slug: item.slug.clone(),
        }
    }
}

/// One block of an article. Callout kinds and color tokens are passed as
/// their lowercase names.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum BlockDto {
    Header {
        level: u8,
        text: Vec<InlineRunDto>,
    },
    Paragraph {
        runs: Vec<InlineRunDto>,
    },
    BulletList {
        items: Vec<Vec<InlineRunDto>>,
    },
    NumberedList {
        items: Vec<NumberedItemDto>,
    },
    Checklist {
        items: Vec<ChecklistItemDto>,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    BlockQuote {
        text: Vec<InlineRunDto>,
    },
    Callout {
        kind: String,
        body: Vec<InlineRunDto>,
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
        color: String,
    },
    StepIndicator {
        current: u32,
        total: u32,
        title: String,
    },
    /// The body stays unparsed; fetch it with `ArticleHandle::expandable_body`.
    ExpandableSection {
        title: String,
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
        rest: Vec<InlineRunDto>,
    },
    HighlightBox {
        title: Option<String>,
        content: String,
        color: String,
    },
    ProgressCard {
        title: String,
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

impl BlockDto {
    fn from_engine(block: &Block) -> Self {
        match block {
            Block::Header { level, text } => Self::Header {
                level: *level,
                text: runs(text),
            },
            Block::Paragraph { runs: r } => Self::Paragraph { runs: runs(r) },
            Block::BulletList { items } => Self::BulletList {
                items: items.iter().map(|i| runs(i)).collect(),
            },
            Block::NumberedList { items } => Self::NumberedList {
                items: items.iter().map(NumberedItemDto::from_engine).collect(),
            },
            Block::Checklist { items } => Self::Checklist {
                items: items.iter().map(ChecklistItemDto::from_engine).collect(),
            },
            Block::CodeBlock { language, code } => Self::CodeBlock {
                language: language.clone(),
                code: code.clone(),
            },
            Block::BlockQuote { text } => Self::BlockQuote { text: runs(text) },
            Block::Callout { kind, body } => Self::Callout {
                kind: kind.label().to_lowercase(),
                body: runs(body),
            },
            Block::HeroImage {
                image,
                title,
                subtitle,
            } => Self::HeroImage {
                image: image.clone(),
                title: title.clone(),
                subtitle: subtitle.clone(),
            },
            Block::Banner {
                icon,
                title,
                subtitle,
                color,
            } => Self::Banner {
                icon: icon.clone(),
                title: title.clone(),
                subtitle: subtitle.clone(),
                color: color.name().to_string(),
            },
            Block::StepIndicator {
                current,
                total,
                title,
            } => Self::StepIndicator {
                current: *current,
                total: *total,
                title: title.clone(),
            },
            Block::ExpandableSection { title, .. } => Self::ExpandableSection {
                title: title.clone(),
            },
            Block::FeatureCard {
                icon,
                title,
                description,
            } => Self::FeatureCard {
                icon: icon.clone(),
                title: title.clone(),
                description: description.clone(),
            },
            Block::PullQuote { text, author } => Self::PullQuote {
                text: text.clone(),
                author: author.clone(),
            },
            Block::Divider => Self::Divider,
            Block::DropCap { letter, rest } => Self::DropCap {
                letter: letter.clone(),
                rest: runs(rest),
            },
            Block::HighlightBox {
                title,
                content,
                color,
            } => Self::HighlightBox {
                title: title.clone(),
                content: content.clone(),
                color: color.name().to_string(),
            },
            Block::ProgressCard {
                title,
                progress,
                description,
            } => Self::ProgressCard {
                title: title.clone(),
                progress: *progress,
                description: description.clone(),
            },
            Block::VideoEmbed {
                url,
                title,
                aspect_ratio,
            } => Self::VideoEmbed {
                url: url.clone(),
                title: title.clone(),
                aspect_ratio: *aspect_ratio,
            },
            Block::VideoThumbnail {
                thumbnail_url,
                video_url,
                title,
                duration,
            } => Self::VideoThumbnail {
                thumbnail_url: thumbnail_url.clone(),
                video_url: video_url.clone(),
                title: title.clone(),
                duration: duration.clone(),
            },
        }
    }
}

// ============ Standalone Functions ============

/// The anchor id a renderer gives a header with this title.
#[uniffi::export]
pub fn heading_slug(title: String) -> String {
    slugify(&title)
}
