//! # Rendering
//!
//! The parser knows nothing about presentation. Renderers implement
//! [`BlockVisitor`] and receive each block's fields in document order.
//!
//! - **`text`**: plain-text reconstruction
//! - **`html`**: standalone HTML fragment

pub mod html;
pub mod text;

use crate::parsing::{
    Document,
    blocks::{Block, CalloutKind, ChecklistItem, ColorToken, NumberedItem},
    inline::InlineRun,
};

/// Visitor over the block union.
///
/// Default implementations are empty, so you only need to override the
/// methods you care about.
#[allow(unused_variables)]
pub trait BlockVisitor {
    fn visit_header(&mut self, level: u8, text: &[InlineRun]) {}
    fn visit_paragraph(&mut self, runs: &[InlineRun]) {}
    fn visit_bullet_list(&mut self, items: &[Vec<InlineRun>]) {}
    fn visit_numbered_list(&mut self, items: &[NumberedItem]) {}
    fn visit_checklist(&mut self, items: &[ChecklistItem]) {}
    fn visit_code_block(&mut self, language: Option<&str>, code: &str) {}
    fn visit_block_quote(&mut self, text: &[InlineRun]) {}
    fn visit_callout(&mut self, kind: CalloutKind, body: &[InlineRun]) {}
    fn visit_hero_image(&mut self, image: &str, title: Option<&str>, subtitle: Option<&str>) {}
    fn visit_banner(&mut self, icon: &str, title: &str, subtitle: Option<&str>, color: ColorToken) {
    }
    fn visit_step_indicator(&mut self, current: u32, total: u32, title: &str) {}
    /// `block` is passed so the visitor can call [`Block::expandable_body`].
    fn visit_expandable_section(&mut self, title: &str, body: &str, block: &Block) {}
    fn visit_feature_card(&mut self, icon: &str, title: &str, description: &str) {}
    fn visit_pull_quote(&mut self, text: &str, author: Option<&str>) {}
    fn visit_divider(&mut self) {}
    fn visit_drop_cap(&mut self, letter: &str, rest: &[InlineRun]) {}
    fn visit_highlight_box(&mut self, title: Option<&str>, content: &str, color: ColorToken) {}
    fn visit_progress_card(&mut self, title: &str, progress: f64, description: Option<&str>) {}
    fn visit_video_embed(&mut self, url: &str, title: Option<&str>, aspect_ratio: f64) {}
    fn visit_video_thumbnail(
        &mut self,
        thumbnail_url: &str,
        video_url: &str,
        title: Option<&str>,
        duration: Option<&str>,
    ) {
    }
}

/// Dispatches one block to the matching visitor method.
pub fn accept(block: &Block, v: &mut (impl BlockVisitor + ?Sized)) {
    match block {
        Block::Header { level, text } => v.visit_header(*level, text),
        Block::Paragraph { runs } => v.visit_paragraph(runs),
        Block::BulletList { items } => v.visit_bullet_list(items),
        Block::NumberedList { items } => v.visit_numbered_list(items),
        Block::Checklist { items } => v.visit_checklist(items),
        Block::CodeBlock { language, code } => v.visit_code_block(language.as_deref(), code),
        Block::BlockQuote { text } => v.visit_block_quote(text),
        Block::Callout { kind, body } => v.visit_callout(*kind, body),
        Block::HeroImage {
            image,
            title,
            subtitle,
        } => v.visit_hero_image(image, title.as_deref(), subtitle.as_deref()),
        Block::Banner {
            icon,
            title,
            subtitle,
            color,
        } => v.visit_banner(icon, title, subtitle.as_deref(), *color),
        Block::StepIndicator {
            current,
            total,
            title,
        } => v.visit_step_indicator(*current, *total, title),
        Block::ExpandableSection { title, body } => {
            v.visit_expandable_section(title, body, block)
        }
        Block::FeatureCard {
            icon,
            title,
            description,
        } => v.visit_feature_card(icon, title, description),
        Block::PullQuote { text, author } => v.visit_pull_quote(text, author.as_deref()),
        Block::Divider => v.visit_divider(),
        Block::DropCap { letter, rest } => v.visit_drop_cap(letter, rest),
        Block::HighlightBox {
            title,
            content,
            color,
        } => v.visit_highlight_box(title.as_deref(), content, *color),
        Block::ProgressCard {
            title,
            progress,
            description,
        } => v.visit_progress_card(title, *progress, description.as_deref()),
        Block::VideoEmbed {
            url,
            title,
            aspect_ratio,
        } => v.visit_video_embed(url, title.as_deref(), *aspect_ratio),
        Block::VideoThumbnail {
            thumbnail_url,
            video_url,
            title,
            duration,
        } => v.visit_video_thumbnail(
            thumbnail_url,
            video_url,
            title.as_deref(),
            duration.as_deref(),
        ),
    }
}

/// Visits every block of `doc` in order.
pub fn walk(doc: &Document, v: &mut (impl BlockVisitor + ?Sized)) {
    for block in doc.blocks() {
        accept(block, v);
    }
}
