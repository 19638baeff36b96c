use crate::parsing::{
    Document,
    blocks::{Block, CalloutKind, ChecklistItem, ColorToken, NumberedItem},
    inline::InlineRun,
};

use super::{BlockVisitor, walk};

/// Plain-text rendering: inline runs concatenated without delimiters, one
/// block per paragraph of output.
pub fn render_text(doc: &Document) -> String {
    let mut r = TextRenderer::default();
    walk(doc, &mut r);
    r.finish()
}

#[derive(Debug, Default)]
pub struct TextRenderer {
    blocks: Vec<String>,
}

impl TextRenderer {
    pub fn finish(self) -> String {
        self.blocks.join("\n\n")
    }

    fn push(&mut self, text: String) {
        self.blocks.push(text);
    }
}

fn plain(runs: &[InlineRun]) -> String {
    InlineRun::plain_text(runs)
}

fn with_optional(head: &str, tail: Option<&str>, sep: &str) -> String {
    match tail {
        Some(t) => format!("{head}{sep}{t}"),
        None => head.to_string(),
    }
}

impl BlockVisitor for TextRenderer {
    fn visit_header(&mut self, _level: u8, text: &[InlineRun]) {
        self.push(plain(text));
    }

    fn visit_paragraph(&mut self, runs: &[InlineRun]) {
        self.push(plain(runs));
    }

    fn visit_bullet_list(&mut self, items: &[Vec<InlineRun>]) {
        let lines: Vec<_> = items.iter().map(|i| format!("• {}", plain(i))).collect();
        self.push(lines.join("\n"));
    }

    fn visit_numbered_list(&mut self, items: &[NumberedItem]) {
        let lines: Vec<_> = items
            .iter()
            .map(|i| format!("{}. {}", i.label, plain(&i.text)))
            .collect();
        self.push(lines.join("\n"));
    }

    fn visit_checklist(&mut self, items: &[ChecklistItem]) {
        let lines: Vec<_> = items
            .iter()
            .map(|i| format!("[{}] {}", if i.checked { "x" } else { " " }, plain(&i.text)))
            .collect();
        self.push(lines.join("\n"));
    }

    fn visit_code_block(&mut self, _language: Option<&str>, code: &str) {
        self.push(code.to_string());
    }

    fn visit_block_quote(&mut self, text: &[InlineRun]) {
        self.push(format!("> {}", plain(text)));
    }

    fn visit_callout(&mut self, kind: CalloutKind, body: &[InlineRun]) {
        self.push(format!("{}: {}", kind.label(), plain(body)));
    }

    fn visit_hero_image(&mut self, image: &str, title: Option<&str>, subtitle: Option<&str>) {
        let mut lines = vec![format!("[image: {image}]")];
        lines.extend([title, subtitle].into_iter().flatten().map(str::to_string));
        self.push(lines.join("\n"));
    }

    fn visit_banner(&mut self, _icon: &str, title: &str, subtitle: Option<&str>, _color: ColorToken) {
        self.push(with_optional(title, subtitle, "\n"));
    }

    fn visit_step_indicator(&mut self, current: u32, total: u32, title: &str) {
        self.push(format!("Step {current} of {total}: {title}"));
    }

    fn visit_expandable_section(&mut self, title: &str, _body: &str, block: &Block) {
        let head = format!("▸ {title}");
        let body = block
            .expandable_body()
            .map(|d| render_text(&d))
            .filter(|b| !b.is_empty());
        self.push(with_optional(&head, body.as_deref(), "\n"));
    }

    fn visit_feature_card(&mut self, _icon: &str, title: &str, description: &str) {
        self.push(with_optional(title, Some(description).filter(|d| !d.is_empty()), "\n"));
    }

    fn visit_pull_quote(&mut self, text: &str, author: Option<&str>) {
        self.push(with_optional(&format!("“{text}”"), author, " — "));
    }

    fn visit_divider(&mut self) {
        self.push("---".to_string());
    }

    fn visit_drop_cap(&mut self, letter: &str, rest: &[InlineRun]) {
        self.push(format!("{letter}{}", plain(rest)));
    }

    fn visit_highlight_box(&mut self, title: Option<&str>, content: &str, _color: ColorToken) {
        self.push(match title {
            Some(t) => format!("{t}\n{content}"),
            None => content.to_string(),
        });
    }

    fn visit_progress_card(&mut self, title: &str, progress: f64, description: Option<&str>) {
        let head = format!("{title}: {:.0}%", progress * 100.0);
        self.push(with_optional(&head, description, "\n"));
    }

    fn visit_video_embed(&mut self, url: &str, title: Option<&str>, _aspect_ratio: f64) {
        self.push(with_optional(&format!("[video: {url}]"), title, " "));
    }

    fn visit_video_thumbnail(
        &mut self,
        _thumbnail_url: &str,
        video_url: &str,
        title: Option<&str>,
        duration: Option<&str>,
    ) {
        let head = with_optional(&format!("[video: {video_url}]"), title, " ");
        self.push(with_optional(&head, duration, " · "));
    }
}
