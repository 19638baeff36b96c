use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::parsing::{
    Document,
    blocks::{Block, CalloutKind, ChecklistItem, ColorToken, NumberedItem},
    inline::InlineRun,
    toc::slugify,
};

use super::{BlockVisitor, walk};

/// Renders a document as an HTML fragment.
///
/// Component blocks become elements with `am-*` classes; color tokens are
/// emitted as `am-color-<name>` classes and left to the stylesheet.
pub fn render_html(doc: &Document) -> String {
    let mut r = HtmlRenderer::default();
    walk(doc, &mut r);
    r.out
}

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    out: String,
}

pub fn inline_html(runs: &[InlineRun]) -> String {
    let mut s = String::new();
    for run in runs {
        match run {
            InlineRun::PlainText(t) => s.push_str(&text(t)),
            InlineRun::Bold(t) => s.push_str(&format!("<strong>{}</strong>", text(t))),
            InlineRun::Italic(t) => s.push_str(&format!("<em>{}</em>", text(t))),
            InlineRun::Code(t) => s.push_str(&format!("<code>{}</code>", text(t))),
            InlineRun::Link { text: t, url } => {
                s.push_str(&format!("<a href=\"{}\">{}</a>", attr(url), text(t)))
            }
        }
    }
    s
}

impl HtmlRenderer {
    fn line(&mut self, html: impl AsRef<str>) {
        self.out.push_str(html.as_ref());
        self.out.push('\n');
    }

    fn list(&mut self, tag: &str, class: Option<&str>, items: impl Iterator<Item = String>) {
        let mut s = match class {
            Some(c) => format!("<{tag} class=\"{c}\">"),
            None => format!("<{tag}>"),
        };
        for item in items {
            let _ = write!(s, "<li>{item}</li>");
        }
        let _ = write!(s, "</{tag}>");
        self.line(s);
    }
}

fn color_class(color: ColorToken) -> String {
    format!("am-color-{}", color.name())
}

impl BlockVisitor for HtmlRenderer {
    fn visit_header(&mut self, level: u8, runs: &[InlineRun]) {
        let id = slugify(&InlineRun::plain_text(runs));
        self.line(format!(
            "<h{level} id=\"{}\">{}</h{level}>",
            attr(&id),
            inline_html(runs)
        ));
    }

    fn visit_paragraph(&mut self, runs: &[InlineRun]) {
        self.line(format!("<p>{}</p>", inline_html(runs)));
    }

    fn visit_bullet_list(&mut self, items: &[Vec<InlineRun>]) {
        self.list("ul", None, items.iter().map(|i| inline_html(i)));
    }

    fn visit_numbered_list(&mut self, items: &[NumberedItem]) {
        self.list("ol", None, items.iter().map(|i| inline_html(&i.text)));
    }

    fn visit_checklist(&mut self, items: &[ChecklistItem]) {
        self.list(
            "ul",
            Some("am-checklist"),
            items.iter().map(|i| {
                let checked = if i.checked { " checked" } else { "" };
                format!(
                    "<input type=\"checkbox\" disabled{checked}> {}",
                    inline_html(&i.text)
                )
            }),
        );
    }

    fn visit_code_block(&mut self, language: Option<&str>, code: &str) {
        let class = language
            .map(|l| format!(" class=\"language-{}\"", attr(l)))
            .unwrap_or_default();
        self.line(format!("<pre><code{class}>{}</code></pre>", text(code)));
    }

    fn visit_block_quote(&mut self, runs: &[InlineRun]) {
        self.line(format!("<blockquote>{}</blockquote>", inline_html(runs)));
    }

    fn visit_callout(&mut self, kind: CalloutKind, body: &[InlineRun]) {
        self.line(format!(
            "<aside class=\"am-callout am-callout-{}\"><strong>{}</strong> {}</aside>",
            kind.label().to_lowercase(),
            kind.label(),
            inline_html(body)
        ));
    }

    fn visit_hero_image(&mut self, image: &str, title: Option<&str>, subtitle: Option<&str>) {
        let mut s = format!(
            "<figure class=\"am-hero\"><img src=\"{}\" alt=\"{}\">",
            attr(image),
            attr(title.unwrap_or(""))
        );
        if title.is_some() || subtitle.is_some() {
            s.push_str("<figcaption>");
            if let Some(t) = title {
                let _ = write!(s, "<h1>{}</h1>", text(t));
            }
            if let Some(st) = subtitle {
                let _ = write!(s, "<p>{}</p>", text(st));
            }
            s.push_str("</figcaption>");
        }
        s.push_str("</figure>");
        self.line(s);
    }

    fn visit_banner(&mut self, icon: &str, title: &str, subtitle: Option<&str>, color: ColorToken) {
        let sub = subtitle
            .map(|s| format!("<p>{}</p>", text(s)))
            .unwrap_or_default();
        self.line(format!(
            "<div class=\"am-banner {}\" data-icon=\"{}\"><strong>{}</strong>{sub}</div>",
            color_class(color),
            attr(icon),
            text(title)
        ));
    }

    fn visit_step_indicator(&mut self, current: u32, total: u32, title: &str) {
        self.line(format!(
            "<div class=\"am-step\" data-current=\"{current}\" data-total=\"{total}\">Step {current} of {total}: {}</div>",
            text(title)
        ));
    }

    fn visit_expandable_section(&mut self, title: &str, _body: &str, block: &Block) {
        let inner = block
            .expandable_body()
            .map(|d| render_html(&d))
            .unwrap_or_default();
        self.line(format!(
            "<details class=\"am-expandable\"><summary>{}</summary>\n{inner}</details>",
            text(title)
        ));
    }

    fn visit_feature_card(&mut self, icon: &str, title: &str, description: &str) {
        self.line(format!(
            "<div class=\"am-feature\" data-icon=\"{}\"><h3>{}</h3><p>{}</p></div>",
            attr(icon),
            text(title),
            text(description)
        ));
    }

    fn visit_pull_quote(&mut self, quote: &str, author: Option<&str>) {
        let cite = author
            .map(|a| format!("<cite>{}</cite>", text(a)))
            .unwrap_or_default();
        self.line(format!(
            "<blockquote class=\"am-pull-quote\"><p>{}</p>{cite}</blockquote>",
            text(quote)
        ));
    }

    fn visit_divider(&mut self) {
        self.line("<hr>");
    }

    fn visit_drop_cap(&mut self, letter: &str, rest: &[InlineRun]) {
        self.line(format!(
            "<p class=\"am-dropcap\"><span class=\"am-dropcap-letter\">{}</span>{}</p>",
            text(letter),
            inline_html(rest)
        ));
    }

    fn visit_highlight_box(&mut self, title: Option<&str>, content: &str, color: ColorToken) {
        let heading = title
            .map(|t| format!("<h4>{}</h4>", text(t)))
            .unwrap_or_default();
        self.line(format!(
            "<div class=\"am-highlight {}\">{heading}<p>{}</p></div>",
            color_class(color),
            text(content)
        ));
    }

    fn visit_progress_card(&mut self, title: &str, progress: f64, description: Option<&str>) {
        let desc = description
            .map(|d| format!("<p>{}</p>", text(d)))
            .unwrap_or_default();
        self.line(format!(
            "<div class=\"am-progress\"><h4>{}</h4><progress max=\"1\" value=\"{progress}\"></progress>{desc}</div>",
            text(title)
        ));
    }

    fn visit_video_embed(&mut self, url: &str, title: Option<&str>, aspect_ratio: f64) {
        self.line(format!(
            "<div class=\"am-video\" style=\"aspect-ratio: {aspect_ratio}\"><iframe src=\"{}\" title=\"{}\" allowfullscreen></iframe></div>",
            attr(url),
            attr(title.unwrap_or(""))
        ));
    }

    fn visit_video_thumbnail(
        &mut self,
        thumbnail_url: &str,
        video_url: &str,
        title: Option<&str>,
        duration: Option<&str>,
    ) {
        let dur = duration
            .map(|d| format!("<span class=\"am-duration\">{}</span>", text(d)))
            .unwrap_or_default();
        let caption = title.map(|t| text(t).into_owned()).unwrap_or_default();
        self.line(format!(
            "<a class=\"am-video-thumbnail\" href=\"{}\"><img src=\"{}\" alt=\"{}\">{caption}{dur}</a>",
            attr(video_url),
            attr(thumbnail_url),
            attr(title.unwrap_or(""))
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text_and_attributes() {
        let html = render_html(&parse("a < b & [x](https://e.example/?q=\"1\")"));
        assert_eq!(
            html,
            "<p>a &lt; b &amp; <a href=\"https://e.example/?q=&quot;1&quot;\">x</a></p>\n"
        );
    }

    #[test]
    fn header_ids_are_slugs() {
        assert_eq!(
            render_html(&parse("## Getting Started")),
            "<h2 id=\"getting-started\">Getting Started</h2>\n"
        );
    }

    #[test]
    fn code_is_not_formatted() {
        assert_eq!(
            render_html(&parse("```rust\nlet a = *b*;\n```")),
            "<pre><code class=\"language-rust\">let a = *b*;</code></pre>\n"
        );
    }

    #[test]
    fn highlight_color_class() {
        let html = render_html(&parse("![highlight](null, Some content, green)"));
        assert_eq!(
            html,
            "<div class=\"am-highlight am-color-green\"><p>Some content</p></div>\n"
        );
    }

    #[test]
    fn expandable_body_nested() {
        let html = render_html(&parse("![expandable](FAQ)\n- one"));
        assert_eq!(
            html,
            "<details class=\"am-expandable\"><summary>FAQ</summary>\n<ul><li>one</li></ul>\n</details>\n"
        );
    }
}
