//! Draws a parsed document as styled terminal lines.

use std::str::FromStr;

use articlemark_config::ThemeConfig;
use articlemark_engine::{
    Block, BlockVisitor, CalloutKind, ChecklistItem, ColorToken, Document, InlineRun,
    NumberedItem, walk,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const MAX_STEP_DOTS: u32 = 20;

/// Terminal colors resolved from the theme's color names.
pub struct Palette {
    accent: Color,
    theme: ThemeConfig,
}

impl Palette {
    pub fn new(theme: &ThemeConfig) -> Self {
        Self {
            accent: color(&theme.accent),
            theme: theme.clone(),
        }
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    fn token(&self, token: ColorToken) -> Color {
        color(self.theme.palette.color_for(token.name()))
    }

    fn callout(&self, kind: CalloutKind) -> Color {
        color(self.theme.callouts.color_for(kind.label()))
    }
}

/// Unknown color names fall back to the terminal's default color.
fn color(name: &str) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        log::warn!("unknown color name '{name}' in theme");
        Color::Reset
    })
}

pub fn render_lines(doc: &Document, palette: &Palette) -> Vec<Line<'static>> {
    let mut r = StyledRenderer {
        palette,
        lines: vec![],
    };
    walk(doc, &mut r);
    r.lines
}

struct StyledRenderer<'p> {
    palette: &'p Palette,
    lines: Vec<Line<'static>>,
}

impl StyledRenderer<'_> {
    fn spans(&self, runs: &[InlineRun], base: Style) -> Vec<Span<'static>> {
        runs.iter()
            .map(|run| match run {
                InlineRun::PlainText(t) => Span::styled(t.clone(), base),
                InlineRun::Bold(t) => Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)),
                InlineRun::Italic(t) => {
                    Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC))
                }
                InlineRun::Code(t) => Span::styled(t.clone(), base.fg(Color::Gray).bg(Color::DarkGray)),
                InlineRun::Link { text, .. } => Span::styled(
                    text.clone(),
                    base.fg(self.palette.accent())
                        .add_modifier(Modifier::UNDERLINED),
                ),
            })
            .collect()
    }

    fn block(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
        self.lines.push(Line::default());
    }

    fn prefixed(&self, prefix: String, runs: &[InlineRun], style: Style) -> Line<'static> {
        let mut spans = vec![Span::styled(prefix, style)];
        spans.extend(self.spans(runs, Style::default()));
        Line::from(spans)
    }
}

impl BlockVisitor for StyledRenderer<'_> {
    fn visit_header(&mut self, level: u8, text: &[InlineRun]) {
        let mut style = Style::default().fg(self.palette.accent()).add_modifier(Modifier::BOLD);
        if level == 1 {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let line = Line::from(self.spans(text, style));
        self.block([line]);
    }

    fn visit_paragraph(&mut self, runs: &[InlineRun]) {
        let line = Line::from(self.spans(runs, Style::default()));
        self.block([line]);
    }

    fn visit_bullet_list(&mut self, items: &[Vec<InlineRun>]) {
        let lines: Vec<_> = items
            .iter()
            .map(|i| self.prefixed("  • ".into(), i, Style::default()))
            .collect();
        self.block(lines);
    }

    fn visit_numbered_list(&mut self, items: &[NumberedItem]) {
        let lines: Vec<_> = items
            .iter()
            .map(|i| self.prefixed(format!("  {}. ", i.label), &i.text, Style::default()))
            .collect();
        self.block(lines);
    }

    fn visit_checklist(&mut self, items: &[ChecklistItem]) {
        let lines: Vec<_> = items
            .iter()
            .map(|i| {
                let (mark, style) = if i.checked {
                    ("  ☑ ", Style::default().fg(Color::Green))
                } else {
                    ("  ☐ ", Style::default())
                };
                self.prefixed(mark.into(), &i.text, style)
            })
            .collect();
        self.block(lines);
    }

    fn visit_code_block(&mut self, language: Option<&str>, code: &str) {
        let style = Style::default().fg(Color::Gray);
        let mut lines = vec![Line::styled(
            format!("┌─ {}", language.unwrap_or("code")),
            Style::default().fg(Color::DarkGray),
        )];
        lines.extend(code.lines().map(|l| Line::styled(format!("│ {l}"), style)));
        self.block(lines);
    }

    fn visit_block_quote(&mut self, text: &[InlineRun]) {
        let line = self.prefixed("▌ ".into(), text, Style::default().fg(Color::DarkGray));
        self.block([line]);
    }

    fn visit_callout(&mut self, kind: CalloutKind, body: &[InlineRun]) {
        let style = Style::default()
            .fg(self.palette.callout(kind))
            .add_modifier(Modifier::BOLD);
        let line = self.prefixed(format!("▍{}: ", kind.label()), body, style);
        self.block([line]);
    }

    fn visit_hero_image(&mut self, image: &str, title: Option<&str>, subtitle: Option<&str>) {
        let mut lines = vec![Line::styled(
            format!("[image: {image}]"),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(t) = title {
            lines.push(Line::styled(
                t.to_string(),
                Style::default()
                    .fg(self.palette.accent())
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(s) = subtitle {
            lines.push(Line::styled(s.to_string(), Style::default().add_modifier(Modifier::ITALIC)));
        }
        self.block(lines);
    }

    fn visit_banner(&mut self, icon: &str, title: &str, subtitle: Option<&str>, color: ColorToken) {
        let style = Style::default().fg(Color::Black).bg(self.palette.token(color));
        let mut lines = vec![Line::styled(format!(" {icon} · {title} "), style.add_modifier(Modifier::BOLD))];
        if let Some(s) = subtitle {
            lines.push(Line::styled(format!(" {s} "), style));
        }
        self.block(lines);
    }

    fn visit_step_indicator(&mut self, current: u32, total: u32, title: &str) {
        let dots: String = (1..=total.min(MAX_STEP_DOTS))
            .map(|i| if i <= current { '●' } else { '○' })
            .collect();
        self.block([Line::from(vec![
            Span::styled(dots, Style::default().fg(self.palette.accent())),
            Span::raw(format!("  Step {current} of {total}: {title}")),
        ])]);
    }

    fn visit_expandable_section(&mut self, title: &str, _body: &str, block: &Block) {
        self.lines.push(Line::styled(
            format!("▾ {title}"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let nested = block
            .expandable_body()
            .map(|body| render_lines(&body, self.palette))
            .unwrap_or_default();
        if nested.is_empty() {
            self.lines.push(Line::default());
        }
        self.lines.extend(nested.into_iter().map(|mut l| {
            l.spans.insert(0, Span::raw("  "));
            l
        }));
    }

    fn visit_feature_card(&mut self, icon: &str, title: &str, description: &str) {
        self.block([
            Line::from(vec![
                Span::styled(format!("[{icon}] "), Style::default().fg(self.palette.accent())),
                Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::raw(description.to_string()),
        ]);
    }

    fn visit_pull_quote(&mut self, text: &str, author: Option<&str>) {
        let mut lines = vec![Line::styled(
            format!("“{text}”"),
            Style::default().add_modifier(Modifier::ITALIC),
        )];
        if let Some(a) = author {
            lines.push(Line::styled(format!("    — {a}"), Style::default().fg(Color::DarkGray)));
        }
        self.block(lines);
    }

    fn visit_divider(&mut self) {
        self.block([Line::styled("─".repeat(40), Style::default().fg(Color::DarkGray))]);
    }

    fn visit_drop_cap(&mut self, letter: &str, rest: &[InlineRun]) {
        let style = Style::default()
            .fg(self.palette.accent())
            .add_modifier(Modifier::BOLD);
        let line = self.prefixed(letter.to_string(), rest, style);
        self.block([line]);
    }

    fn visit_highlight_box(&mut self, title: Option<&str>, content: &str, color: ColorToken) {
        let bar = Style::default().fg(self.palette.token(color));
        let mut lines = vec![];
        if let Some(t) = title {
            lines.push(Line::from(vec![
                Span::styled("┃ ", bar),
                Span::styled(t.to_string(), bar.add_modifier(Modifier::BOLD)),
            ]));
        }
        lines.push(Line::from(vec![Span::styled("┃ ", bar), Span::raw(content.to_string())]));
        self.block(lines);
    }

    fn visit_progress_card(&mut self, title: &str, progress: f64, description: Option<&str>) {
        const WIDTH: usize = 20;
        // progress is already clamped to [0, 1]
        let filled = (progress * WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled.min(WIDTH)));
        let mut lines = vec![
            Line::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled(bar, Style::default().fg(self.palette.accent())),
                Span::raw(format!(" {:.0}%", progress * 100.0)),
            ]),
        ];
        if let Some(d) = description {
            lines.push(Line::raw(d.to_string()));
        }
        self.block(lines);
    }

    fn visit_video_embed(&mut self, url: &str, title: Option<&str>, _aspect_ratio: f64) {
        let label = title.unwrap_or("Video");
        self.block([Line::from(vec![
            Span::raw(format!("▶ {label} ")),
            Span::styled(url.to_string(), Style::default().fg(self.palette.accent())),
        ])]);
    }

    fn visit_video_thumbnail(
        &mut self,
        _thumbnail_url: &str,
        video_url: &str,
        title: Option<&str>,
        duration: Option<&str>,
    ) {
        let label = title.unwrap_or("Video");
        let mut spans = vec![Span::raw(format!("▶ {label} "))];
        if let Some(d) = duration {
            spans.push(Span::styled(format!("({d}) "), Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            video_url.to_string(),
            Style::default().fg(self.palette.accent()),
        ));
        self.block([Line::from(spans)]);
    }
}
