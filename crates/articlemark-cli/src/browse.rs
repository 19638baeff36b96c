//! Interactive terminal browser: article list, rendered article, TOC.

use anyhow::Result;
use articlemark_config::Config;
use articlemark_engine::{Article, ArticleFile, TocItem, io};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;

use crate::styled::{Palette, render_lines};

pub struct App {
    config: Config,
    palette: Palette,
    articles: Vec<ArticleFile>,
    list_state: ListState,
    current: Option<Article>,
    content: Vec<Line<'static>>,
    scroll: u16,
    show_toc: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let articles = io::scan_articles(&config.articles_path)?;
        log::info!(
            "found {} articles in {}",
            articles.len(),
            config.articles_path.display()
        );
        let mut app = Self {
            palette: Palette::new(&config.theme),
            show_toc: config.toc.show,
            config,
            articles,
            list_state: ListState::default(),
            current: None,
            content: vec![],
            scroll: 0,
        };

        if !app.articles.is_empty() {
            app.list_state.select(Some(0));
            app.load_selected();
        }
        Ok(app)
    }

    fn next_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.articles.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.load_selected();
    }

    fn previous_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.articles.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.load_selected();
    }

    fn load_selected(&mut self) {
        self.scroll = 0;
        let Some(file) = self
            .list_state
            .selected()
            .and_then(|i| self.articles.get(i))
        else {
            return;
        };
        match io::load_article(file, &self.config.articles_path) {
            Ok(article) => {
                self.content = render_lines(&article.document, &self.palette);
                self.current = Some(article);
            }
            Err(e) => {
                log::warn!("failed to load {}: {e}", file.relative_path());
                self.content = vec![Line::from(format!("Error reading article: {e}"))];
                self.current = None;
            }
        }
    }

    /// Re-reads the current article from disk and re-parses it.
    fn reload(&mut self) {
        let Some(article) = self.current.as_mut() else {
            return;
        };
        match io::read_article(article.file.relative_path(), &self.config.articles_path) {
            Ok(source) => {
                article.reload(source);
                self.content = render_lines(&article.document, &self.palette);
            }
            Err(e) => log::warn!("reload failed: {e}"),
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = u16::try_from(self.content.len()).unwrap_or(u16::MAX);
        let next = i32::from(self.scroll).saturating_add(delta).clamp(0, i32::from(max));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    fn toc_lines(&self) -> Vec<Line<'static>> {
        let Some(article) = &self.current else {
            return vec![];
        };
        article
            .toc
            .iter()
            .filter(|t| t.level <= self.config.toc.max_level)
            .map(|t: &TocItem| {
                let indent = "  ".repeat(usize::from(t.level.saturating_sub(1)));
                Line::from(format!("{indent}{}", t.title))
            })
            .collect()
    }
}

pub fn run(config: Config) -> Result<()> {
    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(10),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_by(-10),
                KeyCode::Char('t') => app.show_toc = !app.show_toc,
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let mut columns = vec![Constraint::Percentage(25), Constraint::Min(0)];
    if app.show_toc {
        columns.push(Constraint::Percentage(25));
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|a| ListItem::new(a.display_name().to_string()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .highlight_style(Style::default().bg(app.palette.accent()).fg(Color::Black));
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let title = app
        .current
        .as_ref()
        .map(|a| a.title().to_string())
        .unwrap_or_else(|| "No article".to_string());
    let content = if app.content.is_empty() {
        vec![Line::from("Select an article to view it")]
    } else {
        app.content.clone()
    };
    let article = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(article, chunks[1]);

    if app.show_toc {
        let toc = Paragraph::new(app.toc_lines())
            .block(Block::default().borders(Borders::ALL).title("Contents"));
        f.render_widget(toc, chunks[2]);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Article | "),
        Span::raw("Space/b: Scroll | t: Contents | r: Reload"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn app_with(files: &[(&str, &str)]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let app = App::new(Config::new(dir.path().to_path_buf())).unwrap();
        (dir, app)
    }

    #[test]
    fn first_article_is_loaded_on_start() {
        let (_dir, app) = app_with(&[("a.md", "# Alpha\n\nbody\n"), ("b.md", "# Beta\n")]);

        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.current.as_ref().map(|a| a.title()), Some("Alpha"));
        assert!(!app.content.is_empty());
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let (_dir, mut app) = app_with(&[("a.md", "# Alpha\n"), ("b.md", "# Beta\n")]);

        app.next_article();
        assert_eq!(app.current.as_ref().map(|a| a.title()), Some("Beta"));
        app.next_article();
        assert_eq!(app.list_state.selected(), Some(0));
        app.previous_article();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn empty_directory_has_no_selection() {
        let (_dir, mut app) = app_with(&[]);

        app.next_article();
        assert_eq!(app.list_state.selected(), None);
        assert!(app.current.is_none());
    }

    #[test]
    fn toc_respects_max_level() {
        let (_dir, mut app) = app_with(&[("a.md", "# One\n## Two\n### Three\n#### Four\n")]);
        app.config.toc.max_level = 2;

        let titles: Vec<String> = app.toc_lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(titles, vec!["One", "  Two"]);
    }

    #[test]
    fn scrolling_is_clamped_at_top() {
        let (_dir, mut app) = app_with(&[("a.md", "text\n")]);

        app.scroll_by(-10);
        assert_eq!(app.scroll, 0);
        app.scroll_by(1);
        assert_eq!(app.scroll, 1);
    }
}
