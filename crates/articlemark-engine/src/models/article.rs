use crate::parsing::{
    Document, parse_lines,
    source::LineSource,
    toc::{TocItem, toc_for_lines},
};

use super::ArticleFile;

/// A loaded article: its source text, parsed document and table of contents.
///
/// Both passes run over the same line source; [`Article::reload`] rebuilds
/// them whenever the text changes.
#[derive(Debug, Clone)]
pub struct Article {
    pub file: ArticleFile,
    pub source: String,
    pub document: Document,
    pub toc: Vec<TocItem>,
}

impl Article {
    pub fn parse(file: ArticleFile, source: String) -> Self {
        let (document, toc) = Self::passes(&source);
        Self {
            file,
            source,
            document,
            toc,
        }
    }

    pub fn reload(&mut self, source: String) {
        let (document, toc) = Self::passes(&source);
        self.source = source;
        self.document = document;
        self.toc = toc;
    }

    /// The first header's text, falling back to the file's display name.
    pub fn title(&self) -> &str {
        self.toc
            .first()
            .map(|t| t.title.as_str())
            .unwrap_or_else(|| self.file.display_name())
    }

    fn passes(source: &str) -> (Document, Vec<TocItem>) {
        let lines = LineSource::new(source);
        (parse_lines(&lines), toc_for_lines(&lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_first_header() {
        let a = Article::parse("intro.md".into(), "text\n\n## Welcome".into());
        assert_eq!(a.title(), "Welcome");
        assert_eq!(a.document.len(), 2);
    }

    #[test]
    fn reload_replaces_document() {
        let mut a = Article::parse("intro.md".into(), "one".into());
        assert_eq!(a.title(), "intro");
        a.reload("# Now titled\n---".into());
        assert_eq!(a.title(), "Now titled");
        assert_eq!(a.document.len(), 2);
    }
}
