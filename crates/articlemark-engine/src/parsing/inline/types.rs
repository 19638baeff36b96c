use serde::Serialize;

/// One span of formatted text within a block.
///
/// A sequence of runs reproduces the reading order of the source line:
/// delimiters are dropped from formatted runs, but unmatched delimiters are
/// kept verbatim inside `PlainText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "value", rename_all = "snake_case")]
pub enum InlineRun {
    PlainText(String),
    Bold(String),
    Italic(String),
    /// Code span contents; never further formatted.
    Code(String),
    Link {
        text: String,
        url: String,
    },
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::Bold(text.into())
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::Italic(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::Code(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// The text a reader sees for this run (link text, not its URL).
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
        }
    }

    /// Concatenates the visible text of every run.
    pub fn plain_text(runs: &[InlineRun]) -> String {
        runs.iter().map(InlineRun::text).collect()
    }
}
