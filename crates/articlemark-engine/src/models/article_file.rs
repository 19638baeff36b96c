use relative_path::{RelativePath, RelativePathBuf};

/// An article on disk, addressed relative to the articles directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArticleFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ArticleFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .filter(|name| !name.is_empty())
            .unwrap_or("Untitled")
            .replace(['-', '_'], " ");
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension, dashes and underscores shown
    /// as spaces.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<&str> for ArticleFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_extension_and_separators() {
        let file = ArticleFile::from("guides/getting-started_now.md");
        assert_eq!(file.display_name(), "getting started now");
        assert_eq!(file.relative_path().as_str(), "guides/getting-started_now.md");
    }

    #[test]
    fn root_path_is_untitled() {
        assert_eq!(ArticleFile::from("").display_name(), "Untitled");
    }
}
