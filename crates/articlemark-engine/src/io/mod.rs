use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::{Article, ArticleFile};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid articles directory: {0}")]
    InvalidArticlesDir(String),
}

/// Read an article's text.
pub fn read_article(relative_path: &RelativePath, articles_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(articles_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Read and parse an article.
pub fn load_article(file: &ArticleFile, articles_root: &Path) -> Result<Article, IoError> {
    let source = read_article(file.relative_path(), articles_root)?;
    Ok(Article::parse(file.clone(), source))
}

/// Find every `.md` file under the articles directory, sorted by path.
pub fn scan_articles(articles_root: &Path) -> Result<Vec<ArticleFile>, IoError> {
    validate_articles_dir(articles_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(articles_root, &mut files)?;
    files.sort();

    let articles = files
        .iter()
        .filter_map(|path| path.strip_prefix(articles_root).ok())
        .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
        .map(ArticleFile::new)
        .collect();
    Ok(articles)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    Ok(())
}

pub fn validate_articles_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidArticlesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_articles_dir, create_test_file};

    #[test]
    fn scan_finds_nested_markdown_only() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "b.md", "# B");
        create_test_file(&dir, "guides/a.md", "# A");
        create_test_file(&dir, "image.png", "not text");

        let files = scan_articles(dir.path()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(paths, vec!["b.md", "guides/a.md"]);
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let result = scan_articles(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidArticlesDir(_))));
    }

    #[test]
    fn validate_accepts_existing_directory() {
        let dir = create_test_articles_dir();
        assert!(validate_articles_dir(dir.path()).is_ok());
    }

    #[test]
    fn read_missing_article_is_not_found() {
        let dir = create_test_articles_dir();
        let result = read_article(RelativePath::new("nope.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn load_parses_document_and_toc() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "intro.md", "# Welcome\n\n- [ ] read this");
        let article = load_article(&ArticleFile::from("intro.md"), dir.path()).unwrap();
        assert_eq!(article.title(), "Welcome");
        assert_eq!(article.document.len(), 2);
        assert_eq!(article.toc.len(), 1);
    }
}
