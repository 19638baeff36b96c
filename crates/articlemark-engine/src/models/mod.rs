pub mod article;
pub mod article_file;

pub use article::Article;
pub use article_file::ArticleFile;
