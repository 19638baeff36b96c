pub mod io;
pub mod models;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use io::*;
pub use models::{Article, ArticleFile};
pub use parsing::{
    Document, parse,
    blocks::{Block, BlockNode, CalloutKind, ChecklistItem, ColorToken, NumberedItem},
    inline::InlineRun,
    toc::{TocItem, TocNode, build_outline, generate_toc, slugify},
};
pub use render::{BlockVisitor, html::render_html, text::render_text, walk};
