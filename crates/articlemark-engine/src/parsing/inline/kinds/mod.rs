//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser refers to these
//! constants and never hardcodes `**`, `` ` `` or `[`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
