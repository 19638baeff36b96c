//! # Line Source
//!
//! Splits raw input into indexed lines. Classification works on the trimmed
//! view of each line while extraction of verbatim content (code blocks,
//! expandable bodies) works on the raw text.

pub mod lines;
pub mod span;

pub use lines::{LineRef, LineSource, lines_with_spans};
pub use span::Span;
