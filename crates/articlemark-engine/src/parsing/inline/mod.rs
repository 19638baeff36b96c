//! # Inline Parsing
//!
//! Cursor-based formatting of a single line of prose into [`InlineRun`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun` enum (PlainText, Bold, Italic, Code, Link)
//! - **`kinds`**: delimiter constants owned by each inline kind
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` entry point with per-kind scanners
//!
//! ## Precedence
//!
//! At each position `**` is tried before a single `*`, so `**bold**` never
//! reads as two italics. Code spans are raw: `` `*x*` `` is a single Code run.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineRun;
