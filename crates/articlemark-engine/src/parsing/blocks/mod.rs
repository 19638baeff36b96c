//! # Block Parsing
//!
//! Lines are classified on their own, then a single forward cursor turns
//! them into blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line gets a `LineKind`
//!    by asking the block kinds, in priority order, whether they match.
//! 2. **Block Construction** (`builder`): `BlockBuilder` walks the lines,
//!    hands multi-line runs to the `extract` functions and component tag
//!    lines to `components::build`, and folds everything else into
//!    paragraphs.
//!
//! ## Key Invariants
//!
//! - The cursor only moves forward; extractors never backtrack.
//! - Every non-blank line belongs to exactly one block's line range.
//! - Code fences are raw zones: their lines are neither classified nor
//!   inline-formatted.

pub mod builder;
pub mod classify;
pub mod extract;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier, classify_text};
pub use extract::Extracted;
pub use types::{Block, BlockNode, CalloutKind, ChecklistItem, ColorToken, NumberedItem};
