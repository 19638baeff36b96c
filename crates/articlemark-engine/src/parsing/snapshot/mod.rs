//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document to a stable, serializable `Snap`
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (line ranges ordered
//!   and disjoint, byte spans matching their lines, no non-blank line dropped)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
