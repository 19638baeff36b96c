//! Extended components: the `![tag](param, param, …)` syntax.
//!
//! [`TagLine`] tokenizes the line shape, [`Params`] splits the parameter
//! string per tag, and [`build`] produces the component block.

pub mod build;
pub mod params;
pub mod tag;

pub use build::{build, leftover};
pub use params::{NULL_SENTINEL, Params, SplitRule};
pub use tag::{ComponentTag, TagLine};
