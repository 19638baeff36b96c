//! Block kinds with owned delimiters.
//!
//! Every block-level marker lives on the kind that owns it; the classifier
//! only asks each kind whether a line matches.

pub mod block_quote;
pub mod callout;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod lists;

pub use block_quote::BlockQuote;
pub use callout::Callout;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use lists::{BulletList, Checklist, NumberedList};
