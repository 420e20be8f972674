//! Notebook ⇄ percent script transcoding.
//!
//! The script form is a flat text document where a line holding exactly `# +`
//! opens a code region and a line holding exactly `# -` opens a markdown
//! region. Markdown lines carry a `# ` prefix; code lines are verbatim.
//!
//! ```text
//! # +
//!
//! a = 1
//!
//! # -
//! # note
//!
//! # +
//!
//! b = 2
//! ```
//!
//! - **`serializer`**: cells → script, single pass, total
//! - **`parser`**: script → cells, single pass, total, assigns ids
//! - **`delimiters`**: sentinel strings, the markdown prefix, sentinel splitting
//!
//! Cell content and order survive notebook → script → notebook. Code cell
//! boundaries inside one merged region do not, and ids are always regenerated.

pub mod delimiters;
pub mod parser;
pub mod serializer;

pub use delimiters::{CODE_SENTINEL, MARKDOWN_PREFIX, MARKDOWN_SENTINEL, Sentinel};
pub use parser::parse;
pub use serializer::{SerializeOptions, serialize, serialize_with};

/// Re-format a script the way a save and reopen would: `serialize(parse(text))`
pub fn normalize(text: &str, options: &SerializeOptions) -> String {
    serialize_with(&parse(text), options)
}
