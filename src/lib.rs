//! Render Markdown documents into pages with a linked table of contents.
//!
//! A heading takes part in the table of contents when it closes with a
//! second `#` and an anchor identifier:
//!
//! ```text
//! ## Installing from source # install-source
//! ```
//!
//! Such lines are rewritten so the heading links to its table-of-contents
//! entry and to itself, and the headings are collected into a tree that
//! tolerates skipped levels. The rewritten Markdown is then rendered to HTML
//! and wrapped in a page template together with the table of contents.

#[macro_use]
mod macros;

pub mod convert;
pub mod error;
pub mod headings;
pub mod markdown;
pub mod outline;
pub mod page;
pub mod process;
pub mod server;
pub mod toc;

pub use convert::Converter;
pub use error::{Error, Result};
pub use headings::{HeadingCandidate, classify_line, is_valid_identifier};
pub use markdown::{DEFAULT_THEME, MarkdownRenderer};
pub use outline::{
    HeadingNode, MAX_LEVEL, NodeId, Outline, OutlineBuilder, TOC_PREFIX, rewrite_heading,
};
pub use page::{Page, PageTemplate, document_title};
pub use process::{ScannedDocument, scan_document, scan_str};
pub use toc::render_toc;
