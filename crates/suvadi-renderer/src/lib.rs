//! Markdown rendering pipeline for the suvadi content engine.
//!
//! Two concerns live here:
//!
//! - [`MarkdownRenderer`]: GitHub Flavored Markdown to HTML conversion
//! - [`frontmatter`]: splitting and parsing the leading `---` YAML block
//!
//! The renderer treats both source formats the same way; the difference
//! between them (frontmatter parsed vs. stripped) is decided by the caller.
//!
//! # Example
//!
//! ```
//! use suvadi_renderer::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render("**bold** and ~~gone~~");
//! assert!(html.contains("<strong>bold</strong>"));
//! ```

pub mod frontmatter;
mod markdown;

pub use frontmatter::{Frontmatter, FrontmatterError};
pub use markdown::MarkdownRenderer;
