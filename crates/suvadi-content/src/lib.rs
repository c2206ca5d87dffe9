//! Content resolution and rendering facade for the suvadi engine.
//!
//! Given a path (as URL segments) and a language preference, the
//! [`ContentResolver`] locates the single best-matching source file and
//! renders it:
//!
//! 1. `<base>.<language>.mdx`
//! 2. `<base>.<language>.md` (legacy-markdown profile only)
//! 3. `<base>.mdx`
//! 4. `<base>.md` (legacy-markdown profile only)
//!
//! The first existing candidate wins; if none exists the call fails with
//! [`ContentError::NotFound`] naming the attempted base path and language.
//! There is no retry and no substitution beyond this fallback order.
//!
//! [`Library`] bundles the resolver with the tree builder into the two-call
//! API the presentation layer consumes: [`Library::categories`] and
//! [`Library::page`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use suvadi_content::{Language, Library};
//! use suvadi_storage::MockStorage;
//!
//! let storage = Arc::new(MockStorage::new().with_file("intro/intro.mdx", "# வணக்கம்"));
//! let library = Library::new(storage);
//!
//! let content = library.page(&["intro".to_owned()], Language::En).unwrap();
//! assert!(content.html().contains("<h1>வணக்கம்</h1>"));
//! ```

mod language;
mod library;
mod profile;
mod resolver;

pub use language::{Language, ParseLanguageError};
pub use library::Library;
pub use profile::FormatProfile;
pub use resolver::{ContentError, ContentResolver, RenderedContent};
