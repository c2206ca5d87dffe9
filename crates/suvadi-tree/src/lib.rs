//! Category/folder tree builder for the suvadi content engine.
//!
//! Walks a content root and produces an ordered, typed tree of
//! categories, folders, and files for sidebar navigation:
//!
//! - One [`Category`] per immediate subdirectory of the root
//! - The reserved categories `intro` and `history` list their direct files
//!   only; all other categories recurse into a [`ContentItem`] tree
//! - Per-language physical variants (`name.ta.mdx`, `name.en.mdx`,
//!   `name.mdx`) collapse into a single logical [`ContentItem::File`]
//! - A per-directory `_translations.json` sidecar attaches localized
//!   [`DisplayName`] labels
//!
//! The tree is rebuilt from storage on every call; there is no cache and no
//! shared mutable state. Filesystem errors propagate to the caller
//! unmodified, wrapped only in [`TreeError`].
//!
//! # Example
//!
//! ```
//! use suvadi_storage::MockStorage;
//! use suvadi_tree::TreeBuilder;
//!
//! let storage = MockStorage::new()
//!     .with_file("intro/intro.ta.mdx", "# அறிமுகம்")
//!     .with_file("grammar/letters.mdx", "# Letters");
//!
//! let categories = TreeBuilder::new(&storage).build().unwrap();
//! assert_eq!(categories[0].name, "intro");
//! ```

mod builder;
mod decode;
mod item;
mod translations;

pub use builder::{TreeBuilder, TreeError, build_tree};
pub use decode::safe_decode;
pub use item::{Category, ContentItem, SourceFormat, base_name, strip_source_extension};
pub use translations::{DisplayName, Translations, TRANSLATIONS_FILE};

/// Reserved categories listed flat (one level, no recursion) and ordered
/// ahead of everything else.
pub const RESERVED_CATEGORIES: [&str; 2] = ["intro", "history"];

/// Language tags recognized as filename suffixes (`name.ta.mdx`).
pub const LANGUAGE_TAGS: [&str; 2] = ["ta", "en"];
