//! Tree construction from a storage backend.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use suvadi_storage::{Storage, StorageError};

use crate::decode::safe_decode;
use crate::item::{Category, ContentItem, SourceFormat, base_name, strip_source_extension};
use crate::translations::{TRANSLATIONS_FILE, Translations};
use crate::RESERVED_CATEGORIES;

/// Error returned when tree building fails.
///
/// Decode failures and unparsable sidecars are recovered locally and never
/// reach this type; only storage errors propagate.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Underlying storage failure (missing or unreadable directory).
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Builds the category tree from a [`Storage`] backend.
///
/// Stateless: every [`build`](Self::build) call walks storage afresh and
/// returns an independent snapshot.
pub struct TreeBuilder<'a> {
    storage: &'a dyn Storage,
    legacy_markdown: bool,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder over a storage backend.
    ///
    /// Plain Markdown (`.md`) is recognized by default alongside MDX.
    #[must_use]
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self {
            storage,
            legacy_markdown: true,
        }
    }

    /// Enable or disable recognition of plain `.md` sources.
    ///
    /// When disabled, only `.mdx` files appear in the tree.
    #[must_use]
    pub fn with_legacy_markdown(mut self, enabled: bool) -> Self {
        self.legacy_markdown = enabled;
        self
    }

    /// Build the ordered category list.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Storage`] if the content root or a category
    /// directory cannot be listed; this function performs no recovery.
    pub fn build(&self) -> Result<Vec<Category>, TreeError> {
        let root = Path::new("");
        let root_translations = Translations::load(self.storage, root);

        let mut categories = Vec::new();
        for entry in self.storage.list(root)? {
            // Only directories are categories; the root sidecar and any
            // stray files are skipped.
            if !entry.is_dir() || entry.name == TRANSLATIONS_FILE {
                continue;
            }
            let name = safe_decode(&entry.name).into_owned();
            let display_name = root_translations.get(&name);
            let dir = PathBuf::from(&entry.name);

            let items = if RESERVED_CATEGORIES.contains(&name.as_str()) {
                self.read_flat(&dir)?
            } else {
                self.read_directory(&dir)?
            };

            categories.push(Category {
                name,
                display_name,
                items,
            });
        }

        categories.sort_by(|a, b| {
            category_rank(&a.name)
                .cmp(&category_rank(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(categories)
    }

    /// True if the file name carries a recognized source extension.
    fn recognized(&self, file_name: &str) -> Option<SourceFormat> {
        match SourceFormat::from_file_name(file_name) {
            Some(SourceFormat::Md) if !self.legacy_markdown => None,
            other => other,
        }
    }

    /// Flat listing for reserved categories: direct files only, no
    /// recursion, no sidecar lookup.
    fn read_flat(&self, dir: &Path) -> Result<Vec<ContentItem>, TreeError> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        for entry in self.storage.list(dir)? {
            if entry.is_dir() {
                continue;
            }
            let Some(format) = self.recognized(&entry.name) else {
                continue;
            };
            let decoded = safe_decode(&entry.name);
            let base = base_name(&decoded).to_owned();
            if !seen.insert(base.clone()) {
                continue;
            }
            items.push(ContentItem::File {
                name: base.clone(),
                path: base,
                display_name: None,
                format,
            });
        }
        items.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(items)
    }

    /// Recursive walk of a regular category directory.
    fn read_directory(&self, dir: &Path) -> Result<Vec<ContentItem>, TreeError> {
        let translations = Translations::load(self.storage, dir);

        let mut items = Vec::new();
        // Base names already emitted; first physical variant scanned wins.
        let mut seen = HashSet::new();

        for entry in self.storage.list(dir)? {
            if entry.name == TRANSLATIONS_FILE {
                continue;
            }
            if entry.is_dir() {
                let children = self.read_directory(&dir.join(&entry.name))?;
                let decoded = safe_decode(&entry.name).into_owned();
                let display_name = translations.get(&decoded);
                items.push(ContentItem::Folder {
                    name: decoded.clone(),
                    path: decoded,
                    display_name,
                    children,
                });
            } else if let Some(format) = self.recognized(&entry.name) {
                let decoded = safe_decode(&entry.name);
                let base = base_name(&decoded).to_owned();
                if !seen.insert(base.clone()) {
                    continue;
                }
                let display_name = translations.get(&base);
                items.push(ContentItem::File {
                    name: base.clone(),
                    path: base,
                    display_name,
                    format,
                });
            }
        }

        // Files before folders, names ascending within each group.
        items.sort_by(|a, b| {
            a.is_folder()
                .cmp(&b.is_folder())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(items)
    }
}

/// Ordering rank for categories: `intro` first, `history` second, rest
/// alphabetical after.
fn category_rank(name: &str) -> u8 {
    match name {
        "intro" => 0,
        "history" => 1,
        _ => 2,
    }
}

/// Build the category tree from a storage backend with default settings.
///
/// # Errors
///
/// Returns [`TreeError::Storage`] if the content root or a category
/// directory cannot be listed.
pub fn build_tree(storage: &dyn Storage) -> Result<Vec<Category>, TreeError> {
    TreeBuilder::new(storage).build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use suvadi_storage::{FsStorage, MockStorage};

    use super::*;
    use crate::DisplayName;

    fn names(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(ContentItem::name).collect()
    }

    #[test]
    fn test_language_variants_collapse_to_one_file() {
        let storage = MockStorage::new()
            .with_file("grammar/uyir.ta.mdx", "a")
            .with_file("grammar/uyir.en.mdx", "b")
            .with_file("grammar/uyir.mdx", "c");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(names(&categories[0].items), vec!["uyir"]);
    }

    #[test]
    fn test_first_variant_scanned_wins_format() {
        // Mock lists lexicographically: uyir.en.md before uyir.ta.mdx
        let storage = MockStorage::new()
            .with_file("grammar/uyir.en.md", "a")
            .with_file("grammar/uyir.ta.mdx", "b");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(
            categories[0].items,
            vec![ContentItem::File {
                name: "uyir".to_owned(),
                path: "uyir".to_owned(),
                display_name: None,
                format: SourceFormat::Md,
            }]
        );
    }

    #[test]
    fn test_files_precede_folders_names_ascending() {
        let storage = MockStorage::new()
            .with_file("grammar/words/nouns.mdx", "x")
            .with_file("grammar/alpha/letters.mdx", "x")
            .with_file("grammar/zeta.mdx", "x")
            .with_file("grammar/beta.mdx", "x");

        let categories = build_tree(&storage).unwrap();
        let items = &categories[0].items;

        assert_eq!(names(items), vec!["beta", "zeta", "alpha", "words"]);
        assert!(!items[0].is_folder());
        assert!(!items[1].is_folder());
        assert!(items[2].is_folder());
        assert!(items[3].is_folder());
    }

    #[test]
    fn test_category_ordering_intro_history_first() {
        let storage = MockStorage::new()
            .with_file("poetry/kural.mdx", "x")
            .with_file("history/history.mdx", "x")
            .with_file("grammar/letters.mdx", "x")
            .with_file("intro/intro.mdx", "x");

        let categories = build_tree(&storage).unwrap();
        let category_names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(category_names, vec!["intro", "history", "grammar", "poetry"]);
    }

    #[test]
    fn test_reserved_categories_list_flat() {
        // Subfolders of intro are ignored; files are stripped of tags
        let storage = MockStorage::new()
            .with_file("intro/intro.ta.mdx", "x")
            .with_file("intro/intro.en.mdx", "x")
            .with_file("intro/drafts/old.mdx", "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(names(&categories[0].items), vec!["intro"]);
    }

    #[test]
    fn test_display_name_from_sidecar() {
        let storage = MockStorage::new()
            .with_file(
                "_translations.json",
                r#"{"grammar": {"ta": "இலக்கணம்", "en": "Grammar"}}"#,
            )
            .with_file(
                "grammar/_translations.json",
                r#"{"letters": {"ta": "எழுத்துகள்", "en": "Letters"}}"#,
            )
            .with_file("grammar/letters.ta.mdx", "x")
            .with_file("grammar/words.mdx", "x");

        let categories = build_tree(&storage).unwrap();
        let grammar = &categories[0];

        assert_eq!(
            grammar.display_name,
            Some(DisplayName {
                ta: "இலக்கணம்".to_owned(),
                en: "Grammar".to_owned(),
            })
        );
        assert_eq!(
            grammar.items[0].display_name(),
            Some(&DisplayName {
                ta: "எழுத்துகள்".to_owned(),
                en: "Letters".to_owned(),
            })
        );
        // "words" has no sidecar entry
        assert!(grammar.items[1].display_name().is_none());
    }

    #[test]
    fn test_unparsable_sidecar_yields_no_display_names() {
        let storage = MockStorage::new()
            .with_file("grammar/_translations.json", "{broken")
            .with_file("grammar/letters.mdx", "x")
            .with_file("grammar/words.mdx", "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(categories[0].items.len(), 2);
        assert!(categories[0]
            .items
            .iter()
            .all(|item| item.display_name().is_none()));
    }

    #[test]
    fn test_sidecar_never_listed_as_content() {
        let storage = MockStorage::new()
            .with_file("_translations.json", "{}")
            .with_file("grammar/_translations.json", "{}")
            .with_file("grammar/letters.mdx", "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(names(&categories[0].items), vec!["letters"]);
    }

    #[test]
    fn test_non_source_files_skipped() {
        let storage = MockStorage::new()
            .with_file("grammar/letters.mdx", "x")
            .with_file("grammar/diagram.png", "x")
            .with_file("grammar/notes.txt", "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(names(&categories[0].items), vec!["letters"]);
    }

    #[test]
    fn test_mdx_only_profile_ignores_md() {
        let storage = MockStorage::new()
            .with_file("grammar/letters.mdx", "x")
            .with_file("grammar/words.md", "x");

        let categories = TreeBuilder::new(&storage)
            .with_legacy_markdown(false)
            .build()
            .unwrap();

        assert_eq!(names(&categories[0].items), vec!["letters"]);
    }

    #[test]
    fn test_percent_encoded_names_decoded() {
        // "இலக்கணம்" percent-encoded as a directory name
        let encoded = "%E0%AE%87%E0%AE%B2%E0%AE%95%E0%AF%8D%E0%AE%95%E0%AE%A3%E0%AE%AE%E0%AF%8D";
        let storage =
            MockStorage::new().with_file(format!("{encoded}/letters.mdx"), "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(categories[0].name, "இலக்கணம்");
    }

    #[test]
    fn test_invalid_percent_encoding_falls_back_to_raw() {
        let storage = MockStorage::new().with_file("bad%FF%FEdir/page.mdx", "x");

        let categories = build_tree(&storage).unwrap();

        assert_eq!(categories[0].name, "bad%FF%FEdir");
    }

    #[test]
    fn test_nested_tree() {
        let storage = MockStorage::new()
            .with_file("grammar/letters/uyir.ta.mdx", "x")
            .with_file("grammar/letters/mei.mdx", "x")
            .with_file("grammar/overview.mdx", "x");

        let categories = build_tree(&storage).unwrap();
        let grammar = &categories[0];

        assert_eq!(names(&grammar.items), vec!["overview", "letters"]);
        let ContentItem::Folder { children, .. } = &grammar.items[1] else {
            panic!("expected folder");
        };
        assert_eq!(names(children), vec!["mei", "uyir"]);
    }

    #[test]
    fn test_missing_root_propagates() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp.path().join("nonexistent"));

        let result = build_tree(&storage);

        assert!(matches!(result, Err(TreeError::Storage(_))));
    }

    #[test]
    fn test_empty_root() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp.path());

        let categories = build_tree(&storage).unwrap();

        assert!(categories.is_empty());
    }

    #[test]
    fn test_snapshot_independent_of_previous_calls() {
        let storage = MockStorage::new().with_file("grammar/letters.mdx", "x");

        let first = build_tree(&storage).unwrap();
        let second = build_tree(&storage).unwrap();

        assert_eq!(first, second);
    }
}
