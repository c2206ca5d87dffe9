//! Tree node types and base-name helpers.

use serde::Serialize;

use crate::translations::DisplayName;

/// Source format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Plain Markdown (legacy variant).
    Md,
    /// MDX (rich format).
    Mdx,
}

impl SourceFormat {
    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Mdx => "mdx",
        }
    }

    /// Detect the format from a file name, if it carries a recognized
    /// source extension.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".mdx") {
            Some(Self::Mdx)
        } else if name.ends_with(".md") {
            Some(Self::Md)
        } else {
            None
        }
    }
}

/// Node in a category's content tree.
///
/// Recursive tagged variant: folders own their children directly, files are
/// leaves. `name` is the canonical language-agnostic identifier; `path` is
/// the URL segment (unique among siblings - both equal the decoded base
/// name). `display_name` is present only when the immediate directory's
/// translations sidecar defines the base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentItem {
    /// Logical file, possibly backed by several language-suffixed
    /// physical files.
    #[serde(rename_all = "camelCase")]
    File {
        /// Base name (extension and language tag stripped).
        name: String,
        /// URL segment.
        path: String,
        /// Localized labels from the sidecar, if defined.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<DisplayName>,
        /// Format of the first physical variant scanned.
        format: SourceFormat,
    },
    /// Directory with child items.
    #[serde(rename_all = "camelCase")]
    Folder {
        /// Decoded directory name.
        name: String,
        /// URL segment.
        path: String,
        /// Localized labels from the sidecar, if defined.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<DisplayName>,
        /// Ordered children (files first, then folders, names ascending).
        children: Vec<ContentItem>,
    },
}

impl ContentItem {
    /// Item name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    /// Localized display labels, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&DisplayName> {
        match self {
            Self::File { display_name, .. } | Self::Folder { display_name, .. } => {
                display_name.as_ref()
            }
        }
    }

    /// True if this item is a folder.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

/// Top-level content grouping, one per subdirectory of the content root.
///
/// For the reserved categories (`intro`, `history`) `items` is a flat file
/// list; for all others it is a full tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Decoded category name.
    pub name: String,
    /// Localized labels from the root sidecar, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<DisplayName>,
    /// Ordered items.
    pub items: Vec<ContentItem>,
}

/// Strip a recognized source extension (`.md` / `.mdx`) from a file name.
///
/// Returns the name unchanged if no recognized extension is present.
#[must_use]
pub fn strip_source_extension(name: &str) -> &str {
    name.strip_suffix(".mdx")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name)
}

/// Compute the base name: source extension stripped, then an optional
/// trailing language tag stripped.
///
/// `"uyir.ta.mdx"`, `"uyir.en.md"`, and `"uyir.md"` all yield `"uyir"`.
#[must_use]
pub fn base_name(file_name: &str) -> &str {
    let without_ext = strip_source_extension(file_name);
    for tag in crate::LANGUAGE_TAGS {
        if let Some(stripped) = without_ext.strip_suffix(tag)
            && let Some(stripped) = stripped.strip_suffix('.')
        {
            return stripped;
        }
    }
    without_ext
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_source_format_from_file_name() {
        assert_eq!(SourceFormat::from_file_name("a.mdx"), Some(SourceFormat::Mdx));
        assert_eq!(SourceFormat::from_file_name("a.md"), Some(SourceFormat::Md));
        assert_eq!(SourceFormat::from_file_name("a.ta.md"), Some(SourceFormat::Md));
        assert_eq!(SourceFormat::from_file_name("notes.txt"), None);
        assert_eq!(SourceFormat::from_file_name("_translations.json"), None);
    }

    #[test]
    fn test_strip_source_extension() {
        assert_eq!(strip_source_extension("uyir.mdx"), "uyir");
        assert_eq!(strip_source_extension("uyir.md"), "uyir");
        assert_eq!(strip_source_extension("uyir.ta.md"), "uyir.ta");
        assert_eq!(strip_source_extension("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_base_name_strips_language_tag() {
        assert_eq!(base_name("uyir.ta.mdx"), "uyir");
        assert_eq!(base_name("uyir.en.md"), "uyir");
        assert_eq!(base_name("uyir.mdx"), "uyir");
        assert_eq!(base_name("uyir.md"), "uyir");
    }

    #[test]
    fn test_base_name_keeps_unrelated_dots() {
        // Only a trailing .ta/.en before the extension is a language tag
        assert_eq!(base_name("v1.2-notes.mdx"), "v1.2-notes");
        assert_eq!(base_name("tattoo.mdx"), "tattoo");
        assert_eq!(base_name("கதை.ta.mdx"), "கதை");
    }

    #[test]
    fn test_content_item_accessors() {
        let file = ContentItem::File {
            name: "uyir".to_owned(),
            path: "uyir".to_owned(),
            display_name: None,
            format: SourceFormat::Mdx,
        };
        let folder = ContentItem::Folder {
            name: "letters".to_owned(),
            path: "letters".to_owned(),
            display_name: None,
            children: vec![file.clone()],
        };

        assert_eq!(file.name(), "uyir");
        assert!(!file.is_folder());
        assert!(folder.is_folder());
        assert!(folder.display_name().is_none());
    }
}
