//! Single-document resolution and rendering.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use suvadi_renderer::{Frontmatter, MarkdownRenderer, frontmatter};
use suvadi_storage::{Storage, StorageError};
use suvadi_tree::{RESERVED_CATEGORIES, SourceFormat, safe_decode};

use crate::language::Language;
use crate::profile::FormatProfile;

/// Rendered document, tagged by source format.
///
/// MDX sources yield a [`Document`](Self::Document) carrying parsed
/// frontmatter; legacy Markdown sources yield a bare HTML string. The
/// presentation layer selects its rendering path on this tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum RenderedContent {
    /// Rich-format document with optional frontmatter.
    Document {
        /// Parsed YAML frontmatter, passed through uninterpreted.
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        frontmatter: Option<Frontmatter>,
        /// Rendered HTML body.
        html: String,
    },
    /// Legacy plain-Markdown document (frontmatter stripped).
    Html {
        /// Rendered HTML body.
        html: String,
    },
}

impl RenderedContent {
    /// Rendered HTML, whichever variant.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Document { html, .. } | Self::Html { html } => html,
        }
    }
}

/// Error returned when content resolution fails.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No candidate file exists for the path/language combination.
    #[error(
        "document not found: {base}.{language}.mdx/md or {base}.mdx/md",
        base = .base.display()
    )]
    NotFound {
        /// Attempted extensionless base path.
        base: PathBuf,
        /// Requested language.
        language: Language,
    },
    /// Underlying storage failure while reading a matched file.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Resolves a path/language pair to a single rendered document.
///
/// Stateless single-shot lookups: each call runs the four-step fallback
/// order against storage and returns, holding no state between calls.
pub struct ContentResolver {
    storage: Arc<dyn Storage>,
    renderer: MarkdownRenderer,
    profile: FormatProfile,
}

impl ContentResolver {
    /// Create a resolver with the default (legacy-markdown) profile.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            renderer: MarkdownRenderer::new(),
            profile: FormatProfile::default(),
        }
    }

    /// Set the supported-format profile.
    #[must_use]
    pub fn with_profile(mut self, profile: FormatProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Resolve and render the document at `segments` for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no candidate file exists, or
    /// [`ContentError::Storage`] if a matched file cannot be read.
    pub fn resolve<S: AsRef<str>>(
        &self,
        segments: &[S],
        language: Language,
    ) -> Result<RenderedContent, ContentError> {
        let mut decoded: Vec<String> = segments
            .iter()
            .map(|s| safe_decode(s.as_ref()).into_owned())
            .collect();

        // The reserved categories store their single document at
        // <category>/<category>.<ext>, not at <category>.<ext>.
        if decoded.len() == 1 && RESERVED_CATEGORIES.contains(&decoded[0].as_str()) {
            decoded.push(decoded[0].clone());
        }

        let base: PathBuf = decoded.iter().collect();
        let (path, format) = self
            .find_source(&base, language)
            .ok_or_else(|| ContentError::NotFound {
                base: base.clone(),
                language,
            })?;

        let text = self.storage.read(&path)?;
        Ok(self.render(&path, &text, format))
    }

    /// Locate the best-matching source file.
    ///
    /// Language-specific variants are probed before language-neutral ones;
    /// within each step, MDX before legacy Markdown. First match wins.
    fn find_source(&self, base: &Path, language: Language) -> Option<(PathBuf, SourceFormat)> {
        let suffixes = [Some(language), None];
        for lang in suffixes {
            for &format in self.profile.formats() {
                let candidate = match lang {
                    Some(lang) => {
                        with_suffix(base, &format!("{lang}.{}", format.extension()))
                    }
                    None => with_suffix(base, format.extension()),
                };
                if self.storage.exists(&candidate) {
                    return Some((candidate, format));
                }
            }
        }
        None
    }

    fn render(&self, path: &Path, text: &str, format: SourceFormat) -> RenderedContent {
        match format {
            SourceFormat::Mdx => {
                let (fm, body) = match frontmatter::parse(text) {
                    Ok(pair) => pair,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse frontmatter");
                        (None, frontmatter::strip(text))
                    }
                };
                RenderedContent::Document {
                    frontmatter: fm,
                    html: self.renderer.render(body),
                }
            }
            SourceFormat::Md => RenderedContent::Html {
                html: self.renderer.render(frontmatter::strip(text)),
            },
        }
    }
}

/// Append `.suffix` to a path's final component.
///
/// `Path::with_extension` would truncate at the last dot, which mangles
/// names like `uyir.ta`; the suffix is appended verbatim instead.
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use suvadi_storage::MockStorage;

    use super::*;

    fn resolver(storage: MockStorage) -> ContentResolver {
        ContentResolver::new(Arc::new(storage))
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_language_specific_mdx_wins_over_neutral() {
        let storage = MockStorage::new()
            .with_file("guide/setup.ta.mdx", "# தமிழ் வழிகாட்டி")
            .with_file("guide/setup.mdx", "# Neutral");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "setup"]), Language::Ta)
            .unwrap();

        assert!(content.html().contains("தமிழ் வழிகாட்டி"));
    }

    #[test]
    fn test_neutral_fallback_when_no_language_variant() {
        let storage = MockStorage::new().with_file("intro/intro.mdx", "# Welcome");

        let content = resolver(storage)
            .resolve(&segments(&["intro"]), Language::En)
            .unwrap();

        assert!(content.html().contains("<h1>Welcome</h1>"));
    }

    #[test]
    fn test_language_md_wins_over_neutral_mdx() {
        // Step 2 (lang .md) comes before step 3 (neutral .mdx)
        let storage = MockStorage::new()
            .with_file("guide/setup.en.md", "english markdown")
            .with_file("guide/setup.mdx", "neutral mdx");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "setup"]), Language::En)
            .unwrap();

        assert_eq!(
            content,
            RenderedContent::Html {
                html: "<p>english markdown</p>\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_reserved_category_segment_duplicated() {
        let storage = MockStorage::new().with_file("history/history.ta.mdx", "# வரலாறு");

        let content = resolver(storage)
            .resolve(&segments(&["history"]), Language::Ta)
            .unwrap();

        assert!(content.html().contains("வரலாறு"));
    }

    #[test]
    fn test_reserved_name_deeper_in_path_not_duplicated() {
        // Duplication only applies to a single-segment path
        let storage = MockStorage::new().with_file("guide/intro.mdx", "# Guide intro");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "intro"]), Language::Ta)
            .unwrap();

        assert!(content.html().contains("Guide intro"));
    }

    #[test]
    fn test_not_found_names_base_and_language() {
        let storage = MockStorage::new().with_file("guide/setup.mdx", "x");

        let err = resolver(storage)
            .resolve(&segments(&["missing", "page"]), Language::En)
            .unwrap_err();

        let ContentError::NotFound { base, language } = &err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(base, &PathBuf::from("missing/page"));
        assert_eq!(*language, Language::En);
        assert!(err.to_string().contains("missing/page"));
        assert!(err.to_string().contains("en"));
    }

    #[test]
    fn test_invalid_percent_encoding_uses_raw_segment() {
        let storage = MockStorage::new().with_file("guide/bad%FF%FEpage.mdx", "# Raw");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "bad%FF%FEpage"]), Language::Ta)
            .unwrap();

        assert!(content.html().contains("Raw"));
    }

    #[test]
    fn test_percent_encoded_segments_decoded() {
        let storage = MockStorage::new().with_file("இலக்கணம்/எழுத்து.mdx", "# எழுத்து");

        let encoded = segments(&[
            "%E0%AE%87%E0%AE%B2%E0%AE%95%E0%AF%8D%E0%AE%95%E0%AE%A3%E0%AE%AE%E0%AF%8D",
            "%E0%AE%8E%E0%AE%B4%E0%AF%81%E0%AE%A4%E0%AF%8D%E0%AE%A4%E0%AF%81",
        ]);
        let content = resolver(storage).resolve(&encoded, Language::Ta).unwrap();

        assert!(content.html().contains("எழுத்து"));
    }

    #[test]
    fn test_mdx_frontmatter_parsed() {
        let storage = MockStorage::new().with_file(
            "guide/setup.mdx",
            "---\ntitle: Setup\norder: 2\n---\n# Setup\n",
        );

        let content = resolver(storage)
            .resolve(&segments(&["guide", "setup"]), Language::Ta)
            .unwrap();

        let RenderedContent::Document { frontmatter, html } = content else {
            panic!("expected Document");
        };
        let fm = frontmatter.unwrap();
        assert_eq!(fm["title"], "Setup");
        assert_eq!(fm["order"], 2);
        assert!(html.contains("<h1>Setup</h1>"));
    }

    #[test]
    fn test_mdx_invalid_frontmatter_recovered() {
        let storage = MockStorage::new()
            .with_file("guide/setup.mdx", "---\n: : broken [\n---\n# Body\n");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "setup"]), Language::Ta)
            .unwrap();

        let RenderedContent::Document { frontmatter, html } = content else {
            panic!("expected Document");
        };
        assert!(frontmatter.is_none());
        assert!(html.contains("<h1>Body</h1>"));
    }

    #[test]
    fn test_md_frontmatter_stripped() {
        let storage = MockStorage::new()
            .with_file("guide/setup.md", "---\ntitle: Setup\n---\nplain body\n");

        let content = resolver(storage)
            .resolve(&segments(&["guide", "setup"]), Language::Ta)
            .unwrap();

        assert_eq!(
            content,
            RenderedContent::Html {
                html: "<p>plain body</p>\n".to_owned(),
            }
        );
    }

    #[test]
    fn test_mdx_only_profile_ignores_md() {
        let storage = MockStorage::new().with_file("guide/setup.md", "markdown only");

        let result = ContentResolver::new(Arc::new(storage))
            .with_profile(FormatProfile::MdxOnly)
            .resolve(&segments(&["guide", "setup"]), Language::Ta);

        assert!(matches!(result, Err(ContentError::NotFound { .. })));
    }

    #[test]
    fn test_gfm_table_rendered() {
        let storage = MockStorage::new().with_file(
            "guide/table.mdx",
            "| letter | sound |\n|---|---|\n| அ | a |\n",
        );

        let content = resolver(storage)
            .resolve(&segments(&["guide", "table"]), Language::Ta)
            .unwrap();

        assert!(content.html().contains("<table>"));
        assert!(content.html().contains("<td>அ</td>"));
    }

    #[test]
    fn test_with_suffix_keeps_dots() {
        assert_eq!(
            with_suffix(Path::new("guide/v1.2-notes"), "ta.mdx"),
            PathBuf::from("guide/v1.2-notes.ta.mdx")
        );
    }
}
