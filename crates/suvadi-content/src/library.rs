//! Two-call facade over the tree builder and content resolver.

use std::sync::Arc;

use suvadi_storage::Storage;
use suvadi_tree::{Category, TreeBuilder, TreeError};

use crate::language::Language;
use crate::profile::FormatProfile;
use crate::resolver::{ContentError, ContentResolver, RenderedContent};

/// The engine's public surface: navigation tree plus single-page lookup.
///
/// Cheap to share behind an `Arc`; every call re-reads storage, so edits
/// to the content directory are visible on the next request.
pub struct Library {
    storage: Arc<dyn Storage>,
    resolver: ContentResolver,
    profile: FormatProfile,
}

impl Library {
    /// Create a library over `storage` with the default format profile.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            resolver: ContentResolver::new(Arc::clone(&storage)),
            storage,
            profile: FormatProfile::default(),
        }
    }

    /// Set the supported-format profile.
    #[must_use]
    pub fn with_profile(mut self, profile: FormatProfile) -> Self {
        self.profile = profile;
        self.resolver = ContentResolver::new(Arc::clone(&self.storage)).with_profile(profile);
        self
    }

    /// Build the navigation tree from the current storage state.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the content root cannot be listed.
    pub fn categories(&self) -> Result<Vec<Category>, TreeError> {
        TreeBuilder::new(self.storage.as_ref())
            .with_legacy_markdown(self.profile.supports_markdown())
            .build()
    }

    /// Resolve and render the document at `segments` for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no candidate file exists, or
    /// [`ContentError::Storage`] if a matched file cannot be read.
    pub fn page<S: AsRef<str>>(
        &self,
        segments: &[S],
        language: Language,
    ) -> Result<RenderedContent, ContentError> {
        self.resolver.resolve(segments, language)
    }
}
