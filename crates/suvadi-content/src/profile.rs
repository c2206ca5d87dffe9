//! Supported source format profiles.
//!
//! Two deployments of the original site diverged only in whether plain
//! Markdown sources were still recognized. Rather than forking the
//! resolver, it is parameterized on a profile.

use suvadi_tree::SourceFormat;

/// Which source formats the engine recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatProfile {
    /// MDX plus legacy plain Markdown (the original dual-format variant).
    #[default]
    WithLegacyMarkdown,
    /// MDX only.
    MdxOnly,
}

impl FormatProfile {
    /// True if plain `.md` sources are recognized.
    #[must_use]
    pub fn supports_markdown(self) -> bool {
        matches!(self, Self::WithLegacyMarkdown)
    }

    /// Formats probed at each fallback step, in priority order.
    #[must_use]
    pub fn formats(self) -> &'static [SourceFormat] {
        match self {
            Self::WithLegacyMarkdown => &[SourceFormat::Mdx, SourceFormat::Md],
            Self::MdxOnly => &[SourceFormat::Mdx],
        }
    }
}
