//! YAML frontmatter handling.
//!
//! A document may start with a frontmatter block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: வணக்கம்
//! ---
//! body text
//! ```
//!
//! [`split`] separates the raw block from the body without interpreting it,
//! so stripping never fails. [`parse`] additionally decodes the block as
//! YAML and reports malformed frontmatter to the caller.

/// Parsed frontmatter value.
///
/// Kept as a raw YAML value; the original site passes frontmatter through
/// to the presentation layer without interpreting it.
pub type Frontmatter = serde_yaml::Value;

/// Error returned when a frontmatter block is not valid YAML.
#[derive(Debug, thiserror::Error)]
#[error("invalid frontmatter: {0}")]
pub struct FrontmatterError(#[from] serde_yaml::Error);

/// Split a document into its raw frontmatter block and body.
///
/// Returns `(Some(yaml), body)` when the document starts with a `---` line
/// and a closing `---` line exists; `(None, input)` otherwise. The returned
/// yaml excludes the delimiter lines.
#[must_use]
pub fn split(input: &str) -> (Option<&str>, &str) {
    let Some(rest) = input.strip_prefix("---\n").or_else(|| {
        input
            .strip_prefix("---\r\n")
            .or_else(|| (input == "---").then_some(""))
    }) else {
        return (None, input);
    };

    // Find the closing delimiter on its own line.
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole input as body.
    (None, input)
}

/// Strip frontmatter, returning only the body.
#[must_use]
pub fn strip(input: &str) -> &str {
    split(input).1
}

/// Parse frontmatter as YAML, returning the value and the body.
///
/// Returns `Ok((None, body))` when no frontmatter block is present.
///
/// # Errors
///
/// Returns [`FrontmatterError`] if a block is present but is not valid YAML.
pub fn parse(input: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let (raw, body) = split(input);
    match raw {
        Some(yaml) => {
            let value: Frontmatter = serde_yaml::from_str(yaml)?;
            Ok((Some(value), body))
        }
        None => Ok((None, body)),
    }
}
