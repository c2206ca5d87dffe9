//! Defensive percent-decoding of filesystem names and path segments.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Percent-decode a name, falling back to the raw input on failure.
///
/// Tamil filenames frequently arrive percent-encoded (from URLs or from
/// tooling that escaped them); names that are not valid percent-encoded
/// UTF-8 are returned unchanged. This function never fails.
#[must_use]
pub fn safe_decode(name: &str) -> Cow<'_, str> {
    match percent_decode_str(name).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(name),
    }
}
