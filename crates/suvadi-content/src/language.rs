//! Two-valued language preference.

use std::fmt;
use std::str::FromStr;

/// Reader language preference.
///
/// The default is Tamil, matching the site's default when no preference
/// has been persisted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Tamil (`ta`).
    #[default]
    Ta,
    /// English (`en`).
    En,
}

impl Language {
    /// Filename tag / preference value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ta => "ta",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown language value.
#[derive(Debug, thiserror::Error)]
#[error("unknown language '{0}', expected 'ta' or 'en'")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ta" => Ok(Self::Ta),
            "en" => Ok(Self::En),
            other => Err(ParseLanguageError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tamil() {
        assert_eq!(Language::default(), Language::Ta);
    }

    #[test]
    fn test_round_trip() {
        assert_eq!("ta".parse::<Language>().unwrap(), Language::Ta);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(Language::Ta.to_string(), "ta");
        assert_eq!(Language::En.to_string(), "en");
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("fr"));
    }
}
