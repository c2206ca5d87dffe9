//! Per-directory translations sidecar.
//!
//! Each directory may carry a `_translations.json` file mapping base names
//! to localized labels:
//!
//! ```json
//! {
//!     "letters": { "ta": "எழுத்துகள்", "en": "Letters" }
//! }
//! ```
//!
//! The sidecar is scoped to its own directory only; subdirectories load
//! their own. A missing or unparsable sidecar means "no translations":
//! parse failures are logged and never surfaced to the caller.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use suvadi_storage::Storage;

/// Name of the sidecar translations file.
pub const TRANSLATIONS_FILE: &str = "_translations.json";

/// Localized display labels for one base name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayName {
    /// Tamil label.
    pub ta: String,
    /// English label.
    pub en: String,
}

/// Translations loaded from one directory's sidecar.
#[derive(Debug, Default)]
pub struct Translations {
    entries: HashMap<String, DisplayName>,
}

impl Translations {
    /// Load the sidecar for `dir`, if present.
    ///
    /// A missing sidecar yields an empty map. A sidecar that exists but
    /// does not parse is treated the same way, after a warning.
    pub fn load(storage: &dyn Storage, dir: &Path) -> Self {
        let sidecar = dir.join(TRANSLATIONS_FILE);
        if !storage.exists(&sidecar) {
            return Self::default();
        }
        let Ok(content) = storage.read(&sidecar) else {
            return Self::default();
        };
        match serde_json::from_str::<HashMap<String, DisplayName>>(&content) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::warn!(path = %sidecar.display(), error = %e, "Failed to parse translations sidecar");
                Self::default()
            }
        }
    }

    /// Look up the labels for a base name.
    #[must_use]
    pub fn get(&self, base_name: &str) -> Option<DisplayName> {
        self.entries.get(base_name).cloned()
    }

    /// True if no entries are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
