//! CLI command implementations.

pub(crate) mod serve;
pub(crate) mod show;
pub(crate) mod tree;

use std::path::PathBuf;
use std::sync::Arc;

pub(crate) use serve::ServeArgs;
pub(crate) use show::ShowArgs;
use suvadi_config::{CliSettings, Config};
use suvadi_content::{FormatProfile, Language, Library};
use suvadi_storage::FsStorage;
pub(crate) use tree::TreeArgs;

use crate::error::CliError;

/// Load configuration and open the content library for offline commands.
///
/// Returns the library together with the configured default language.
pub(crate) fn open_library(
    config_path: Option<&std::path::Path>,
    source_dir: Option<PathBuf>,
) -> Result<(Library, Language), CliError> {
    let cli_settings = CliSettings {
        source_dir,
        ..Default::default()
    };
    let config = Config::load(config_path, Some(&cli_settings))?;

    let storage = Arc::new(FsStorage::new(config.content_resolved.source_dir.clone()));
    let profile = if config.content_resolved.legacy_markdown {
        FormatProfile::WithLegacyMarkdown
    } else {
        FormatProfile::MdxOnly
    };
    let library = Library::new(storage).with_profile(profile);

    // Validated at load time, so an unknown tag cannot reach this point
    let default_language = config
        .content_resolved
        .default_language
        .parse()
        .unwrap_or_default();

    Ok((library, default_language))
}
