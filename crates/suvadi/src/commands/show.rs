//! `suvadi show` command implementation.

use std::path::PathBuf;

use clap::Args;
use suvadi_content::{Language, RenderedContent};

use crate::commands::open_library;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Document path, e.g. "guide/setup" or "intro".
    path: String,

    /// Path to configuration file (default: auto-discover suvadi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Language to resolve for (default: configured default language).
    #[arg(short, long)]
    language: Option<Language>,

    /// Print the rendered document as JSON.
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document cannot be
    /// resolved.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (library, default_language) = open_library(self.config.as_deref(), self.source_dir)?;
        let language = self.language.unwrap_or(default_language);

        let segments: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();
        let content = library.page(&segments, language)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&content)?);
            return Ok(());
        }

        if let RenderedContent::Document {
            frontmatter: Some(fm),
            ..
        } = &content
        {
            output.highlight(&format!("frontmatter: {fm:?}"));
        }
        println!("{}", content.html());
        output.success(&format!("{} ({language})", self.path));

        Ok(())
    }
}
