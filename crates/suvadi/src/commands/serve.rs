//! `suvadi serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use suvadi_config::{CliSettings, Config};
use suvadi_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover suvadi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Default language for requests without a preference (overrides config).
    #[arg(short, long)]
    language: Option<String>,

    /// Enable verbose output (log each served request).
    #[arg(short, long)]
    pub verbose: bool,

    /// Recognize legacy .md sources (default: enabled).
    #[arg(long)]
    legacy_markdown: Option<bool>,

    /// Serve MDX sources only.
    #[arg(long, conflicts_with = "legacy_markdown")]
    no_legacy_markdown: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let legacy_markdown = self.resolve_legacy_markdown();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            default_language: self.language,
            legacy_markdown,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Source directory: {}",
            config.content_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Default language: {}",
            config.content_resolved.default_language
        ));
        if config.content_resolved.legacy_markdown {
            output.info("Legacy markdown: enabled");
        } else {
            output.info("Legacy markdown: disabled");
        }

        let server_config = server_config_from_config(&config, self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `legacy_markdown` from --legacy-markdown/--no-legacy-markdown.
    fn resolve_legacy_markdown(&self) -> Option<bool> {
        self.no_legacy_markdown
            .then_some(false)
            .or(self.legacy_markdown)
    }
}
