//! HTTP server for the suvadi content engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `/api/tree` - the navigation tree of categories and items
//! - `/api/content/{*path}` - a single rendered document
//!
//! Language selection per request: the `lang` query parameter wins, then a
//! `language` cookie, then the configured default.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use suvadi_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         source_dir: PathBuf::from("contents"),
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use suvadi_content::{FormatProfile, Language, Library};
use suvadi_storage::FsStorage;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Language served when a request carries no preference.
    pub default_language: Language,
    /// Whether plain `.md` sources are still recognized.
    pub legacy_markdown: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            source_dir: PathBuf::from("contents"),
            default_language: Language::default(),
            legacy_markdown: true,
            verbose: false,
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FsStorage::new(config.source_dir.clone()));

    let profile = if config.legacy_markdown {
        FormatProfile::WithLegacyMarkdown
    } else {
        FormatProfile::MdxOnly
    };
    let library = Library::new(storage).with_profile(profile);

    let state = Arc::new(AppState {
        library,
        default_language: config.default_language,
        verbose: config.verbose,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from suvadi config.
#[must_use]
pub fn server_config_from_config(config: &suvadi_config::Config, verbose: bool) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.content_resolved.source_dir.clone(),
        // Validated at load time, so an unknown tag cannot reach this point
        default_language: config
            .content_resolved
            .default_language
            .parse()
            .unwrap_or_default(),
        legacy_markdown: config.content_resolved.legacy_markdown,
        verbose,
    }
}
