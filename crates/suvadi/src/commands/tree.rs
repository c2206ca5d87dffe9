//! `suvadi tree` command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use suvadi_content::Language;
use suvadi_tree::{Category, ContentItem, DisplayName};

use crate::commands::open_library;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Path to configuration file (default: auto-discover suvadi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Language for display labels (default: configured default language).
    #[arg(short, long)]
    language: Option<Language>,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content root cannot
    /// be listed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (library, default_language) = open_library(self.config.as_deref(), self.source_dir)?;
        let categories = library.categories()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
            return Ok(());
        }

        let language = self.language.unwrap_or(default_language);
        print!("{}", format_tree(&categories, language));
        output.success(&format!("{} categories", categories.len()));

        Ok(())
    }
}

/// Localized label for a tree node, falling back to the raw name.
fn label<'a>(name: &'a str, display_name: Option<&'a DisplayName>, language: Language) -> &'a str {
    match (display_name, language) {
        (Some(dn), Language::Ta) => &dn.ta,
        (Some(dn), Language::En) => &dn.en,
        (None, _) => name,
    }
}

/// Format the tree as indented text.
fn format_tree(categories: &[Category], language: Language) -> String {
    let mut out = String::new();
    for category in categories {
        let category_label = label(&category.name, category.display_name.as_ref(), language);
        let _ = writeln!(out, "{category_label}");
        for item in &category.items {
            format_item(&mut out, item, language, 1);
        }
    }
    out
}

fn format_item(out: &mut String, item: &ContentItem, language: Language, depth: usize) {
    let indent = "  ".repeat(depth);
    let item_label = label(item.name(), item.display_name(), language);
    match item {
        ContentItem::File { .. } => {
            let _ = writeln!(out, "{indent}{item_label}");
        }
        ContentItem::Folder { children, .. } => {
            let _ = writeln!(out, "{indent}{item_label}/");
            for child in children {
                format_item(out, child, language, depth + 1);
            }
        }
    }
}
