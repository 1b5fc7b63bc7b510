//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod list;
pub(crate) mod show;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use quire_chapters::ChapterResolver;
use quire_config::{CliSettings, Config};
use quire_content::{FsContentStore, SlugMatch};
use quire_renderer::{MarkdownRenderer, Placeholders};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use list::ListArgs;
pub(crate) use show::ShowArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long, global = true, env = "QUIRE_ROOT")]
    root: Option<PathBuf>,

    /// Slug matching mode: exact or substring (overrides config).
    #[arg(long, global = true, value_parser = parse_slug_match)]
    slug_match: Option<SlugMatch>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with command line overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            slug_match: self.slug_match,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Build a resolver over the configured content root.
    pub(crate) fn resolver(&self) -> Result<ChapterResolver, CliError> {
        let config = self.load_config()?;
        tracing::info!(
            root = %config.content_resolved.root.display(),
            config = ?config.config_path,
            "Opening content store"
        );

        let store = FsContentStore::open(
            config.content_resolved.root.clone(),
            config.content_resolved.slug_match,
        )?;
        let renderer = MarkdownRenderer::new()
            .with_gfm(config.markdown.gfm)
            .with_heading_ids(config.markdown.heading_ids);
        let defaults: Placeholders = config.placeholders.into_iter().collect();

        Ok(ChapterResolver::new(Arc::new(store), Arc::new(renderer)).with_placeholders(defaults))
    }
}

fn parse_slug_match(value: &str) -> Result<SlugMatch, String> {
    value.parse()
}

/// Parse a `key=value` placeholder assignment.
pub(crate) fn parse_key_value(value: &str) -> Result<(String, String), String> {
    let (key, val) = value
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{value}'"))?;
    if key.is_empty() || key.contains('%') {
        return Err(format!("invalid placeholder name '{key}'"));
    }
    Ok((key.to_owned(), val.to_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("name=World").unwrap(),
            ("name".to_owned(), "World".to_owned())
        );
        assert_eq!(
            parse_key_value("expr=a=b").unwrap(),
            ("expr".to_owned(), "a=b".to_owned())
        );
        assert_eq!(
            parse_key_value("empty=").unwrap(),
            ("empty".to_owned(), String::new())
        );
    }

    #[test]
    fn test_parse_key_value_rejects_malformed() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
        assert!(parse_key_value("%name%=value").is_err());
    }

    #[test]
    fn test_parse_slug_match() {
        assert_eq!(parse_slug_match("substring").unwrap(), SlugMatch::Substring);
        assert!(parse_slug_match("regex").is_err());
    }
}
