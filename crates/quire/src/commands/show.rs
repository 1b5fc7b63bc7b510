//! `quire show` command implementation.

use clap::Args;
use quire_renderer::Placeholders;

use super::{GlobalArgs, parse_key_value};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Chapter category.
    category: String,

    /// Chapter slug (with or without its index prefix).
    slug: String,

    /// Placeholder value, overriding config (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    set: Vec<(String, String)>,

    /// Print the chapter as JSON instead of its HTML body.
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let resolver = global.resolver()?;

        let substitutions: Placeholders = self.set.into_iter().collect();
        let chapter = resolver.find(&self.category, &self.slug, &substitutions)?;

        if self.json {
            output.print(&serde_json::to_string_pretty(&chapter)?);
        } else {
            output.print(chapter.body().unwrap_or_default());
        }
        Ok(())
    }
}
