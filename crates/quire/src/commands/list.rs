//! `quire list` command implementation.

use clap::Args;
use quire_chapters::{Listing, Navigation};
use quire_content::CategorySelector;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Category to list, or `*` for all categories.
    #[arg(default_value = "*")]
    selector: String,

    /// Print chapters as JSON.
    #[arg(long, conflicts_with = "nav")]
    json: bool,

    /// Print the navigation tree as JSON.
    #[arg(long)]
    nav: bool,
}

impl ListArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let resolver = global.resolver()?;

        let Ok(selector) = self.selector.parse::<CategorySelector>();
        let listing = resolver.all(&selector)?;
        report_skipped(&output, &listing);

        if self.nav {
            let nav = Navigation::from_chapters(&listing.chapters);
            output.print(&serde_json::to_string_pretty(&nav)?);
        } else if self.json {
            output.print(&serde_json::to_string_pretty(&listing.chapters)?);
        } else {
            for chapter in &listing.chapters {
                let index = chapter
                    .index()
                    .map_or_else(|| "  -".to_owned(), |i| format!("{i:>3}"));
                output.row(
                    &format!("{index}  {}/{}", chapter.category(), chapter.slug()),
                    chapter.title(),
                );
            }
        }
        Ok(())
    }
}

/// Print a warning for every chapter left out of a listing.
fn report_skipped(output: &Output, listing: &Listing) {
    for skipped in &listing.skipped {
        output.warning(&format!(
            "Skipped {}/{}: {}",
            skipped.category, skipped.file_name, skipped.reason
        ));
    }
}
