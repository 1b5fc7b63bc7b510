//! `quire check` command implementation.

use clap::Args;
use quire_content::CategorySelector;
use quire_renderer::Placeholders;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Category to check, or `*` for all categories.
    #[arg(default_value = "*")]
    selector: String,
}

impl CheckArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let resolver = global.resolver()?;

        let Ok(selector) = self.selector.parse::<CategorySelector>();
        let entries = resolver.entries(&selector)?;
        output.info(&format!("Checking {} chapter(s)", entries.len()));

        let substitutions = Placeholders::new();
        let mut failures = 0;
        for entry in &entries {
            if let Err(err) = resolver.render_entry(entry, &substitutions) {
                output.error(&format!("{}/{}: {err}", entry.category, entry.file_name));
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(CliError::Validation(format!(
                "{failures} chapter(s) failed"
            )));
        }

        output.success(&format!("All {} chapter(s) rendered", entries.len()));
        Ok(())
    }
}
