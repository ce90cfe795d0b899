//! `scriptlist generate`: fetch, reconcile, render and write the script table.

use anyhow::{Context, Result};
use clap::Args;

use scriptlist_sync::{generate, GenerateResult, HttpFetcher, WriteResult};

use super::SourceArgs;

/// Arguments for `scriptlist generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.resolve()?;
        let result = generate(&HttpFetcher::new(), &config, self.dry_run)
            .with_context(|| format!("generation failed for '{}'", config.output.display()))?;
        print_result(&result);
        Ok(())
    }
}

fn print_result(result: &GenerateResult) {
    let summary = format!(
        "{} scripts, {} added from subtag registry, {} deprecated",
        result.row_count,
        result.report.inserted.len(),
        result.report.deprecated,
    );
    match &result.write {
        WriteResult::Written { path, .. } => {
            println!("✎  {} written ({summary})", path.display())
        }
        WriteResult::Unchanged { path, .. } => {
            println!("·  {} unchanged ({summary})", path.display())
        }
        WriteResult::WouldWrite { path, .. } => {
            println!("[dry-run] ~  would write {} ({summary})", path.display())
        }
    }
}
