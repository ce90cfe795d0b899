//! `scriptlist diff`: show what `generate` would change.

use anyhow::{Context, Result};
use clap::Args;

use scriptlist_sync::{pipeline, HttpFetcher};

use super::SourceArgs;

/// Arguments for `scriptlist diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.resolve()?;
        let diff = pipeline::diff(&HttpFetcher::new(), &config)
            .with_context(|| format!("diff failed for '{}'", config.output.display()))?;

        let Some(diff) = diff else {
            println!("No differences for '{}'.", config.output.display());
            return Ok(());
        };

        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
