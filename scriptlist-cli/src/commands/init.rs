//! `scriptlist init [<path>]`: write a default generator config.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use scriptlist_core::config::{self, DEFAULT_CONFIG_FILE};
use scriptlist_core::GeneratorConfig;

/// Write a config file pointing at the upstream registries.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Config file to create.
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Generated source file recorded in the config.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        if self.path.exists() && !self.force {
            bail!(
                "'{}' already exists; pass --force to overwrite it",
                self.path.display()
            );
        }

        let mut generator = GeneratorConfig::default();
        if let Some(output) = self.output {
            generator.output = output;
        }
        config::save_at(&self.path, &generator)
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;

        println!("✓ Wrote {}", self.path.display());
        println!("  output: {}", generator.output.display());
        Ok(())
    }
}
