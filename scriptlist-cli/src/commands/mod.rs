//! Subcommands and the source flags they share.

pub mod diff;
pub mod generate;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use scriptlist_core::config::{self, DEFAULT_CONFIG_FILE};
use scriptlist_core::{GeneratorConfig, RegistrySource};

/// Where the registries come from and where the output goes.
///
/// Values are read from `--config` (or `./scriptlist.yaml` when present) and
/// then overridden by the individual flags.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Generator config file.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch the ISO 15924 list from this URL.
    #[arg(long, value_name = "URL", conflicts_with = "primary_file")]
    pub primary_url: Option<String>,

    /// Read the ISO 15924 list from a local file.
    #[arg(long, value_name = "FILE")]
    pub primary_file: Option<PathBuf>,

    /// Fetch the language subtag registry from this URL.
    #[arg(long, value_name = "URL", conflicts_with = "secondary_file")]
    pub secondary_url: Option<String>,

    /// Read the language subtag registry from a local file.
    #[arg(long, value_name = "FILE")]
    pub secondary_file: Option<PathBuf>,

    /// Generated source file.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the effective generator config.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => load(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    load(implicit)?
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                    GeneratorConfig::default()
                }
            }
        };

        if let Some(url) = &self.primary_url {
            config.primary = RegistrySource::Url(url.clone());
        }
        if let Some(path) = &self.primary_file {
            config.primary = RegistrySource::File(path.clone());
        }
        if let Some(url) = &self.secondary_url {
            config.secondary = RegistrySource::Url(url.clone());
        }
        if let Some(path) = &self.secondary_file {
            config.secondary = RegistrySource::File(path.clone());
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        Ok(config)
    }
}

fn load(path: &Path) -> Result<GeneratorConfig> {
    debug!("loading config from {}", path.display());
    config::load_at(path).with_context(|| format!("failed to load config '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(
            &path,
            "primary: { file: ./iso.txt }\noutput: generated/scripts.rs\n",
        )
        .unwrap();

        let args = SourceArgs {
            config: Some(path),
            secondary_file: Some(PathBuf::from("lsr.txt")),
            ..SourceArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.primary, RegistrySource::File(PathBuf::from("./iso.txt")));
        assert_eq!(config.secondary, RegistrySource::File(PathBuf::from("lsr.txt")));
        assert_eq!(config.output, PathBuf::from("generated/scripts.rs"));
    }

    #[test]
    fn named_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let args = SourceArgs {
            config: Some(dir.path().join("absent.yaml")),
            ..SourceArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }
}
