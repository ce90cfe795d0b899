//! Generator configuration.
//!
//! # File format
//!
//! ```yaml
//! primary: { url: https://www.unicode.org/iso15924/iso15924.txt }
//! secondary: { file: ./language-subtag-registry }
//! secondary_kind: script
//! output: src/iso15924_script_list.rs
//! template: templates/script_list.rs.tera   # optional
//! ```
//!
//! Every field is optional; missing fields take the values of
//! [`GeneratorConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::RegistrySource;

/// Upstream ISO 15924 code list.
pub const DEFAULT_PRIMARY_URL: &str = "https://www.unicode.org/iso15924/iso15924.txt";

/// Upstream IANA language subtag registry.
pub const DEFAULT_SECONDARY_URL: &str =
    "https://www.iana.org/assignments/language-subtag-registry/language-subtag-registry";

/// Subtag registry `Type` folded into the script list.
pub const DEFAULT_SECONDARY_KIND: &str = "script";

pub const DEFAULT_OUTPUT: &str = "src/iso15924_script_list.rs";

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "scriptlist.yaml";

/// Inputs and output location of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub primary: RegistrySource,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub secondary: RegistrySource,
    pub secondary_kind: String,
    pub output: PathBuf,
    /// Replacement for the embedded output template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            primary: RegistrySource::Url(DEFAULT_PRIMARY_URL.to_string()),
            secondary: RegistrySource::Url(DEFAULT_SECONDARY_URL.to_string()),
            secondary_kind: DEFAULT_SECONDARY_KIND.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            template: None,
        }
    }
}

/// Load a config from `path`.
///
/// Returns `ConfigError::NotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML.
pub fn load_at(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Atomically save a config to `path`.
///
/// Write flow: serialize → `.tmp` sibling → `rename`.
pub fn save_at(path: &Path, config: &GeneratorConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, yaml)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_upstream_registries() {
        let config = GeneratorConfig::default();
        assert_eq!(config.primary, RegistrySource::Url(DEFAULT_PRIMARY_URL.into()));
        assert_eq!(config.secondary_kind, "script");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("scriptlist.yaml");
        std::fs::write(&path, "secondary: { file: ./lsr.txt }\n").expect("write");

        let config = load_at(&path).expect("load");
        assert_eq!(config.secondary, RegistrySource::File(PathBuf::from("./lsr.txt")));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("scriptlist.yaml");
        let config = GeneratorConfig {
            output: PathBuf::from("generated/scripts.rs"),
            ..GeneratorConfig::default()
        };
        save_at(&path, &config).expect("save");
        assert_eq!(load_at(&path).expect("load"), config);
        assert!(!dir.path().join("nested").join("scriptlist.yaml.tmp").exists());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_at(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "primary: [unclosed").expect("write");
        let err = load_at(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("broken.yaml"));
    }
}
