//! Registry retrieval.
//!
//! [`Fetch`] is the seam between the pipeline and the outside world:
//! [`HttpFetcher`] talks to the upstream registries with `ureq` (and reads
//! local files for [`RegistrySource::File`]); tests provide in-memory
//! implementations.

use std::time::Duration;

use tracing::info;

use scriptlist_core::{iso15924, subtag_registry, Entry, RegistrySource, SubtagRecord};

use crate::error::FetchError;

const USER_AGENT: &str = concat!("scriptlist/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking retrieval of a registry document as text.
pub trait Fetch {
    fn fetch(&self, source: &RegistrySource) -> Result<String, FetchError>;
}

/// `ureq`-backed fetcher.
#[derive(Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        HttpFetcher { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, source: &RegistrySource) -> Result<String, FetchError> {
        match source {
            RegistrySource::Url(url) => {
                info!("fetching {url}");
                let response = self.agent.get(url).call().map_err(|e| FetchError::Http {
                    url: url.clone(),
                    source: Box::new(e),
                })?;
                response.into_string().map_err(|e| FetchError::Body {
                    url: url.clone(),
                    source: e,
                })
            }
            RegistrySource::File(path) => {
                info!("reading {}", path.display());
                std::fs::read_to_string(path).map_err(|e| FetchError::File {
                    path: path.clone(),
                    source: e,
                })
            }
        }
    }
}

/// Fetch and parse the ISO 15924 list, with the private-use block appended.
pub fn fetch_primary_registry<F>(fetcher: &F, source: &RegistrySource) -> Result<Vec<Entry>, FetchError>
where
    F: Fetch + ?Sized,
{
    let text = fetcher.fetch(source)?;
    Ok(iso15924::primary_entries(&text))
}

/// Fetch the subtag registry and return the records of type `kind`.
pub fn fetch_secondary_registry<F>(
    fetcher: &F,
    source: &RegistrySource,
    kind: &str,
) -> Result<Vec<SubtagRecord>, FetchError>
where
    F: Fetch + ?Sized,
{
    let text = fetcher.fetch(source)?;
    Ok(subtag_registry::records_of_kind(&text, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_file_sources() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iso15924.txt");
        std::fs::write(&path, "Latn;215;Latin;latin\n").unwrap();

        let entries =
            fetch_primary_registry(&HttpFetcher::new(), &RegistrySource::File(path)).unwrap();
        assert_eq!(entries.len(), 51);
        assert_eq!(entries[0].code, "Latn");
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let dir = TempDir::new().unwrap();
        let source = RegistrySource::File(dir.path().join("absent.txt"));
        let err = HttpFetcher::new().fetch(&source).unwrap_err();
        assert!(matches!(err, FetchError::File { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn unreachable_url_is_a_fetch_error() {
        let source = RegistrySource::Url("http://127.0.0.1:9/registry".to_string());
        let err = HttpFetcher::new().fetch(&source).unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
    }

    #[test]
    fn secondary_registry_is_filtered_by_kind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lsr.txt");
        std::fs::write(
            &path,
            "File-Date: 2024-03-07\n%%\nType: script\nSubtag: Latn\nDescription: Latin\n%%\nType: region\nSubtag: 419\nDescription: Latin America\n",
        )
        .unwrap();

        let records =
            fetch_secondary_registry(&HttpFetcher::new(), &RegistrySource::File(path), "script")
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subtag, "Latn");
    }
}
