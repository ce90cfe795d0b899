//! Hash-gated atomic writer for the generated file.
//!
//! ## `persist` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. SHA-256 hash the new content.
//! 3. Hash the file currently on disk, if any.
//! 4. Identical digests → skip (`Unchanged`); dry-run → `WouldWrite`.
//! 5. Write to `<path>.scriptlist.tmp`.
//! 6. Rename to the final path (atomic on POSIX); remove the `.tmp` on failure.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{io_err, GenerateError};

/// Outcome of persisting the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf, digest: String },
    /// File was skipped, the content on disk already has the same hash.
    Unchanged { path: PathBuf, digest: String },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf, digest: String },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. }
            | WriteResult::Unchanged { path, .. }
            | WriteResult::WouldWrite { path, .. } => path,
        }
    }

    /// Hex SHA-256 of the generated content.
    pub fn digest(&self) -> &str {
        match self {
            WriteResult::Written { digest, .. }
            | WriteResult::Unchanged { digest, .. }
            | WriteResult::WouldWrite { digest, .. } => digest,
        }
    }
}

/// Hex SHA-256 of `content`.
pub fn content_digest(content: &str) -> String {
    let mut h = Sha256::new();
    h.update(content.as_bytes());
    hex::encode(h.finalize())
}

/// Atomically overwrite `path` with `content` unless it already matches.
pub fn persist(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, GenerateError> {
    let tmp = PathBuf::from(format!("{}.scriptlist.tmp", path.display()));
    persist_with_tmp(path, content, dry_run, &tmp)
}

fn persist_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, GenerateError> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();
    let digest = content_digest(content);

    if let Some(existing) = read_existing(path)? {
        if content_digest(&existing) == digest {
            debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
                digest,
            });
        }
    }

    if dry_run {
        info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
            digest,
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
        digest,
    })
}

/// Current content of `path`, `None` if it does not exist.
pub(crate) fn read_existing(path: &Path) -> Result<Option<String>, GenerateError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content.replace("\r\n", "\n"))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
