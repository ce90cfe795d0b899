//! Unified diff between the generated file on disk and a fresh render.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::GenerateError;
use crate::writer::read_existing;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare `rendered` with the current content of `path`.
///
/// A missing file diffs against the empty string. Returns `None` when there is
/// nothing to change. No files are written.
pub fn diff_output(path: &Path, rendered: &str) -> Result<Option<FileDiff>, GenerateError> {
    let rendered = rendered.replace("\r\n", "\n");
    let existing = read_existing(path)?.unwrap_or_default();
    if existing == rendered {
        return Ok(None);
    }

    let name = path.display();
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: path.to_path_buf(),
        unified_diff: unified,
    }))
}
