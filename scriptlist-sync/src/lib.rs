//! # scriptlist-sync
//!
//! Registry fetching, the generation pipeline, and the hash-gated atomic
//! writer for the generated script list.
//!
//! Call [`pipeline::generate`] to fetch, reconcile, render and write in one
//! pass, or [`pipeline::diff`] to preview what a regeneration would change.

pub mod diff;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_output, FileDiff};
pub use error::{FetchError, GenerateError};
pub use fetch::{fetch_primary_registry, fetch_secondary_registry, Fetch, HttpFetcher};
pub use pipeline::{collect_entries, generate, EntrySet, GenerateResult};
pub use writer::{persist, WriteResult};
