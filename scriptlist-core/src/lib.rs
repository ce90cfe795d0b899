//! Scriptlist core library: registry parsers, the dual-keyed entry index
//! and subtag reconciliation.
//!
//! - [`iso15924`]: ISO 15924 code list parser and private-use allocator
//! - [`subtag_registry`]: IANA language subtag registry parser
//! - [`reconcile`]: [`EntryIndex`] and the deprecation-folding pass
//! - [`config`]: [`GeneratorConfig`] load / save
//! - [`types`]: shared domain types and pure helpers

pub mod config;
pub mod error;
pub mod iso15924;
pub mod reconcile;
pub mod subtag_registry;
pub mod types;

pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use reconcile::{reconcile, reconcile_entries, EntryIndex, ReconcileReport};
pub use types::{sorted_by_code, Entry, IndexKey, RegistrySource, SubtagRecord, MAX_NUMBER};
