//! # scriptlist-renderer
//!
//! Turns the reconciled entry set into the generated Rust source file:
//! sorted, escaped rows ([`rows`]), aligned into a table ([`table`]) and
//! wrapped by a Tera template ([`engine`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scriptlist_core::Entry;
//! use scriptlist_renderer::SourceRenderer;
//!
//! fn render(entries: &[Entry]) {
//!     if let Ok(renderer) = SourceRenderer::new() {
//!         if let Ok(source) = renderer.render(entries) {
//!             println!("{} bytes", source.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod rows;
pub mod table;

pub use context::TemplateContext;
pub use engine::SourceRenderer;
pub use error::RenderError;
pub use rows::{emit_rows, Row};
pub use table::{format_table, TableLayout};
