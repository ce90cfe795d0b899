//! Generation pipeline shared by `scriptlist generate`, `diff` and `list`.
//!
//! fetch primary → fetch secondary → parse → allocate private use →
//! reconcile → emit rows → render → persist.
//!
//! Both registries are fetched before anything is rendered or written, so a
//! fetch failure leaves the output file untouched.

use tracing::info;

use scriptlist_core::{
    reconcile, sorted_by_code, Entry, EntryIndex, GeneratorConfig, ReconcileReport,
};
use scriptlist_renderer::SourceRenderer;

use crate::diff::{diff_output, FileDiff};
use crate::error::GenerateError;
use crate::fetch::{fetch_primary_registry, fetch_secondary_registry, Fetch};
use crate::writer::{persist, WriteResult};

/// Reconciled entries plus the counters of the reconciliation pass.
#[derive(Debug, Clone)]
pub struct EntrySet {
    /// In index order; sorting happens at emission.
    pub entries: Vec<Entry>,
    pub report: ReconcileReport,
}

impl EntrySet {
    /// Entries sorted by code, as they appear in the generated table.
    pub fn sorted(&self) -> Vec<&Entry> {
        sorted_by_code(&self.entries)
    }
}

/// Outcome of [`generate`].
#[derive(Debug)]
pub struct GenerateResult {
    pub write: WriteResult,
    pub row_count: usize,
    pub report: ReconcileReport,
}

/// Fetch both registries and reconcile them.
pub fn collect_entries<F>(fetcher: &F, config: &GeneratorConfig) -> Result<EntrySet, GenerateError>
where
    F: Fetch + ?Sized,
{
    let primary = fetch_primary_registry(fetcher, &config.primary)?;
    let records = fetch_secondary_registry(fetcher, &config.secondary, &config.secondary_kind)?;
    info!(
        "{} primary entries, {} {} records",
        primary.len(),
        records.len(),
        config.secondary_kind
    );

    let mut index = EntryIndex::from_entries(primary);
    let report = reconcile(&mut index, &records);
    info!(
        "reconciled: {} added, {} deprecated, {} ranges and {} unusable subtags skipped",
        report.inserted.len(),
        report.deprecated,
        report.skipped_ranges,
        report.skipped_invalid
    );

    Ok(EntrySet {
        entries: index.into_entries(),
        report,
    })
}

/// Render the generated source file for `config` without writing it.
pub fn render<F>(fetcher: &F, config: &GeneratorConfig) -> Result<(EntrySet, String), GenerateError>
where
    F: Fetch + ?Sized,
{
    let set = collect_entries(fetcher, config)?;
    let renderer = match &config.template {
        Some(path) => SourceRenderer::with_template_file(path)?,
        None => SourceRenderer::new()?,
    };
    let source = renderer.render(&set.entries)?;
    Ok((set, source))
}

/// Regenerate the output file. Unchanged content is not rewritten.
pub fn generate<F>(
    fetcher: &F,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<GenerateResult, GenerateError>
where
    F: Fetch + ?Sized,
{
    let (set, source) = render(fetcher, config)?;
    let write = persist(&config.output, &source, dry_run)?;
    Ok(GenerateResult {
        write,
        row_count: set.entries.len(),
        report: set.report,
    })
}

/// Diff the output file against a fresh render.
pub fn diff<F>(fetcher: &F, config: &GeneratorConfig) -> Result<Option<FileDiff>, GenerateError>
where
    F: Fetch + ?Sized,
{
    let (_, source) = render(fetcher, config)?;
    diff_output(&config.output, &source)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
