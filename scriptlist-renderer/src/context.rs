//! Serializable rendering payload built from reconciled entries.

use serde::{Deserialize, Serialize};

use scriptlist_core::Entry;

use crate::error::RenderError;
use crate::rows::emit_rows;
use crate::table::{format_table, TableLayout};

/// Everything the generated-file template needs.
///
/// Contains nothing that varies between runs over identical inputs (no
/// timestamps, no paths), so the rendered file is byte-stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    /// Aligned table body, one row per line, no trailing newline.
    pub table: String,
    pub row_count: usize,
    pub deprecated_count: usize,
    /// Command that regenerates the file.
    pub command: String,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from the final entry set.
    pub fn from_entries(entries: &[Entry], layout: &TableLayout) -> Self {
        let rows = emit_rows(entries);
        let cells: Vec<[&str; 4]> = rows.iter().map(|r| r.cells()).collect();
        let table = format_table(&cells, layout).join("\n");

        TemplateContext {
            table,
            row_count: rows.len(),
            deprecated_count: entries.iter().filter(|e| e.deprecated).count(),
            command: "scriptlist generate".to_string(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        let mut moon = Entry::new("Moon", 0, "Mooney (Applied Hebrew)");
        moon.deprecated = true;
        vec![Entry::new("Latn", 215, "Latin"), moon, Entry::new("Adlm", 166, "Adlam")]
    }

    #[test]
    fn context_fields_populated() {
        let ctx = TemplateContext::from_entries(&entries(), &TableLayout::rust_tuples());
        assert_eq!(ctx.row_count, 3);
        assert_eq!(ctx.deprecated_count, 1);
        assert_eq!(ctx.table.lines().count(), 3);
        assert!(ctx.table.lines().next().expect("first row").contains("\"Adlm\""));
        assert!(!ctx.table.ends_with('\n'));
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = TemplateContext::from_entries(&entries(), &TableLayout::rust_tuples());
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert!(tera_ctx.contains_key("table"));
    }
}
