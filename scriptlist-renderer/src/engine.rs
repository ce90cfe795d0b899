//! Tera rendering engine for the generated script-list source file.
//!
//! The default template is baked into the binary with `include_str!`. A
//! replacement template can be loaded from disk; it receives the same
//! [`TemplateContext`].

use std::path::Path;

use tera::Tera;

use scriptlist_core::Entry;

use crate::context::TemplateContext;
use crate::error::RenderError;
use crate::table::TableLayout;

const SCRIPT_LIST_TEMPLATE: &str = "script_list.rs.tera";
const SCRIPT_LIST_SOURCE: &str = include_str!("templates/script_list.rs.tera");

/// Renders reconciled entries into the generated Rust source file.
pub struct SourceRenderer {
    tera: Tera,
    layout: TableLayout,
}

impl SourceRenderer {
    /// Construct a renderer using the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_template(SCRIPT_LIST_SOURCE)
    }

    /// Construct a renderer from a template file on disk.
    pub fn with_template_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_template(&source)
    }

    fn from_template(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(SCRIPT_LIST_TEMPLATE, source)?;
        Ok(SourceRenderer {
            tera,
            layout: TableLayout::rust_tuples(),
        })
    }

    /// Build the context for `entries` and render it.
    pub fn render(&self, entries: &[Entry]) -> Result<String, RenderError> {
        let ctx = TemplateContext::from_entries(entries, &self.layout);
        self.render_with_context(&ctx)
    }

    /// Render using a caller-provided [`TemplateContext`].
    ///
    /// Line endings are normalised to LF and the output always ends with a
    /// single newline.
    pub fn render_with_context(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let rendered = self.tera.render(SCRIPT_LIST_TEMPLATE, &tera_ctx)?;
        let mut content = rendered.replace("\r\n", "\n");
        let trimmed = content.trim_end_matches('\n').len();
        content.truncate(trimmed);
        content.push('\n');
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        let mut qaai = Entry::new("Qaai", 908, "Reserved for private use");
        qaai.deprecated = true;
        vec![
            Entry::new("Latn", 215, "Latin"),
            qaai,
            Entry::new("Egyp", 50, "Egyptian hieroglyphs"),
        ]
    }

    #[test]
    fn renderer_new_succeeds() {
        SourceRenderer::new().expect("embedded template should parse");
    }

    #[test]
    fn output_contains_sorted_table() {
        let out = SourceRenderer::new().unwrap().render(&entries()).unwrap();
        let egyp = out.find("(\"Egyp\", 050,").expect("Egyp row");
        let latn = out.find("(\"Latn\", 215,").expect("Latn row");
        let qaai = out.find("(\"Qaai\", 908,").expect("Qaai row");
        assert!(egyp < latn && latn < qaai);
        assert!(out.contains("static SCRIPTS_INIT: [ScriptInit; 3] = ["));
        assert!(out.contains("pub fn init() -> Vec<Script>"));
    }

    #[test]
    fn output_is_deterministic() {
        let renderer = SourceRenderer::new().unwrap();
        let first = renderer.render(&entries()).unwrap();
        let mut reversed = entries();
        reversed.reverse();
        let second = renderer.render(&reversed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_ends_with_single_newline_and_no_crlf() {
        let out = SourceRenderer::new().unwrap().render(&entries()).unwrap();
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("\n\n"));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn template_file_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.tera");
        std::fs::write(&path, "rows={{ row_count }}\r\n{{ table | safe }}\r\n\r\n").unwrap();
        let out = SourceRenderer::with_template_file(&path)
            .unwrap()
            .render(&entries())
            .unwrap();
        assert!(out.starts_with("rows=3\n"));
        assert!(out.ends_with("true),\n"));
    }

    #[test]
    fn missing_template_file_is_io_error() {
        let err = SourceRenderer::with_template_file(Path::new("/nonexistent/x.tera"))
            .err()
            .expect("error");
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
