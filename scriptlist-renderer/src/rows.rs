//! Turns reconciled entries into sorted, literal-safe cells.
//!
//! | Field        | Cell                       | Example          |
//! |--------------|----------------------------|------------------|
//! | `code`       | Rust string literal        | `"Latn"`         |
//! | `number`     | 3-digit zero-padded        | `050`            |
//! | `name`       | Rust string literal        | `"Latin"`        |
//! | `deprecated` | `true` / `false`           | `false`          |

use scriptlist_core::{sorted_by_code, Entry, MAX_NUMBER};

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub code: String,
    pub number: String,
    pub name: String,
    pub deprecated: String,
}

impl Row {
    pub fn from_entry(entry: &Entry) -> Self {
        Row {
            code: string_literal(&entry.code),
            number: format_number(entry.number),
            name: string_literal(&entry.name),
            deprecated: entry.deprecated.to_string(),
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.code, &self.number, &self.name, &self.deprecated]
    }
}

/// Sort `entries` by code and format each one.
pub fn emit_rows(entries: &[Entry]) -> Vec<Row> {
    sorted_by_code(entries).into_iter().map(Row::from_entry).collect()
}

/// Zero-padded three-digit identifier: `50` → `050`.
///
/// The parsers reject anything above [`MAX_NUMBER`], so the cell is always
/// exactly three characters wide.
pub fn format_number(number: u32) -> String {
    debug_assert!(number <= MAX_NUMBER, "{number} does not fit three digits");
    format!("{number:03}")
}

/// Double-quoted Rust string literal. Quotes, backslashes and control
/// characters are escaped; printable Unicode is kept as-is.
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.escape_debug())
}
