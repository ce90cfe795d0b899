//! Column-aligned text table layout.
//!
//! Every column but the last gets `column_suffix` appended and is then
//! left-aligned to the widest cell of that column, so a table of tuples
//! lines up like this:
//!
//! ```text
//!     ("Adlm", 166, "Adlam",                    false),
//!     ("Egyp", 050, "Egyptian hieroglyphs",     false),
//!     ("Qaai", 908, "Reserved for private use", true),
//! ```

/// Affixes wrapped around cells and rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableLayout {
    pub row_prefix: String,
    pub row_suffix: String,
    pub column_suffix: String,
    pub column_separator: String,
}

impl TableLayout {
    /// One Rust tuple expression per row, indented by four spaces.
    pub fn rust_tuples() -> Self {
        TableLayout {
            row_prefix: "    (".to_string(),
            row_suffix: "),".to_string(),
            column_suffix: ",".to_string(),
            column_separator: " ".to_string(),
        }
    }
}

/// Lay out `rows` as aligned lines. Rows may have differing lengths; missing
/// cells count as empty.
pub fn format_table<R, S>(rows: &[R], layout: &TableLayout) -> Vec<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (idx, cell) in row.as_ref().iter().enumerate() {
            widths[idx] = widths[idx].max(cell_width(cell.as_ref(), idx, columns, layout));
        }
    }

    rows.iter()
        .map(|row| {
            let cells = row.as_ref();
            let mut line = layout.row_prefix.clone();
            for (idx, cell) in cells.iter().enumerate() {
                let cell = cell.as_ref();
                let last = idx + 1 == cells.len();
                if idx > 0 {
                    line.push_str(&layout.column_separator);
                }
                line.push_str(cell);
                if !last {
                    line.push_str(&layout.column_suffix);
                    let pad = widths[idx] - cell_width(cell, idx, columns, layout);
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            line.push_str(&layout.row_suffix);
            line
        })
        .collect()
}

fn cell_width(cell: &str, idx: usize, columns: usize, layout: &TableLayout) -> usize {
    let suffix = if idx + 1 < columns {
        layout.column_suffix.chars().count()
    } else {
        0
    };
    cell.chars().count() + suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_to_widest_cell() {
        let rows = vec![
            vec!["\"Adlm\"", "166", "\"Adlam\"", "false"],
            vec!["\"Egyp\"", "050", "\"Egyptian hieroglyphs\"", "true"],
        ];
        let lines = format_table(&rows, &TableLayout::rust_tuples());
        assert_eq!(
            lines,
            [
                "    (\"Adlm\", 166, \"Adlam\",                false),",
                "    (\"Egyp\", 050, \"Egyptian hieroglyphs\", true),",
            ]
        );
    }

    #[test]
    fn empty_table_has_no_lines() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert!(format_table(&rows, &TableLayout::rust_tuples()).is_empty());
    }

    #[test]
    fn plain_layout_joins_with_separator() {
        let layout = TableLayout {
            column_separator: " | ".to_string(),
            ..TableLayout::default()
        };
        let rows = [["a", "bbb"], ["cc", "d"]];
        assert_eq!(format_table(&rows, &layout), ["a  | bbb", "cc | d"]);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let rows = [["é", "x"], ["ab", "y"]];
        let layout = TableLayout {
            column_separator: " ".to_string(),
            ..TableLayout::default()
        };
        assert_eq!(format_table(&rows, &layout), ["é  x", "ab y"]);
    }
}
