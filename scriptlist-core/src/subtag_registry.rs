//! IANA language subtag registry parser.
//!
//! The registry is a sequence of records separated by `%%` lines. Each record
//! is a list of `Field-Name: value` lines; a line starting with whitespace
//! continues the previous field's value.
//!
//! ```text
//! File-Date: 2024-03-07
//! %%
//! Type: script
//! Subtag: Qaai
//! Description: Inherited
//! Added: 2005-10-16
//! Deprecated: 2007-07-28
//! Preferred-Value: Zinh
//! %%
//! ```
//!
//! Records without a `Subtag` field (`grandfathered`, `redundant`) and the
//! leading `File-Date` block are ignored.

use tracing::debug;

use crate::types::SubtagRecord;

const RECORD_SEPARATOR: &str = "%%";
const DESCRIPTION_JOINER: &str = "; ";

/// Parse every subtag-bearing record in registry order.
pub fn parse_registry(text: &str) -> Vec<SubtagRecord> {
    split_records(text)
        .iter()
        .filter_map(|fields| build_record(fields))
        .collect()
}

/// Parse the registry and keep only records whose `Type` equals `kind`.
pub fn records_of_kind(text: &str, kind: &str) -> Vec<SubtagRecord> {
    parse_registry(text)
        .into_iter()
        .filter(|record| record.kind == kind)
        .collect()
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

type Fields = Vec<(String, String)>;

fn split_records(text: &str) -> Vec<Fields> {
    let mut records = Vec::new();
    let mut current: Fields = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line == RECORD_SEPARATOR {
            records.push(std::mem::take(&mut current));
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = current.last_mut() {
                value.push(' ');
                value.push_str(line.trim_start());
            }
            continue;
        }
        match line.split_once(':') {
            Some((name, value)) => current.push((name.trim().to_string(), value.trim().to_string())),
            None => debug!("ignoring registry line without field name: {line}"),
        }
    }
    records.push(current);
    records
}

fn build_record(fields: &Fields) -> Option<SubtagRecord> {
    let field = |name: &str| {
        fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    };

    let kind = field("Type")?;
    let subtag = field("Subtag")?;
    let description = fields
        .iter()
        .filter(|(n, _)| n == "Description")
        .map(|(_, v)| v.as_str())
        .collect::<Vec<_>>()
        .join(DESCRIPTION_JOINER);

    Some(SubtagRecord {
        kind,
        subtag,
        description,
        deprecated: field("Deprecated"),
        preferred_value: field("Preferred-Value"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
