//! ISO 15924 code list parser and the private-use allocator.
//!
//! The upstream list is a semicolon-delimited text file:
//!
//! ```text
//! # ISO 15924 - Codes for the representation of names of scripts
//! Code;N°;English Name;Nom français;PVA;Unicode Version;Date
//! Adlm;166;Adlam;adlam;Adlam;9.0;2016-12-05
//! ```
//!
//! The private-use block `Qaaa..Qabx` is listed upstream as a single range
//! line; it is dropped here and synthesized by [`private_use_entries`].

use tracing::debug;

use crate::types::{parse_decimal, titlecase, Entry, MAX_NUMBER};

/// Leading letters shared by every private-use code.
pub const PRIVATE_USE_MARKER: &str = "Qa";

/// First numeric identifier of the private-use block.
pub const PRIVATE_USE_FIRST_NUMBER: u32 = 900;

/// Size of the private-use block (`Qaaa` through `Qabx`).
pub const PRIVATE_USE_COUNT: u32 = 50;

pub const PRIVATE_USE_NAME: &str = "Reserved for private use";

const FIELD_SEPARATOR: char = ';';
const COMMENT_PREFIX: char = '#';
const BYTE_ORDER_MARK: char = '\u{feff}';

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse the ISO 15924 list into entries, in file order.
///
/// Comment lines, private-use codes and lines with fewer than three fields
/// are skipped without error.
pub fn parse_registry(text: &str) -> Vec<Entry> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(parse_line)
        .collect()
}

/// Parse one data line. `None` for anything that is not a usable record.
pub fn parse_line(line: &str) -> Option<Entry> {
    if line.matches(FIELD_SEPARATOR).count() < 2 {
        debug!("skipping short line: {line}");
        return None;
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let code = titlecase(fields.next()?);
    if is_private_use_code(&code) {
        return None;
    }

    let raw_number = fields.next()?;
    let number = if raw_number.is_empty() {
        Some(0)
    } else {
        parse_decimal(raw_number)
    };
    let Some(number) = number.filter(|&n| n <= MAX_NUMBER) else {
        debug!("skipping {code}: unusable identifier {raw_number:?}");
        return None;
    };
    let name = fields.next()?;

    Some(Entry::new(code, number, name))
}

/// `true` for codes in the reserved block `Qaa*` / `Qaba..Qabx`.
pub fn is_private_use_code(code: &str) -> bool {
    match code.as_bytes() {
        [b'Q', b'a', b'a', ..] => true,
        [b'Q', b'a', b'b', fourth, ..] => (b'a'..=b'x').contains(fourth),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Private-use allocator
// ---------------------------------------------------------------------------

/// The 50 synthetic private-use entries `Qaaa` (900) through `Qabx` (949).
pub fn private_use_entries() -> Vec<Entry> {
    (0..PRIVATE_USE_COUNT)
        .map(|idx| {
            let code = format!(
                "{PRIVATE_USE_MARKER}{}{}",
                letter(idx / 26),
                letter(idx % 26)
            );
            Entry::new(code, PRIVATE_USE_FIRST_NUMBER + idx, PRIVATE_USE_NAME)
        })
        .collect()
}

fn letter(offset: u32) -> char {
    char::from(b'a' + offset as u8)
}

/// Primary entries followed by the private-use block, ready for reconciliation.
pub fn primary_entries(text: &str) -> Vec<Entry> {
    let mut entries = parse_registry(text);
    entries.extend(private_use_entries());
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
