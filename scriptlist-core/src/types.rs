//! Domain types shared by the parsers, the reconciler and the renderer.
//!
//! All types are serializable via serde so the CLI can dump them as JSON and
//! the configuration can be loaded from YAML.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A single writing-system record as it ends up in the generated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Titlecased alphabetic code, e.g. `Latn`.
    pub code: String,
    /// ISO 15924 numeric identifier; `0` means unassigned.
    pub number: u32,
    /// English name.
    pub name: String,
    #[serde(default)]
    pub deprecated: bool,
}

impl Entry {
    /// A non-deprecated entry.
    pub fn new(code: impl Into<String>, number: u32, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            number,
            name: name.into(),
            deprecated: false,
        }
    }

    /// Keys this entry is reachable under in an [`EntryIndex`](crate::reconcile::EntryIndex).
    ///
    /// The empty code and number `0` are placeholders, not identities, and are
    /// never returned.
    pub fn keys(&self) -> Vec<IndexKey> {
        [IndexKey::Code(self.code.clone()), IndexKey::Number(self.number)]
            .into_iter()
            .filter(|key| !key.is_placeholder())
            .collect()
    }
}

/// Largest numeric identifier; the generated table renders exactly three digits.
pub const MAX_NUMBER: u32 = 999;

/// `entries` ordered by code, the order of the generated table.
pub fn sorted_by_code(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));
    sorted
}

// ---------------------------------------------------------------------------
// IndexKey
// ---------------------------------------------------------------------------

/// Either identity of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKey {
    Code(String),
    Number(u32),
}

impl IndexKey {
    /// Derive the lookup key for a subtag from the secondary registry.
    ///
    /// All-decimal subtags are numeric identifiers (leading zeros stripped);
    /// everything else is an alphabetic code, normalized to titlecase.
    ///
    /// `None` when the subtag cannot identify an entry: an empty subtag, a
    /// number that reduces to `0`, or one above [`MAX_NUMBER`].
    pub fn from_subtag(subtag: &str) -> Option<Self> {
        let key = match parse_decimal(subtag) {
            Some(number) if number > MAX_NUMBER => return None,
            Some(number) => IndexKey::Number(number),
            None => IndexKey::Code(titlecase(subtag)),
        };
        (!key.is_placeholder()).then_some(key)
    }

    /// The empty code and number `0` stand for "unassigned" and are never
    /// stored in an index.
    pub fn is_placeholder(&self) -> bool {
        match self {
            IndexKey::Code(code) => code.is_empty(),
            IndexKey::Number(number) => *number == 0,
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Code(code) => f.write_str(code),
            IndexKey::Number(number) => write!(f, "#{number}"),
        }
    }
}

impl From<&str> for IndexKey {
    fn from(s: &str) -> Self {
        IndexKey::Code(s.to_owned())
    }
}

impl From<u32> for IndexKey {
    fn from(n: u32) -> Self {
        IndexKey::Number(n)
    }
}

// ---------------------------------------------------------------------------
// SubtagRecord
// ---------------------------------------------------------------------------

/// One record of the IANA language subtag registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtagRecord {
    /// The registry `Type` field (`script`, `region`, `language`, ...).
    pub kind: String,
    /// Either a code, a decimal string, or a range such as `Qaaa..Qabx`.
    pub subtag: String,
    /// All `Description` fields joined with `"; "`.
    pub description: String,
    /// The `Deprecated` date, if the record carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_value: Option<String>,
}

impl SubtagRecord {
    pub fn is_range(&self) -> bool {
        self.subtag.contains(RANGE_SEPARATOR)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// Token separating the bounds of a subtag range.
pub const RANGE_SEPARATOR: &str = "..";

// ---------------------------------------------------------------------------
// RegistrySource
// ---------------------------------------------------------------------------

/// Where a registry document is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Url(url) => f.write_str(url),
            RegistrySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// First character uppercase, the rest lowercase: `LATN` → `Latn`.
pub fn titlecase(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse a non-empty all-ASCII-digit string, ignoring leading zeros.
///
/// `"000"` is `Some(0)`; `""`, `"12a"` and values beyond `u32` are `None`.
pub fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = s.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titlecase_normalizes_any_casing() {
        assert_eq!(titlecase("LATN"), "Latn");
        assert_eq!(titlecase("latn"), "Latn");
        assert_eq!(titlecase("lAtN"), "Latn");
        assert_eq!(titlecase(""), "");
    }

    #[test]
    fn parse_decimal_strips_leading_zeros() {
        assert_eq!(parse_decimal("050"), Some(50));
        assert_eq!(parse_decimal("000"), Some(0));
        assert_eq!(parse_decimal("215"), Some(215));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("21a"), None);
        assert_eq!(parse_decimal("99999999999"), None);
    }

    #[test]
    fn subtag_key_is_numeric_or_titlecased_code() {
        assert_eq!(IndexKey::from_subtag("0419"), Some(IndexKey::Number(419)));
        assert_eq!(IndexKey::from_subtag("latn"), Some(IndexKey::Code("Latn".into())));
    }

    #[test]
    fn subtags_without_an_identity_have_no_key() {
        assert_eq!(IndexKey::from_subtag(""), None);
        assert_eq!(IndexKey::from_subtag("0"), None);
        assert_eq!(IndexKey::from_subtag("000"), None);
        assert_eq!(IndexKey::from_subtag("1000"), None);
        assert_eq!(IndexKey::from_subtag("0999"), Some(IndexKey::Number(999)));
    }

    #[test]
    fn sorted_by_code_orders_without_moving_entries() {
        let entries = vec![Entry::new("Zyyy", 998, "Common"), Entry::new("Adlm", 166, "Adlam")];
        let codes: Vec<_> = sorted_by_code(&entries).iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["Adlm", "Zyyy"]);
        assert_eq!(entries[0].code, "Zyyy");
    }

    #[test]
    fn placeholder_identities_are_not_keys() {
        assert_eq!(Entry::new("", 419, "x").keys(), vec![IndexKey::Number(419)]);
        assert_eq!(Entry::new("Moon", 0, "x").keys(), vec![IndexKey::Code("Moon".into())]);
    }

    #[test]
    fn registry_source_display() {
        let file = RegistrySource::File(PathBuf::from("/tmp/registry.txt"));
        assert_eq!(file.to_string(), "/tmp/registry.txt");
        let url = RegistrySource::Url("https://example.org/list.txt".to_string());
        assert_eq!(url.to_string(), "https://example.org/list.txt");
    }
}
