//! Dual-keyed entry index and the subtag reconciliation pass.
//!
//! # Keys
//!
//! Every entry is reachable by its titlecased code and by its numeric
//! identifier. Both keys resolve to the same slot of an arena, so an update
//! made through one key is visible through the other.
//!
//! | Entry                     | Keys                                  |
//! |---------------------------|---------------------------------------|
//! | `Latn`, 215               | `Code("Latn")`, `Number(215)`         |
//! | `Moon`, 0 (unassigned)    | `Code("Moon")`                        |
//! | `419`, 419 (numeric only) | `Code("419")`, `Number(419)`          |
//!
//! # Reconciliation
//!
//! For each non-range secondary record: look up its key, insert a new entry
//! *under that same key* if absent, then assign `deprecated` from the record.
//! A later record for the same key overrides an earlier one.

use std::collections::hash_map::Entry as Slot;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::{Entry, IndexKey, SubtagRecord};

// ---------------------------------------------------------------------------
// EntryIndex
// ---------------------------------------------------------------------------

/// Arena of entries addressable by either [`IndexKey`].
#[derive(Debug, Default, Clone)]
pub struct EntryIndex {
    entries: Vec<Entry>,
    slots: HashMap<IndexKey, usize>,
}

impl EntryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `entries`, in order. Later entries that repeat an
    /// already-registered code are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.register(entry);
        }
        index
    }

    /// Add an entry under all of its keys.
    ///
    /// Returns `None` (and keeps the existing record) when the code is already
    /// taken. A number already owned by another entry is not re-pointed; the
    /// new entry stays reachable through its code only.
    pub fn register(&mut self, entry: Entry) -> Option<usize> {
        if !entry.code.is_empty() && self.slots.contains_key(&IndexKey::Code(entry.code.clone())) {
            warn!("duplicate code {}; keeping the first record", entry.code);
            return None;
        }
        Some(self.push(entry))
    }

    pub fn get(&self, key: &IndexKey) -> Option<&Entry> {
        self.slots.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn get_mut(&mut self, key: &IndexKey) -> Option<&mut Entry> {
        self.slots.get(key).map(|&slot| &mut self.entries[slot])
    }

    pub fn contains(&self, key: &IndexKey) -> bool {
        self.slots.contains_key(key)
    }

    /// Slot `key` resolves to, if any.
    pub fn slot_of(&self, key: &IndexKey) -> Option<usize> {
        self.slots.get(key).copied()
    }

    /// Look `key` up, inserting a new entry derived from the key itself when
    /// absent. The returned flag is `true` when an insert happened.
    ///
    /// The new entry is always reachable under `key`; see [`entry_for_key`].
    /// Placeholder keys are never stored, so they yield `None`.
    pub fn get_or_insert(&mut self, key: IndexKey, name: &str) -> Option<(&mut Entry, bool)> {
        if key.is_placeholder() {
            return None;
        }
        if let Some(&slot) = self.slots.get(&key) {
            return Some((&mut self.entries[slot], false));
        }
        let slot = self.push(entry_for_key(&key, name));
        debug_assert_eq!(self.slots.get(&key), Some(&slot));
        Some((&mut self.entries[slot], true))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, one per record regardless of key count.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    fn push(&mut self, entry: Entry) -> usize {
        let slot = self.entries.len();
        for key in entry.keys() {
            match self.slots.entry(key) {
                Slot::Vacant(vacant) => {
                    vacant.insert(slot);
                }
                Slot::Occupied(occupied) => {
                    warn!(
                        "{} already belongs to {}; {} stays reachable by its other key",
                        occupied.key(),
                        self.entries[*occupied.get()].code,
                        entry.code
                    );
                }
            }
        }
        self.entries.push(entry);
        slot
    }
}

/// The entry created for a key missing from the primary registry.
///
/// A code key yields an unassigned number; a numeric key yields its
/// zero-padded decimal as the code, so the entry is still uniquely named.
pub fn entry_for_key(key: &IndexKey, name: &str) -> Entry {
    match key {
        IndexKey::Code(code) => Entry::new(code.clone(), 0, name),
        IndexKey::Number(number) => Entry::new(format!("{number:03}"), *number, name),
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Counters describing one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Keys that were missing from the primary entries, in record order.
    pub inserted: Vec<IndexKey>,
    /// Range records that were skipped.
    pub skipped_ranges: usize,
    /// Records whose subtag names no entry: empty, zero, or above 999.
    pub skipped_invalid: usize,
    /// Records that carried a deprecation marker.
    pub deprecated: usize,
}

/// Fold `records` into `index`: insert missing keys and assign `deprecated`.
pub fn reconcile(index: &mut EntryIndex, records: &[SubtagRecord]) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for record in records {
        if record.is_range() {
            debug!("skipping range subtag {}", record.subtag);
            report.skipped_ranges += 1;
            continue;
        }

        let Some(key) = IndexKey::from_subtag(&record.subtag) else {
            debug!("skipping subtag {:?}: not a usable key", record.subtag);
            report.skipped_invalid += 1;
            continue;
        };
        let Some((entry, inserted)) = index.get_or_insert(key.clone(), &record.description) else {
            continue;
        };
        entry.deprecated = record.is_deprecated();

        if inserted {
            debug!("added {key} from subtag registry");
            report.inserted.push(key);
        }
        if record.is_deprecated() {
            report.deprecated += 1;
        }
    }

    report
}

/// Index `primary`, fold in `records`, and return the resulting entry set.
pub fn reconcile_entries(primary: Vec<Entry>, records: &[SubtagRecord]) -> Vec<Entry> {
    let mut index = EntryIndex::from_entries(primary);
    reconcile(&mut index, records);
    index.into_entries()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
