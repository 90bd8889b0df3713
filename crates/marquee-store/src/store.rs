//! The in-memory phrase store and the merge operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::VoteRecord;

/// The outcome of merging a single phrase into the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The phrase was not present and has been inserted with a zero tally.
    Inserted,
    /// The phrase already exists; the store is unchanged.
    Duplicate,
}

/// A mapping from phrase to its vote record.
///
/// Invariants:
/// - Keys are unique, non-empty, whitespace-trimmed phrases. Callers
///   normalize through [`crate::normalize_phrase`] before merging.
/// - Once a phrase is present, its record is never modified here — merging
///   only adds records for phrases not already in the map.
///
/// Backed by a `BTreeMap` so iteration and serialization order are
/// deterministic. Serializes transparently as the bare JSON object the
/// marquee generator reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseStore {
    records: BTreeMap<String, VoteRecord>,
}

impl PhraseStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of phrases currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if `phrase` is already a key in the store.
    pub fn contains(&self, phrase: &str) -> bool {
        self.records.contains_key(phrase)
    }

    /// Look up the vote record for `phrase`.
    pub fn get(&self, phrase: &str) -> Option<&VoteRecord> {
        self.records.get(phrase)
    }

    /// Merge a normalized phrase into the store.
    ///
    /// Inserts `phrase` with a zero tally if it is not already present and
    /// returns [`MergeOutcome::Inserted`]; otherwise leaves the existing
    /// record untouched and returns [`MergeOutcome::Duplicate`].
    pub fn merge(&mut self, phrase: &str) -> MergeOutcome {
        if self.records.contains_key(phrase) {
            return MergeOutcome::Duplicate;
        }
        self.records.insert(phrase.to_string(), VoteRecord::zero());
        MergeOutcome::Inserted
    }

    /// Iterate over all phrases and their records, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VoteRecord)> {
        self.records.iter()
    }
}
