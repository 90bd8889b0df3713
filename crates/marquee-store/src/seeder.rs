//! The seeding run: load, merge, persist.

use std::fs;

use tracing::info;

use crate::config::SeedConfig;
use crate::error::{Result, StoreError};
use crate::phrase::normalize_phrase;
use crate::store::{MergeOutcome, PhraseStore};

/// What one seeding run did, in input encounter order.
///
/// The CLI renders its duplicate and completion notices from this; the data
/// contract is the store file itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Phrases inserted with a zero tally during this run.
    pub inserted: Vec<String>,
    /// Phrases skipped because the store already holds them — whether from a
    /// prior run or from an earlier line of the same input file.
    pub duplicates: Vec<String>,
}

/// Run one seeding pass from `config.input_path` into `config.output_path`.
///
/// Loads the store (a missing store file means an empty store), trims and
/// merges every input line in file order, then writes the merged store back
/// as a single document. The first occurrence of a phrase is inserted;
/// later occurrences are reported as duplicates and dropped, as are lines
/// that are empty after trimming.
///
/// A missing or unreadable input file aborts the run before anything is
/// written, so a failed run never leaves a partial store behind.
pub fn seed(config: &SeedConfig) -> Result<MergeReport> {
    let mut store = PhraseStore::load(&config.output_path)?;
    let input = fs::read_to_string(&config.input_path).map_err(|err| StoreError::InputRead {
        path: config.input_path.clone(),
        source: err,
    })?;

    let mut report = MergeReport::default();
    for line in input.lines() {
        if let Some(phrase) = normalize_phrase(line) {
            match store.merge(phrase) {
                MergeOutcome::Inserted => report.inserted.push(phrase.to_string()),
                MergeOutcome::Duplicate => report.duplicates.push(phrase.to_string()),
            }
        }
    }

    store.save(&config.output_path)?;
    info!(
        inserted = report.inserted.len(),
        duplicates = report.duplicates.len(),
        store = %config.output_path.display(),
        "seeding run complete"
    );
    Ok(report)
}
