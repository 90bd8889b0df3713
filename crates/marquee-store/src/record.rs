//! The per-phrase vote tally.

use serde::{Deserialize, Serialize};

/// The vote tally for a single phrase.
///
/// Newly seeded phrases start at zero. The seeder never reads or changes the
/// tally of a record that already exists — the marquee generator owns vote
/// mutation, and pre-existing values are opaque to this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Number of upvotes the phrase has received.
    pub upvotes: u64,
    /// Number of downvotes the phrase has received.
    pub downvotes: u64,
}

impl VoteRecord {
    /// The zeroed tally assigned to a phrase when it is first seeded.
    pub fn zero() -> Self {
        Self::default()
    }
}
