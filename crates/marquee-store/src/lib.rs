//! Phrase store seeding for the marquee generator.
//!
//! The marquee generator displays and ranks short phrases, each with an
//! upvote/downvote tally persisted in a single JSON document. This crate is
//! the seeding side of that document: it merges newline-delimited phrases
//! from a plaintext file into the store, giving every new phrase a zeroed
//! tally and leaving every existing record untouched.
//!
//! # Architecture
//!
//! - The store is loaded once per run (a missing file means an empty store),
//!   mutated in memory, and written back once as a whole document.
//! - Merging only ever adds records. Vote mutation belongs to the marquee
//!   generator, which owns the tallies after seeding.
//! - A run is synchronous and single-shot. Two concurrent runs against the
//!   same store are last-write-wins; nothing in this crate guards that.
//!
//! # Modules
//!
//! - [`error`] — Error types for store and seeding operations
//! - [`record`] — The per-phrase [`VoteRecord`] tally
//! - [`phrase`] — Input line normalization
//! - [`store`] — The in-memory [`PhraseStore`] and merge operation
//! - [`persist`] — JSON load/save for the store
//! - [`config`] — Per-run [`SeedConfig`] paths
//! - [`seeder`] — The [`seed`] run: load, merge, persist

pub mod config;
pub mod error;
pub mod persist;
pub mod phrase;
pub mod record;
pub mod seeder;
pub mod store;

pub use config::SeedConfig;
pub use error::{Result, StoreError};
pub use phrase::normalize_phrase;
pub use record::VoteRecord;
pub use seeder::{seed, MergeReport};
pub use store::{MergeOutcome, PhraseStore};
