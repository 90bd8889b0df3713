//! Per-run configuration for the seeder.

use std::path::PathBuf;

/// The two paths a seeding run operates on.
///
/// The seeder is deliberately path-driven and nothing else: no flags, no
/// environment, no config file. Callers construct this directly; the
/// `marquee-seed` binary fills it with its fixed paths.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    /// Plaintext input, one phrase per line.
    pub input_path: PathBuf,
    /// The persisted JSON store shared with the marquee generator.
    pub output_path: PathBuf,
}

impl SeedConfig {
    /// Create a config for one run over the given input and store paths.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}
