//! `marquee-seed` — one-shot seeder for the marquee generator's phrase store.
//!
//! Reads `text_file.txt` from the working directory and merges every trimmed
//! non-empty line into `data.json`, giving new phrases a zeroed vote tally
//! and leaving existing records untouched. Takes no arguments: the paths are
//! fixed, and everything else about a run is decided by the two files.

use std::process::ExitCode;

use colored::Colorize;
use marquee_store::{seed, SeedConfig, StoreError};

/// Plaintext input, one phrase per line.
const INPUT_FILE: &str = "text_file.txt";
/// The JSON store shared with the marquee generator.
const OUTPUT_FILE: &str = "data.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = SeedConfig::new(INPUT_FILE, OUTPUT_FILE);
    let report = match seed(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{} {err}", "✗".red().bold());
            return ExitCode::from(failure_code(&err));
        }
    };

    for phrase in &report.duplicates {
        println!("Duplicate found: '{phrase}' (Skipping this entry)");
    }
    println!(
        "{} Seeded {} new phrase(s) into {}",
        "✓".green().bold(),
        report.inserted.len(),
        OUTPUT_FILE.bold()
    );
    ExitCode::SUCCESS
}

/// Map each failure class to a distinct non-zero exit code.
fn failure_code(err: &StoreError) -> u8 {
    match err {
        StoreError::InputRead { .. } => 2,
        StoreError::StoreRead { .. } => 3,
        StoreError::MalformedStore { .. } => 4,
        StoreError::Serialize(_) | StoreError::StoreWrite { .. } => 5,
    }
}
