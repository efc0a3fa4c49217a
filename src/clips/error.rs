use std::{io, path::PathBuf};
use thiserror::Error;

/// Any failure along the read -> classify -> write path.
/// None of these are recoverable; the driver stops at the first one.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("unable to open input {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to open {destination} destination {}: {source}", path.display())]
    OpenOutput {
        destination: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading CSV input near line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("record on line {line} has {found} fields, expected at least {expected}")]
    MissingFields {
        line: u64,
        found: usize,
        expected: usize,
    },
    #[error("failed writing to {destination} destination: {source}")]
    Write {
        destination: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("failed closing {destination} destination: {source}")]
    Close {
        destination: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}
