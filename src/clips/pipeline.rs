use crate::clips::{
    error::ClipError,
    filter::{evaluate, failed_fields, Verdict},
    output::IdWriter,
    record::ClipRecord,
    rules::RuleSet,
};
use csv::ReaderBuilder;
use log::{debug, info};
use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Where the run reads from and writes to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub valid_output: PathBuf,
    pub invalid_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("clips.csv"),
            valid_output: PathBuf::from("valid.csv"),
            invalid_output: PathBuf::from("invalid.csv"),
        }
    }
}

/// Per-verdict record counts for a finished run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Reads every clip row from `input` (header line skipped), classifies it
/// against `rules` and routes its id to `valid` or `invalid` straight away.
/// The first unreadable or short row aborts the whole run.
pub fn filter_clips<R: Read, V: Write, I: Write>(
    input: R,
    rules: &RuleSet,
    valid: &mut IdWriter<V>,
    invalid: &mut IdWriter<I>,
) -> Result<Summary, ClipError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(b',')
        .from_reader(input);
    let mut summary = Summary::default();
    for row in rdr.byte_records() {
        let row = row.map_err(|source| ClipError::Malformed {
            line: source.position().map_or(0, |pos| pos.line()),
            source,
        })?;
        let clip = ClipRecord::from_bytes(row)?;
        let verdict = evaluate(&clip, rules);
        match verdict {
            Verdict::Valid => {
                valid.write(&clip.id)?;
                summary.valid += 1;
            }
            Verdict::Invalid => {
                invalid.write(&clip.id)?;
                summary.invalid += 1;
            }
        }
        if log::log_enabled!(log::Level::Debug) {
            let failed: Vec<&str> = failed_fields(&clip, rules)
                .iter()
                .map(|field| field.name())
                .collect();
            debug!(
                "clip {} -> {} (failed: {:?})",
                clip.id,
                verdict.destination(),
                failed
            );
        }
    }
    Ok(summary)
}

/// Filters `input` like `filter_clips`, then closes both destinations.
/// Hands back the underlying writers once everything has been flushed.
pub fn route_clips<R: Read, V: Write, I: Write>(
    input: R,
    rules: &RuleSet,
    mut valid: IdWriter<V>,
    mut invalid: IdWriter<I>,
) -> Result<(Summary, V, I), ClipError> {
    let summary = filter_clips(input, rules, &mut valid, &mut invalid)?;
    let valid = valid.finish()?;
    let invalid = invalid.finish()?;
    Ok((summary, valid, invalid))
}

/// File-backed run: opens the input and both destinations up front,
/// filters, then closes both destinations.
pub fn run(config: &Config) -> Result<Summary, ClipError> {
    let rules = RuleSet::clip_defaults()?;
    let input = File::open(&config.input).map_err(|source| ClipError::OpenInput {
        path: config.input.clone(),
        source,
    })?;
    let valid = IdWriter::new(
        Verdict::Valid.destination(),
        create_destination(Verdict::Valid, &config.valid_output)?,
    );
    let invalid = IdWriter::new(
        Verdict::Invalid.destination(),
        create_destination(Verdict::Invalid, &config.invalid_output)?,
    );
    info!(
        "filtering {} into {} / {}",
        config.input.display(),
        config.valid_output.display(),
        config.invalid_output.display()
    );
    let (summary, valid, invalid) = route_clips(input, &rules, valid, invalid)?;
    sync_destination(Verdict::Valid, &valid)?;
    sync_destination(Verdict::Invalid, &invalid)?;
    info!(
        "{} clips processed: {} valid, {} invalid",
        summary.total(),
        summary.valid,
        summary.invalid
    );
    Ok(summary)
}

fn create_destination(verdict: Verdict, path: &Path) -> Result<File, ClipError> {
    File::create(path).map_err(|source| ClipError::OpenOutput {
        destination: verdict.destination(),
        path: path.to_path_buf(),
        source,
    })
}

fn sync_destination(verdict: Verdict, file: &File) -> Result<(), ClipError> {
    file.sync_all().map_err(|source| ClipError::Close {
        destination: verdict.destination(),
        source,
    })
}
