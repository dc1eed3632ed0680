//! High-level library API: strip a single file to a path, strip a file next to
//! itself, and batch helpers for directories. Prefer these entry points over
//! the low-level processing modules when embedding bgstrip.
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::params::StripConfig;
use crate::core::processing::pipeline::load_and_strip;
use crate::error::{ProcessingFailure, Result};
use crate::io::scan::iterate_images;
use crate::io::writers::png::write_png;
use crate::types::StripStats;

/// Per-file result: the written output path, or the failure.
pub type FileOutcome = std::result::Result<PathBuf, ProcessingFailure>;

/// Summary of a directory run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    /// One entry per candidate file, in processing order
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }
}

/// Output path for `input`: same stem with a `.png` extension, placed in
/// `output_dir` if given, otherwise next to the input.
pub fn derive_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let sibling = input.with_extension("png");
    match (output_dir, sibling.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => sibling,
    }
}

/// Decode `input`, strip near-white pixels, and write a PNG to `output`.
/// Nothing is written if decoding or encoding fails.
pub fn strip_file_to_path(input: &Path, output: &Path, threshold: u8) -> Result<StripStats> {
    let (image, stats) = load_and_strip(input, threshold)?;
    write_png(output, &image)?;
    Ok(stats)
}

/// Strip `input` into its derived output path using `config`.
pub fn strip_file(input: &Path, config: &StripConfig) -> FileOutcome {
    let output = derive_output_path(input, config.output_dir.as_deref());
    match strip_file_to_path(input, &output, config.threshold) {
        Ok(stats) => {
            debug!(
                "{:?}: cleared {}/{} pixels",
                input,
                stats.cleared,
                stats.total_pixels()
            );
            Ok(output)
        }
        Err(e) => Err(ProcessingFailure::new(input, e)),
    }
}

/// Split `candidates` into the ones to process and the ones whose output
/// would collide with another candidate's.
///
/// An input that already carries its output name (`a.png`) wins over
/// `a.jpg`, so it is never overwritten before being read. Otherwise the
/// first candidate in path order wins.
pub fn resolve_output_collisions(
    candidates: Vec<PathBuf>,
    output_dir: Option<&Path>,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut owner: BTreeMap<PathBuf, usize> = BTreeMap::new();
    for (idx, path) in candidates.iter().enumerate() {
        let output = derive_output_path(path, output_dir);
        if !owner.contains_key(&output) || path.file_name() == output.file_name() {
            owner.insert(output, idx);
        }
    }

    let winners: BTreeSet<usize> = owner.into_values().collect();
    let (kept, dropped): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .enumerate()
        .partition(|(idx, _)| winners.contains(idx));
    (
        kept.into_iter().map(|(_, p)| p).collect(),
        dropped.into_iter().map(|(_, p)| p).collect(),
    )
}

/// Process every supported image in `config.directory`, one at a time.
///
/// `on_outcome` is called after each file. Per-file failures are recorded in
/// the report and never stop the batch; only listing the directory or
/// creating `config.output_dir` can fail the whole call. Candidates whose
/// output would collide with another candidate's are skipped.
pub fn process_directory_with<F>(config: &StripConfig, mut on_outcome: F) -> Result<BatchReport>
where
    F: FnMut(&Path, &FileOutcome),
{
    let scan = iterate_images(&config.directory, &config.extensions)?;

    if let Some(dir) = &config.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let (candidates, collided) =
        resolve_output_collisions(scan.candidates, config.output_dir.as_deref());
    for path in &collided {
        warn!(
            "Skipping {:?}: output {:?} belongs to another input",
            path,
            derive_output_path(path, config.output_dir.as_deref())
        );
    }
    info!(
        "Found {} candidate image(s) in {:?} (threshold {})",
        candidates.len(),
        config.directory,
        config.threshold
    );

    let mut report = BatchReport {
        skipped: scan.skipped + collided.len(),
        ..BatchReport::default()
    };

    for path in candidates {
        let outcome = strip_file(&path, config);
        match &outcome {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("{}", e);
                report.errors += 1;
            }
        }
        on_outcome(&path, &outcome);
        report.outcomes.push(outcome);
    }

    Ok(report)
}

/// Same as [`process_directory_with`] without a per-file callback.
pub fn process_directory(config: &StripConfig) -> Result<BatchReport> {
    process_directory_with(config, |_, _| {})
}
