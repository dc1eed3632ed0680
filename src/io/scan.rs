use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ExtensionSet;

/// Files selected from one directory listing.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Regular files with a supported extension, sorted by path
    pub candidates: Vec<PathBuf>,
    /// Entries left out (directories, other extensions)
    pub skipped: usize,
}

pub fn has_supported_extension(path: &Path, extensions: &ExtensionSet) -> bool {
    extensions.matches(path)
}

/// List the immediate entries of `dir` and keep supported image files.
///
/// The listing is taken once, so PNGs written while the batch runs are not
/// picked up again.
pub fn iterate_images(dir: &Path, extensions: &ExtensionSet) -> Result<ScanResult> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut result = ScanResult::default();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_supported_extension(&path, extensions) {
            result.candidates.push(path);
        } else {
            debug!("Skipping: {:?}", path);
            result.skipped += 1;
        }
    }
    result.candidates.sort();
    Ok(result)
}
