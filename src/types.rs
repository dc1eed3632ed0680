//! Shared types used across bgstrip.
//! Includes `PixelClass`, `StripStats` and the `ExtensionSet` filter.
use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Outcome of classifying a single pixel against the whitening threshold.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PixelClass {
    /// Near-white; rewritten to transparent white.
    Background,
    /// Passed through unchanged.
    Foreground,
}

/// Summary of one stripped image
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StripStats {
    pub width: u32,
    pub height: u32,
    /// Pixels turned transparent
    pub cleared: usize,
}

impl StripStats {
    pub fn total_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Case-insensitive set of file extensions, stored lowercase without the dot.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            exts.into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(&normalize_extension(ext))
    }

    /// True if the final extension of `path` is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.contains(e))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(["png", "jpg", "jpeg"])
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(v: Vec<String>) -> Self {
        Self::new(v)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(set: ExtensionSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl std::fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
