use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ExtensionSet;

pub const DEFAULT_DIRECTORY: &str = "public/image";
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Strip parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Directory scanned in batch mode
    pub directory: PathBuf,
    /// Pixels with R, G and B all strictly above this become transparent
    pub threshold: u8,
    /// Extensions considered in batch mode (case-insensitive)
    pub extensions: ExtensionSet,
    /// Where outputs go; None writes next to each input
    pub output_dir: Option<PathBuf>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            threshold: DEFAULT_THRESHOLD,
            extensions: ExtensionSet::default(),
            output_dir: None,
        }
    }
}

impl StripConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
