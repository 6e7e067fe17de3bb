use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;
use crate::error::RangeError;
use crate::range::{parse_ranges, LineRange};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for linestrip.
    pub linestrip: LinestripConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for linestrip.
pub struct LinestripConfig {
    /// File to strip when none is given on the command line.
    pub path: Option<PathBuf>,
    /// Ranges to remove, as `START-END` strings.
    pub ranges: Option<Vec<String>>,
    /// Write through a temporary file and rename.
    pub atomic: Option<bool>,
}

impl LinestripConfig {
    /// Parse the configured ranges, if any.
    ///
    /// # Errors
    /// Returns the first range string that is not a valid range.
    pub fn parsed_ranges(&self) -> Result<Option<Vec<LineRange>>, RangeError> {
        self.ranges.as_deref().map(parse_ranges).transpose()
    }
}

impl Config {
    /// Loads configuration from the current directory or its ancestors.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A config file that exists but does not parse is skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        // Relative paths need an absolute anchor, or `pop` stops at "".
        let mut current = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if !current.is_dir() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
