//! Settings, and reading settings and documents from disk.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::evaluator::Roots;
use crate::formatting::NumberFormat;
use crate::visibility::DEFAULT_SLACK;

mod error;

pub use error::*;

/// User adjustable behaviour. Any field missing from a settings file takes
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How many characters either side of a snippet the cursor may be and
    /// still keep the raw text showing.
    pub slack: usize,
    pub number_format: NumberFormat,
    /// Decimal places in displayed numbers.
    pub precision: usize,
    pub roots: Roots,
    /// Bound on the number of cached results; unbounded when absent.
    pub cache_capacity: Option<usize>,
    /// Read literals like `5k` as 5000.
    pub expand_prefixes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            slack: DEFAULT_SLACK,
            number_format: NumberFormat::default(),
            precision: 5,
            roots: Roots::default(),
            cache_capacity: None,
            expand_prefixes: false,
        }
    }
}

/// Read a file and return an owned String. A filename of `-` reads
/// standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Read settings from a JSON file.
pub fn load_settings(filename: &Path) -> Result<Settings, LoadingError<'_>> {
    let content = load(filename)?;
    parse_settings(filename, &content)
}

pub fn parse_settings<'i>(filename: &'i Path, content: &str) -> Result<Settings, LoadingError<'i>> {
    match serde_json::from_str::<Settings>(content) {
        Ok(settings) => {
            debug!(?settings);
            Ok(settings)
        }
        Err(error) => Err(LoadingError {
            problem: "Invalid settings".to_string(),
            details: error.to_string(),
            filename,
        }),
    }
}
