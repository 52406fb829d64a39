//! Resolved settings for a single split run.

use crate::pattern::OutputPattern;
use crate::size::DEFAULT_MAX_SIZE;
use std::path::PathBuf;

/// Input path used when `--name` is not given.
pub const DEFAULT_INPUT_PATH: &str = "./input.csv";

const STRING_DELIMITER: char = '"';

/// Everything the splitter needs to know, resolved once before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file to split.
    pub input_path: PathBuf,
    /// Template for the output paths, numbered from 1.
    pub output_pattern: OutputPattern,
    /// Size in bytes at which an output file is closed and the next one started.
    pub max_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_pattern: OutputPattern::default(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Removes one pair of surrounding double quotes, if present.
///
/// Shells normally strip these already; they survive when the whole
/// `--flag="value"` token was quoted by the caller.
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix(STRING_DELIMITER)
        .and_then(|rest| rest.strip_suffix(STRING_DELIMITER))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_pair_of_quotes() {
        assert_eq!(strip_quotes("\"data.csv\""), "data.csv");
        assert_eq!(strip_quotes("data.csv"), "data.csv");
        assert_eq!(strip_quotes("\"\"data.csv\"\""), "\"data.csv\"");
    }

    #[test]
    fn leaves_unbalanced_quotes_alone() {
        assert_eq!(strip_quotes("\"data.csv"), "\"data.csv");
        assert_eq!(strip_quotes("data.csv\""), "data.csv\"");
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("./input.csv"));
        assert_eq!(config.output_pattern.as_str(), "./output_%d.csv");
        assert_eq!(config.max_size, 10 * 1024 * 1024 * 1024);
    }
}
