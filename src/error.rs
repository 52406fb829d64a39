//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a command-line value cannot be turned into configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid size unit '{0}' (expected one of: b, kb, mb, gb)")]
    InvalidSizeUnit(String),

    #[error("invalid size '{0}': not a number")]
    InvalidSizeNumber(String),

    #[error("invalid size '{0}': must be greater than zero")]
    NonPositiveSize(String),

    #[error("invalid size '{0}': too large")]
    SizeTooLarge(String),

    #[error("invalid output pattern '{pattern}': {reason}")]
    InvalidOutputPattern { pattern: String, reason: String },
}

/// Error returned when splitting stops before the input is exhausted.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("could not open input file {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read input CSV headers from {}", path.display())]
    ReadHeader {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("input file {} has no header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("could not read CSV record {record}")]
    ReadRecord {
        record: u64,
        #[source]
        source: csv::Error,
    },

    #[error("could not create new file {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write CSV record to {}", path.display())]
    WriteRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("could not flush {}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not get file info for {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn config_errors_name_the_offending_value() {
        assert_snapshot!(
            ConfigError::InvalidSizeUnit("xb".to_string()).to_string(),
            @"invalid size unit 'xb' (expected one of: b, kb, mb, gb)"
        );
        assert_snapshot!(
            ConfigError::InvalidOutputPattern {
                pattern: "out.csv".to_string(),
                reason: "no integer placeholder".to_string(),
            }
            .to_string(),
            @"invalid output pattern 'out.csv': no integer placeholder"
        );
    }

    #[test]
    fn split_errors_keep_their_source() {
        let err = SplitError::OpenInput {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_snapshot!(err.to_string(), @"could not open input file missing.csv");
        let source = std::error::Error::source(&err).expect("source is attached");
        assert_eq!(source.to_string(), "gone");
    }
}
