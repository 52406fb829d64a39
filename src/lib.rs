//! Core library for csv-split: resolves the split settings and streams one CSV
//! file into size-bounded parts that each start with the input's header row.

pub mod cli;
pub mod config;
pub mod error;
pub mod pattern;
pub mod size;
pub mod splitter;

pub use crate::config::Config;
pub use crate::error::{ConfigError, SplitError};
pub use crate::pattern::OutputPattern;
pub use crate::splitter::{run, OutputFile, SplitSummary};
