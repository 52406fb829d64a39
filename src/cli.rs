//! Defines the command-line interface for the application.

use crate::config::{strip_quotes, Config, DEFAULT_INPUT_PATH};
use crate::error::ConfigError;
use crate::pattern::{OutputPattern, DEFAULT_OUTPUT_PATTERN};
use crate::size::parse_size;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv-split",
    version,
    args_override_self = true,
    about = "Split a CSV file into size-bounded parts, repeating the header row in each part."
)]
pub struct Cli {
    /// The CSV file to split.
    #[arg(
        long = "name",
        value_name = "PATH",
        require_equals = true,
        default_value = DEFAULT_INPUT_PATH,
        value_parser = parse_path
    )]
    pub name: PathBuf,

    /// Output path template with one integer placeholder (%d, %4d or %04d).
    #[arg(
        long = "out",
        value_name = "PATTERN",
        require_equals = true,
        default_value = DEFAULT_OUTPUT_PATTERN,
        value_parser = parse_output_pattern
    )]
    pub out: OutputPattern,

    /// Maximum size of each output file, in bytes or with a b/kb/mb/gb suffix.
    #[arg(
        long = "size",
        value_name = "SIZE",
        require_equals = true,
        default_value = "10gb",
        value_parser = parse_size
    )]
    pub size: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.name,
            output_pattern: cli.out,
            max_size: cli.size,
        }
    }
}

fn parse_path(value: &str) -> Result<PathBuf, ConfigError> {
    Ok(PathBuf::from(strip_quotes(value)))
}

fn parse_output_pattern(value: &str) -> Result<OutputPattern, ConfigError> {
    OutputPattern::parse(strip_quotes(value))
}

/// Resolves a [`Config`] from process arguments, excluding the program name.
///
/// This is the entry point the binary uses. A repeated flag keeps its last
/// value. Unknown arguments and invalid values are reported as
/// [`clap::Error`]s so the caller can print them with usage information.
pub fn parse_config<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv =
        std::iter::once(OsString::from("csv-split")).chain(args.into_iter().map(Into::into));
    Cli::try_parse_from(argv).map(Config::from)
}
