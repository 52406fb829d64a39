//! Output path templates with a single printf-style integer placeholder.

use crate::error::ConfigError;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

/// Output pattern used when `--out` is not given.
pub const DEFAULT_OUTPUT_PATTERN: &str = "./output_%d.csv";

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?P<spec>%|(?P<zero>0)?(?P<width>[0-9]+)?d)?")
        .expect("directive regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    width: usize,
    zero_pad: bool,
}

/// A validated output path template such as `./output_%d.csv` or `parts/%04d.csv`.
///
/// The template holds exactly one integer placeholder (`%d`, `%Nd` or `%0Nd`).
/// `%%` stands for a literal percent sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPattern {
    raw: String,
    prefix: String,
    suffix: String,
    placeholder: Placeholder,
}

impl OutputPattern {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidOutputPattern {
            pattern: raw.to_string(),
            reason,
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholder = None;
        let mut last = 0;

        for caps in DIRECTIVE.captures_iter(raw) {
            let whole = caps.get(0).expect("group 0 always participates");
            let literal = &raw[last..whole.start()];
            last = whole.end();

            let target = if placeholder.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            target.push_str(literal);

            let Some(spec) = caps.name("spec") else {
                return Err(invalid(format!(
                    "unsupported '%' directive at byte {}",
                    whole.start()
                )));
            };

            if spec.as_str() == "%" {
                target.push('%');
                continue;
            }

            if placeholder.is_some() {
                return Err(invalid("more than one integer placeholder".to_string()));
            }

            let width = match caps.name("width") {
                Some(width) => width.as_str().parse().map_err(|_| {
                    invalid(format!("placeholder width '{}' is too large", width.as_str()))
                })?,
                None => 0,
            };
            placeholder = Some(Placeholder {
                width,
                zero_pad: caps.name("zero").is_some(),
            });
        }

        let placeholder =
            placeholder.ok_or_else(|| invalid("no integer placeholder".to_string()))?;
        suffix.push_str(&raw[last..]);

        Ok(Self {
            raw: raw.to_string(),
            prefix,
            suffix,
            placeholder,
        })
    }

    /// Substitutes `counter` into the placeholder.
    pub fn render(&self, counter: u64) -> PathBuf {
        let Placeholder { width, zero_pad } = self.placeholder;
        let number = if zero_pad {
            format!("{counter:0width$}")
        } else {
            format!("{counter:width$}")
        };
        PathBuf::from(format!("{}{}{}", self.prefix, number, self.suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for OutputPattern {
    fn default() -> Self {
        Self::parse(DEFAULT_OUTPUT_PATTERN).expect("default output pattern is valid")
    }
}

impl FromStr for OutputPattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
