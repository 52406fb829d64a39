//! Parsing of human-readable byte sizes such as `500`, `1kb` or `2.5mb`.

use crate::error::ConfigError;

pub const B: u64 = 1;
pub const KB: u64 = 1024 * B;
pub const MB: u64 = 1024 * KB;
pub const GB: u64 = 1024 * MB;

/// Maximum output file size used when `--size` is not given.
pub const DEFAULT_MAX_SIZE: u64 = 10 * GB;

/// Returns the multiplier for a lower-case unit suffix. An empty suffix means bytes.
fn unit_multiplier(unit: &str) -> Option<u64> {
    match unit {
        "" | "b" => Some(B),
        "kb" => Some(KB),
        "mb" => Some(MB),
        "gb" => Some(GB),
        _ => None,
    }
}

/// Parses a size value into a byte count.
///
/// The value is case-insensitive. Its trailing run of letters is the unit
/// (`b`, `kb`, `mb` or `gb`, bytes when absent) and everything before it must
/// be a floating-point number. The product is rounded up to whole bytes, so
/// `2.5mb` is `2_621_440` and `0.1b` is `1`.
pub fn parse_size(value: &str) -> Result<u64, ConfigError> {
    let normalized = crate::config::strip_quotes(value.trim()).to_lowercase();

    let number = normalized.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let unit = &normalized[number.len()..];

    let multiplier =
        unit_multiplier(unit).ok_or_else(|| ConfigError::InvalidSizeUnit(unit.to_string()))?;

    let number: f64 = number
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSizeNumber(value.to_string()))?;
    if !number.is_finite() {
        return Err(ConfigError::InvalidSizeNumber(value.to_string()));
    }

    let bytes = (number * multiplier as f64).ceil();
    if bytes <= 0.0 {
        return Err(ConfigError::NonPositiveSize(value.to_string()));
    }
    // `u64::MAX as f64` rounds up to 2^64, which is itself out of range.
    if bytes >= u64::MAX as f64 {
        return Err(ConfigError::SizeTooLarge(value.to_string()));
    }

    Ok(bytes as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("500", 500)]
    #[case("500b", 500)]
    #[case("1kb", 1024)]
    #[case("1KB", 1024)]
    #[case("2.5mb", 2_621_440)]
    #[case("1.5kb", 1536)]
    #[case("10gb", 10 * GB)]
    #[case("0.1b", 1)]
    #[case("1.0001kb", 1025)]
    #[case("\"3mb\"", 3 * MB)]
    #[case("4 kb", 4096)]
    fn parses_sizes_with_units(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_size(input).unwrap(), expected);
    }

    #[rstest]
    #[case("5xb", "xb")]
    #[case("5tb", "tb")]
    #[case("12k", "k")]
    #[case("inf", "inf")]
    fn rejects_unknown_units(#[case] input: &str, #[case] unit: &str) {
        assert_eq!(
            parse_size(input),
            Err(ConfigError::InvalidSizeUnit(unit.to_string()))
        );
    }

    #[rstest]
    #[case("")]
    #[case("mb")]
    #[case("1.2.3kb")]
    #[case("1,5mb")]
    #[case("-kb")]
    fn rejects_unparsable_numbers(#[case] input: &str) {
        assert!(matches!(
            parse_size(input),
            Err(ConfigError::InvalidSizeNumber(_))
        ));
    }

    #[rstest]
    #[case("0")]
    #[case("0kb")]
    #[case("-1mb")]
    fn rejects_non_positive_sizes(#[case] input: &str) {
        assert!(matches!(
            parse_size(input),
            Err(ConfigError::NonPositiveSize(_))
        ));
    }

    #[test]
    fn rejects_sizes_beyond_u64() {
        assert!(matches!(
            parse_size("1e30gb"),
            Err(ConfigError::SizeTooLarge(_))
        ));
    }

    #[test]
    fn default_is_ten_gigabytes() {
        assert_eq!(DEFAULT_MAX_SIZE, 10_737_418_240);
    }
}
