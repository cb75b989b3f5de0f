//! Value grammars of the dynamic options
//!
//! Every parser takes the raw wire string and returns the typed value or
//! a human readable reason. The registry attaches the key and raw value.

use crate::value_objects::{ConfigDuration, MatcherList};
use std::str::FromStr;

/// Smallest non-zero sample rate
const MIN_SAMPLE_RATE: f64 = 0.0001;

/// Booleans are `true`/`false`, case-insensitive
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("'{raw}' is not a boolean, expected true or false"))
    }
}

pub fn parse_int(raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| format!("'{raw}' is not an integer: {e}"))
}

/// Span limit, `-1` meaning unlimited
pub fn parse_max_spans(raw: &str) -> Result<i32, String> {
    let value = parse_int(raw)?;
    if value < -1 {
        return Err(format!("{value} is below -1"));
    }
    Ok(value)
}

/// Sample rate in `[0, 1]`, rounded to four decimal places
///
/// Rates between zero and the four-decimal precision become `0.0001`
/// instead of rounding down to zero.
pub fn parse_sample_rate(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is outside the range [0, 1]"));
    }
    if value > 0.0 && value < MIN_SAMPLE_RATE {
        return Ok(MIN_SAMPLE_RATE);
    }
    Ok((value * 10_000.0).round() / 10_000.0)
}

/// Duration, negative values allowed
pub fn parse_duration(raw: &str) -> Result<ConfigDuration, String> {
    raw.parse()
}

pub fn parse_non_negative_duration(raw: &str) -> Result<ConfigDuration, String> {
    ConfigDuration::parse_non_negative(raw)
}

/// Comma separated wildcard matchers
pub fn parse_matchers(raw: &str) -> Result<MatcherList, String> {
    MatcherList::parse(raw)
}

/// Any enumerated value with a case-insensitive `FromStr`
pub fn parse_enum<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = String>,
{
    raw.parse()
}
