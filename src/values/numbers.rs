//! Numeric helpers

use crate::error::{FilekitError, Result};
use regex::Regex;

/// Maximum of `values`, truncated towards zero
pub fn max_of<N: Copy + Into<f64>>(values: &[N]) -> Result<i64> {
    values
        .iter()
        .map(|v| -> f64 { (*v).into() })
        .max_by(f64::total_cmp)
        .map(|max| max as i64)
        .ok_or(FilekitError::EmptySequence)
}

/// Split `text` on the `delimiter` regex and parse every trimmed piece as `f64`.
///
/// A delimiter that does not compile is reported as
/// [`FilekitError::InvalidPattern`]. Trailing empty pieces are dropped before parsing, so `"1,2,"` yields two
/// values and `","` or `""` yields [`FilekitError::EmptyInput`]. Any other
/// piece that does not parse is reported as [`FilekitError::InvalidNumber`].
pub fn parse_delimited(text: &str, delimiter: &str) -> Result<Vec<f64>> {
    let separator = Regex::new(delimiter)?;
    let mut pieces: Vec<&str> = separator.split(text).map(str::trim).collect();

    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }

    if pieces.is_empty() {
        return Err(FilekitError::EmptyInput);
    }

    pieces
        .into_iter()
        .map(|piece| {
            piece.parse::<f64>().map_err(|_| FilekitError::InvalidNumber {
                token: piece.to_string(),
            })
        })
        .collect()
}
