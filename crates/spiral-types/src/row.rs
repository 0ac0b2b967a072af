//! Positional-array row decoding helpers
//!
//! Several Spiral wire formats encode records as fixed-arity JSON arrays
//! rather than objects. These helpers give every element an explicit arity
//! and type check, so a malformed row yields a describable error instead of
//! a partially populated record.

use serde_json::Value;

use crate::error::SpiralError;

/// Checks that `row` has exactly `expected` elements.
pub(crate) fn check_arity(
    what: &'static str,
    row: &[Value],
    expected: usize,
) -> Result<(), SpiralError> {
    if row.len() != expected {
        return Err(SpiralError::RowArity {
            what,
            expected,
            actual: row.len(),
        });
    }
    Ok(())
}

/// Decodes element `index` as an integer (timestamps, trade counts).
pub(crate) fn int_at(what: &'static str, row: &[Value], index: usize) -> Result<i64, SpiralError> {
    row.get(index).and_then(Value::as_i64).ok_or(SpiralError::RowType {
        what,
        index,
        expected: "an integer",
    })
}

/// Decodes element `index` as a raw string.
pub(crate) fn str_at<'a>(
    what: &'static str,
    row: &'a [Value],
    index: usize,
) -> Result<&'a str, SpiralError> {
    row.get(index).and_then(Value::as_str).ok_or(SpiralError::RowType {
        what,
        index,
        expected: "a string",
    })
}

/// Decodes element `index` as a numeric string parsed into an f64.
pub(crate) fn float_str_at(
    what: &'static str,
    row: &[Value],
    index: usize,
) -> Result<f64, SpiralError> {
    let raw = str_at(what, row, index)?;
    raw.parse::<f64>().map_err(|source| SpiralError::NumericString {
        what,
        index,
        value: raw.to_string(),
        source,
    })
}
