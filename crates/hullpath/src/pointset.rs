//! Point-set ingestion: whitespace-separated `x y` pairs from a file.
//!
//! The reader consumes f64 tokens in pairs until the source is exhausted,
//! into a vector sized by the actual input. A malformed token or a trailing
//! unpaired coordinate is an explicit `Parse` failure rather than a silent
//! stop with an undefined tail.

use std::fs;
use std::path::Path;

use nalgebra::Vector2;

use crate::error::HullError;

/// Read every `x y` pair from `path`.
///
/// Fails with `FileUnavailable` if the file cannot be read, and with
/// `Parse { token_index }` on the first non-float token or an odd token
/// count. An empty file yields an empty set.
pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>, HullError> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Token-level parser behind `read_points`, split out for tests.
pub fn parse_points(text: &str) -> Result<Vec<Vector2<f64>>, HullError> {
    let mut points = Vec::new();
    let mut pending: Option<f64> = None;
    for (token_index, token) in text.split_whitespace().enumerate() {
        let value: f64 = token
            .parse()
            .map_err(|_| HullError::Parse { token_index })?;
        match pending.take() {
            None => pending = Some(value),
            Some(x) => points.push(Vector2::new(x, value)),
        }
    }
    if pending.is_some() {
        return Err(HullError::Parse {
            token_index: points.len() * 2,
        });
    }
    Ok(points)
}
