//! Typed failures for the hull and path algorithms.
//!
//! Policy
//! - Algorithmic failures (`InvalidInput`, `PointNotOnHull`) are recoverable
//!   and surfaced to the caller; geometric ambiguities (collinearity,
//!   duplicates, ties) are NOT errors and are resolved by deterministic
//!   tie-break rules in the algorithms themselves.
//! - I/O failures are terminal for a run but never corrupt prior results.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HullError {
    /// Point count below the algorithmic minimum (3 for the brute-force
    /// hull, 2 for quickhull).
    #[error("need at least {needed} points, got {got}")]
    InvalidInput { needed: usize, got: usize },

    /// A boundary-path query point matched no hull vertex. Lookup is exact
    /// coordinate equality, so recomputed coordinates will miss.
    #[error("query point ({x}, {y}) is not a hull vertex")]
    PointNotOnHull { x: f64, y: f64 },

    /// The point-set source could not be opened or read.
    #[error("point-set source unavailable: {0}")]
    FileUnavailable(#[from] std::io::Error),

    /// A token in the point-set source did not parse as an f64, or the
    /// source ended on an unpaired x coordinate.
    #[error("malformed point data at token {token_index}")]
    Parse { token_index: usize },
}
