//! Convex hull construction, twice.
//!
//! Purpose
//! - `brute`: O(n³) extreme-point enumeration by the same-side test over all
//!   ordered point pairs. Simple, a correctness oracle for small inputs.
//! - `quick`: O(n log n) expected divide-and-conquer (quickhull) via
//!   farthest-point partitioning around the leftmost/rightmost seed pair.
//!
//! Both return hull vertices drawn verbatim from the input slice (no
//! fabricated coordinates) in construction order, which is NOT a CCW
//! traversal. For inputs in general position the two agree as sets.

mod brute;
mod quick;

pub use brute::brute_hull;
pub use quick::quick_hull;
