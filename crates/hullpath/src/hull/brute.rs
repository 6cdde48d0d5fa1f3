//! Brute-force extreme-point enumeration.
//!
//! A point `p_i` is extreme iff some directed line `p_i→p_j` has every other
//! point strictly on its negative side. The same-side test is strict, so a
//! third point exactly on the candidate line disqualifies that pair; a vertex
//! on a collinear boundary edge can still qualify through a different `j`.
//!
//! Output order is discovery order (outer `i`, inner `j`), deduplicated by
//! exact coordinate equality with first occurrence kept.

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom::same_side;

/// Extreme points of `points` by the O(n³) pairwise same-side test.
///
/// Requires `n >= 3`; fewer points have no interior to separate and fail
/// with `InvalidInput`.
pub fn brute_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    let n = points.len();
    if n < 3 {
        return Err(HullError::InvalidInput { needed: 3, got: n });
    }

    let mut hull: Vec<Vector2<f64>> = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let p1 = points[i];
            let p2 = points[j];
            let all_on_side = (0..n)
                .filter(|&k| k != i && k != j)
                .all(|k| same_side(p1, p2, points[k]));
            if all_on_side {
                if !hull.contains(&p1) {
                    hull.push(p1);
                }
                // Further j's can only rediscover p_i.
                break;
            }
        }
    }
    Ok(hull)
}
