//! Quickhull: divide-and-conquer hull via farthest-point partitioning.
//!
//! The hull sequence is seeded with [leftmost, rightmost], then each
//! recursive step finds the candidate farthest from the current segment
//! (cross-product magnitude, positive side for the upper half, negative for
//! the lower), inserts it, and recurses on the two sub-segments. Each call
//! returns a freshly built vector which the caller concatenates, so no
//! output buffer is threaded through the recursion.
//!
//! Tie-breaks are deterministic: leftmost/rightmost scans keep the first
//! point at the extreme x, and a farthest-point tie keeps the first point
//! scanned at the maximal cross product. Recursion depth is bounded by the
//! hull size: every inserted point strictly shrinks the extent on its side.
//!
//! When every point shares one x coordinate the strict seed scans leave
//! leftmost == rightmost, so the "seed pair" degenerates to the first point
//! twice and the recursion finds nothing beyond it.

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom::cross;

/// Convex hull of `points` by quickhull.
///
/// Requires `n >= 2`. All points collinear degenerates to the seed pair
/// [leftmost, rightmost] alone.
pub fn quick_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    let n = points.len();
    if n < 2 {
        return Err(HullError::InvalidInput { needed: 2, got: n });
    }

    let mut leftmost = points[0];
    let mut rightmost = points[0];
    for &p in &points[1..] {
        if p.x < leftmost.x {
            leftmost = p;
        }
        if p.x > rightmost.x {
            rightmost = p;
        }
    }

    let mut hull = vec![leftmost, rightmost];
    hull.extend(expand(points, leftmost, rightmost, Side::Upper));
    hull.extend(expand(points, leftmost, rightmost, Side::Lower));
    Ok(hull)
}

#[derive(Clone, Copy)]
enum Side {
    Upper,
    Lower,
}

/// Farthest point from segment `a→b` on the given side, then recurse on the
/// two sub-segments it induces. Empty when no candidate is strictly on the
/// side.
fn expand(
    points: &[Vector2<f64>],
    a: Vector2<f64>,
    b: Vector2<f64>,
    side: Side,
) -> Vec<Vector2<f64>> {
    let mut best: Option<Vector2<f64>> = None;
    let mut best_dist = 0.0;
    for &p in points {
        let d = cross(a, b, p);
        let beats = match side {
            Side::Upper => d > best_dist,
            Side::Lower => d < best_dist,
        };
        if beats {
            best_dist = d;
            best = Some(p);
        }
    }

    match best {
        None => Vec::new(),
        Some(c) => {
            let mut out = vec![c];
            out.extend(expand(points, a, c, side));
            out.extend(expand(points, c, b, side));
            out
        }
    }
}
