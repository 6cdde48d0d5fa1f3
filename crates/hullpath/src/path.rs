//! Shortest boundary arc between two hull vertices.
//!
//! The hull is treated as a cyclic sequence in its stored order. Two arcs
//! connect any two vertices: forward (increasing index, wrapping) and
//! backward (the complement). Each arc is scored by the sum of consecutive
//! edge lengths along it; the shorter one is returned together with its
//! total length.
//!
//! Lookup is exact coordinate equality, inherited from the source data
//! model: query with coordinates as read from input, not recomputed ones.

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom::distance;

/// One boundary arc and its total edge length.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPath {
    pub points: Vec<Vector2<f64>>,
    pub length: f64,
}

/// Shorter of the two boundary arcs connecting `s1` and `s2` on `hull`.
///
/// Fails with `PointNotOnHull` if either query point is absent (exact
/// match). `s1 == s2` yields a single-point, zero-length path.
pub fn boundary_path(
    hull: &[Vector2<f64>],
    s1: Vector2<f64>,
    s2: Vector2<f64>,
) -> Result<BoundaryPath, HullError> {
    let i1 = find_vertex(hull, s1)?;
    let i2 = find_vertex(hull, s2)?;
    let n = hull.len();

    if i1 == i2 {
        return Ok(BoundaryPath {
            points: vec![hull[i1]],
            length: 0.0,
        });
    }

    let forward = walk(hull, i1, i2, |i| (i + 1) % n);
    let backward = walk(hull, i1, i2, |i| (i + n - 1) % n);
    if forward.length <= backward.length {
        Ok(forward)
    } else {
        Ok(backward)
    }
}

fn find_vertex(hull: &[Vector2<f64>], p: Vector2<f64>) -> Result<usize, HullError> {
    hull.iter()
        .position(|&h| h == p)
        .ok_or(HullError::PointNotOnHull { x: p.x, y: p.y })
}

/// Walk from `from` to `to` by repeatedly applying `step`, accumulating the
/// edge lengths along the way.
fn walk(
    hull: &[Vector2<f64>],
    from: usize,
    to: usize,
    step: impl Fn(usize) -> usize,
) -> BoundaryPath {
    let mut points = vec![hull[from]];
    let mut length = 0.0;
    let mut i = from;
    while i != to {
        let next = step(i);
        length += distance(hull[i], hull[next]);
        points.push(hull[next]);
        i = next;
    }
    BoundaryPath { points, length }
}
