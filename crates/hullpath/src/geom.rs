//! Planar predicates shared by both hull algorithms and the path code.
//!
//! Conventions
//! - `cross(a, b, c)` is twice the signed area of triangle abc: positive when
//!   `c` is strictly left of the directed line `a→b`.
//! - `same_side` is the strict negative-side test used by the brute-force
//!   hull; collinear points (signed area exactly 0) are NOT on the side, and
//!   callers must handle that boundary case themselves.

use nalgebra::Vector2;

/// True iff `p3` lies strictly on the negative side of the directed line
/// `p1→p2`. Collinear returns false.
#[inline]
pub fn same_side(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) - (p3.x - p1.x) * (p2.y - p1.y) < 0.0
}

/// Twice the signed area of triangle `abc`; sign gives the half-plane of `c`
/// relative to `a→b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Euclidean distance, f64 throughout (tour-length comparisons accumulate
/// many of these).
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn same_side_strict_on_collinear() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        // Below the x-axis is the negative side for a left-to-right line.
        assert!(same_side(a, b, vector![2.0, -1.0]));
        assert!(!same_side(a, b, vector![2.0, 1.0]));
        // Exactly on the line: not on the side.
        assert!(!same_side(a, b, vector![2.0, 0.0]));
    }

    #[test]
    fn cross_sign_and_magnitude() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(cross(a, b, vector![0.0, 1.0]) > 0.0);
        assert!(cross(a, b, vector![0.0, -1.0]) < 0.0);
        assert_eq!(cross(a, b, vector![0.5, 0.0]), 0.0);
        // Unit right triangle has area 1/2, so cross = 1.
        assert!((cross(a, b, vector![1.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(vector![0.0, 0.0], vector![3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(distance(vector![1.5, -2.0], vector![1.5, -2.0]), 0.0);
    }
}
