//! Constructive tour heuristics over a point sequence.
//!
//! Two cheap constructions with different biases, each returning the best
//! (shortest) closed tour it finds. Neither is exact: nearest-neighbor is
//! greedy, and the anchor-pair construction only permutes the first two
//! positions, leaving the remainder in source order. The anchor-pair
//! heuristic is kept as specified rather than upgraded to 2-opt; its value
//! is as a baseline with a different bias, not optimality.
//!
//! Tour length is cyclic: consecutive edges plus the edge closing back to
//! the start.

use nalgebra::Vector2;

use crate::geom::distance;

/// A visiting order over the input points and its closed-cycle length.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    pub order: Vec<Vector2<f64>>,
    pub length: f64,
}

impl Tour {
    fn trivial(points: &[Vector2<f64>]) -> Self {
        Tour {
            order: points.to_vec(),
            length: 0.0,
        }
    }
}

/// Total cyclic length of a visiting order.
fn cycle_length(order: &[Vector2<f64>]) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut len = 0.0;
    for w in order.windows(2) {
        len += distance(w[0], w[1]);
    }
    len + distance(order[order.len() - 1], order[0])
}

/// Greedy nearest-neighbor tour from every start; best one wins.
///
/// Each start builds a full permutation by repeatedly appending the nearest
/// unvisited point to the tail (distance ties keep the lowest index). O(n³)
/// over all starts.
pub fn nearest_neighbor_best(points: &[Vector2<f64>]) -> Tour {
    let n = points.len();
    if n <= 1 {
        return Tour::trivial(points);
    }

    let mut best: Option<Tour> = None;
    for start in 0..n {
        let candidate = nearest_neighbor_from(points, start);
        let better = match &best {
            None => true,
            Some(b) => candidate.length < b.length,
        };
        if better {
            best = Some(candidate);
        }
    }
    best.unwrap_or_else(|| Tour::trivial(points))
}

/// One greedy pass from a fixed start index.
fn nearest_neighbor_from(points: &[Vector2<f64>], start: usize) -> Tour {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[start] = true;
    order.push(points[start]);
    let mut tail = start;

    for _ in 1..n {
        let mut next: Option<usize> = None;
        let mut next_dist = f64::INFINITY;
        for (k, &p) in points.iter().enumerate() {
            if visited[k] {
                continue;
            }
            let d = distance(points[tail], p);
            if d < next_dist {
                next_dist = d;
                next = Some(k);
            }
        }
        // An unvisited point always remains until the loop ends.
        let Some(k) = next else { break };
        visited[k] = true;
        order.push(points[k]);
        tail = k;
    }

    let length = cycle_length(&order);
    Tour { order, length }
}

/// Exhaustive two-anchor construction: for every pair `i < j`, score the
/// tour `[p_i, p_j, rest in source order]` and keep the shortest.
///
/// Not a permutation search; O(n²) candidates, each scored in O(n).
pub fn anchor_pair_best(points: &[Vector2<f64>]) -> Tour {
    let n = points.len();
    if n <= 1 {
        return Tour::trivial(points);
    }

    let mut best: Option<Tour> = None;
    for i in 0..n {
        for j in (i + 1)..n {
            let mut order = Vec::with_capacity(n);
            order.push(points[i]);
            order.push(points[j]);
            for (k, &p) in points.iter().enumerate() {
                if k != i && k != j {
                    order.push(p);
                }
            }
            let length = cycle_length(&order);
            let better = match &best {
                None => true,
                Some(b) => length < b.length,
            };
            if better {
                best = Some(Tour { order, length });
            }
        }
    }
    best.unwrap_or_else(|| Tour::trivial(points))
}
