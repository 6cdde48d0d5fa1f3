//! Convex hulls of 2D point sets and paths over their vertices.
//!
//! Purpose
//! - Two independent hull constructions over the same point set: an O(n³)
//!   brute-force extreme-point test (`hull::brute`) and a recursive
//!   divide-and-conquer quickhull (`hull::quick`).
//! - Path exploration over the hull vertices: the shorter boundary arc
//!   between two named vertices (`path`), and two constructive tour
//!   heuristics (`tour`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Vec2`). Hull lookup and
//!   deduplication use exact coordinate equality, never an epsilon; callers
//!   must query with coordinates as read, not recomputed ones.
//! - Hull ordering is construction order, not a CCW polygon. Both algorithms
//!   agree on the SET of extreme points for inputs in general position.
//! - All algorithms are pure: borrowed immutable input, freshly allocated
//!   output, no shared state across calls.

pub mod error;
pub mod geom;
pub mod hull;
pub mod path;
pub mod pointset;
pub mod rand;
pub mod tour;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom::{cross, distance, same_side};
    pub use crate::hull::{brute_hull, quick_hull};
    pub use crate::path::{boundary_path, BoundaryPath};
    pub use crate::pointset::read_points;
    pub use crate::rand::{scatter_points, ReplayToken, ScatterCfg};
    pub use crate::tour::{anchor_pair_best, nearest_neighbor_best, Tour};
    pub use nalgebra::Vector2 as Vec2;
}
