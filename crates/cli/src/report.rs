//! Console and JSON reports for the hull, path, and tour commands.
//!
//! Formatting only; nothing here is part of the algorithmic contract.
//! Coordinates print with 4 decimals, elapsed time in seconds.

use std::time::Duration;

use serde::Serialize;

use hullpath::path::BoundaryPath;
use hullpath::tour::Tour;
use hullpath::Vec2;

#[derive(Serialize)]
pub struct HullReport {
    pub algo: &'static str,
    pub vertices: Vec<(f64, f64)>,
    pub size: usize,
    pub elapsed_s: f64,
}

impl HullReport {
    pub fn new(algo: &'static str, hull: Vec<Vec2<f64>>, elapsed: Duration) -> Self {
        Self {
            algo,
            vertices: pairs(&hull),
            size: hull.len(),
            elapsed_s: elapsed.as_secs_f64(),
        }
    }

    pub fn print(&self) {
        println!("================ Convex hull ({}) ================", self.algo);
        for (x, y) in &self.vertices {
            println!("x-value: {x:.4}, y-value: {y:.4}");
        }
        println!("Total points: {}", self.size);
        println!("Elapsed time: {:.6} seconds\n", self.elapsed_s);
    }
}

#[derive(Serialize)]
pub struct PathReport {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub points: Vec<(f64, f64)>,
    pub length: f64,
    pub elapsed_s: f64,
}

impl PathReport {
    pub fn new(s1: Vec2<f64>, s2: Vec2<f64>, path: BoundaryPath, elapsed: Duration) -> Self {
        Self {
            from: (s1.x, s1.y),
            to: (s2.x, s2.y),
            points: pairs(&path.points),
            length: path.length,
            elapsed_s: elapsed.as_secs_f64(),
        }
    }

    pub fn print(&self) {
        println!(
            "Shortest boundary path from ({:.4}, {:.4}) to ({:.4}, {:.4}):",
            self.from.0, self.from.1, self.to.0, self.to.1
        );
        for (x, y) in &self.points {
            println!("({x:.4}, {y:.4})");
        }
        println!("Length: {:.4}", self.length);
        println!("Elapsed time: {:.6} seconds\n", self.elapsed_s);
    }
}

#[derive(Serialize)]
pub struct TourReport {
    pub heuristic: &'static str,
    pub order: Vec<(f64, f64)>,
    pub length: f64,
    pub elapsed_s: f64,
}

impl TourReport {
    pub fn new(heuristic: &'static str, tour: Tour, elapsed: Duration) -> Self {
        Self {
            heuristic,
            order: pairs(&tour.order),
            length: tour.length,
            elapsed_s: elapsed.as_secs_f64(),
        }
    }

    pub fn print(&self) {
        println!("================ Tour ({}) ================", self.heuristic);
        for (x, y) in &self.order {
            println!("({x:.4}, {y:.4})");
        }
        println!("Length: {:.4}", self.length);
        println!("Elapsed time: {:.6} seconds\n", self.elapsed_s);
    }
}

fn pairs(pts: &[Vec2<f64>]) -> Vec<(f64, f64)> {
    pts.iter().map(|p| (p.x, p.y)).collect()
}
