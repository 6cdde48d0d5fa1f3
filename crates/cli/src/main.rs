use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use hullpath::hull::{brute_hull, quick_hull};
use hullpath::path::boundary_path;
use hullpath::pointset::read_points;
use hullpath::tour::{anchor_pair_best, nearest_neighbor_best};
use hullpath::Vec2;

mod report;

use crate::report::{HullReport, PathReport, TourReport};

#[derive(Parser)]
#[command(name = "hullpath")]
#[command(about = "Convex hulls of 2D point sets and paths over their vertices")]
struct Cmd {
    /// Emit a JSON report on stdout instead of the console format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull by one or both algorithms
    Hull {
        /// Point-set file: whitespace-separated `x y` pairs
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
    },
    /// Shortest boundary arc between two hull vertices
    Path {
        #[arg(long)]
        input: PathBuf,
        /// Hull algorithm backing the query
        #[arg(long, value_enum, default_value_t = Algo::Quick)]
        algo: Algo,
        /// First query vertex; read from stdin when absent
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        from: Option<Vec<f64>>,
        /// Second query vertex; read from stdin when absent
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        to: Option<Vec<f64>>,
    },
    /// Short tours over the hull vertices by constructive heuristics
    Tour {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Heuristic::Both)]
        heuristic: Heuristic,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algo {
    Brute,
    Quick,
    Both,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Heuristic {
    Nearest,
    Anchor,
    Both,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, algo } => run_hull(input, algo, cmd.json),
        Action::Path {
            input,
            algo,
            from,
            to,
        } => run_path(input, algo, from, to, cmd.json),
        Action::Tour { input, heuristic } => run_tour(input, heuristic, cmd.json),
    }
}

fn run_hull(input: PathBuf, algo: Algo, json: bool) -> Result<()> {
    let points = read_points(&input)
        .with_context(|| format!("reading point set {}", input.display()))?;
    tracing::info!(points = points.len(), input = %input.display(), "hull");

    let mut reports = Vec::new();
    if matches!(algo, Algo::Brute | Algo::Both) {
        let start = Instant::now();
        let hull = brute_hull(&points)?;
        reports.push(HullReport::new("brute", hull, start.elapsed()));
    }
    if matches!(algo, Algo::Quick | Algo::Both) {
        let start = Instant::now();
        let hull = quick_hull(&points)?;
        reports.push(HullReport::new("quick", hull, start.elapsed()));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            r.print();
        }
    }
    Ok(())
}

fn run_path(
    input: PathBuf,
    algo: Algo,
    from: Option<Vec<f64>>,
    to: Option<Vec<f64>>,
    json: bool,
) -> Result<()> {
    let points = read_points(&input)
        .with_context(|| format!("reading point set {}", input.display()))?;
    let hull = match algo {
        Algo::Brute => brute_hull(&points)?,
        // `both` makes no sense for a single query; quickhull backs it.
        Algo::Quick | Algo::Both => quick_hull(&points)?,
    };
    tracing::info!(points = points.len(), hull = hull.len(), "path");

    let s1 = query_vertex(from, "s1")?;
    let s2 = query_vertex(to, "s2")?;
    let start = Instant::now();
    let path = boundary_path(&hull, s1, s2)?;
    let report = PathReport::new(s1, s2, path, start.elapsed());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}

fn run_tour(input: PathBuf, heuristic: Heuristic, json: bool) -> Result<()> {
    let points = read_points(&input)
        .with_context(|| format!("reading point set {}", input.display()))?;
    let hull = quick_hull(&points)?;
    tracing::info!(points = points.len(), hull = hull.len(), "tour");

    let mut reports = Vec::new();
    if matches!(heuristic, Heuristic::Nearest | Heuristic::Both) {
        let start = Instant::now();
        let tour = nearest_neighbor_best(&hull);
        reports.push(TourReport::new("nearest-neighbor", tour, start.elapsed()));
    }
    if matches!(heuristic, Heuristic::Anchor | Heuristic::Both) {
        let start = Instant::now();
        let tour = anchor_pair_best(&hull);
        reports.push(TourReport::new("anchor-pair", tour, start.elapsed()));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            r.print();
        }
    }
    Ok(())
}

/// Use the `--from`/`--to` coordinates when given, otherwise prompt and read
/// one `x y` pair from stdin.
fn query_vertex(arg: Option<Vec<f64>>, name: &str) -> Result<Vec2<f64>> {
    if let Some(xy) = arg {
        // clap enforces num_args = 2
        return Ok(Vec2::new(xy[0], xy[1]));
    }
    eprintln!("Enter {name} x and y separated by space:");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading query vertex from stdin")?;
    let mut it = line.split_whitespace();
    let (Some(xs), Some(ys)) = (it.next(), it.next()) else {
        bail!("expected `x y` for {name}, got {line:?}");
    };
    let x: f64 = xs.parse().with_context(|| format!("parsing {name} x"))?;
    let y: f64 = ys.parse().with_context(|| format!("parsing {name} y"))?;
    Ok(Vec2::new(x, y))
}
