mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use graham::hull::{convex_hull, doubled_area, polar_order, HullOrder, ScanCfg};
use graham::sample::{draw_points, ReplayToken, SampleCfg, Shape};
use graham::{Point, PointSet};
use provenance::Payload;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

/// Header line of the plain hull output.
const RESULT_TITLE: &str = "result";

#[derive(Parser)]
#[command(name = "graham")]
#[command(about = "Convex hulls of integer point sets (Graham scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `x,y` records and print their convex hull
    Hull(HullArgs),
    /// Write a seeded random point cloud as `x,y` lines
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct HullArgs {
    /// Input file; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output file (plus a provenance sidecar); stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OrderArg::Sorted)]
    order: OrderArg,
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,
    /// Fail on a malformed record instead of ending the input there
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct SampleArgs {
    #[arg(long)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, default_value_t = 1_000)]
    radius: i32,
    #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
    shape: ShapeArg,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    Sorted,
    Ccw,
}

impl From<OrderArg> for HullOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Sorted => HullOrder::Sorted,
            OrderArg::Ccw => HullOrder::CounterClockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Disk,
}

impl From<ShapeArg> for Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Square => Shape::Square,
            ShapeArg::Disk => Shape::Disk,
        }
    }
}

#[derive(Serialize)]
struct HullReport {
    count: usize,
    hull: Vec<[i32; 2]>,
    doubled_area: i128,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Sample(args) => sample(args),
        Action::Report => report(),
    }
}

fn hull(args: HullArgs) -> Result<()> {
    tracing::info!(input = ?args.input, out = ?args.out, order = ?args.order, "hull");
    let text = input::read_source(args.input.as_deref())?;
    let points = input::parse_points(&text, args.strict)?;
    let cfg = ScanCfg {
        order: args.order.into(),
    };
    let hull = convex_hull(points.iter().copied(), &cfg);
    tracing::info!(points = points.len(), vertices = hull.len(), "hull computed");

    let rendered = match args.format {
        Format::Plain => render_plain(&hull),
        Format::Json => render_json(&hull)?,
    };
    match &args.out {
        Some(path) => {
            write_output(path, &rendered)?;
            let params = json!({
                "input": args.input,
                "order": format!("{:?}", args.order).to_lowercase(),
                "format": format!("{:?}", args.format).to_lowercase(),
                "strict": args.strict,
                "points_read": points.len(),
            });
            provenance::write_sidecar(path, Payload::new("hull", params))?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn sample(args: SampleArgs) -> Result<()> {
    tracing::info!(count = args.count, seed = args.seed, index = args.index, "sample");
    let cfg = SampleCfg {
        count: args.count,
        radius: args.radius,
        shape: args.shape.into(),
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let rendered: String = draw_points(cfg, tok).iter().map(Point::to_line).collect();
    match &args.out {
        Some(path) => {
            write_output(path, &rendered)?;
            let params = json!({
                "count": args.count,
                "seed": args.seed,
                "index": args.index,
                "radius": args.radius,
                "shape": format!("{:?}", args.shape).to_lowercase(),
            });
            provenance::write_sidecar(path, Payload::new("sample", params))?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "tool": { "name": "graham", "version": graham::VERSION },
        "code_rev": provenance::current_git_rev(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// `result` header, then one `x,y` line per vertex.
fn render_plain(hull: &PointSet) -> String {
    format!("{RESULT_TITLE}\n{hull}")
}

fn render_json(hull: &PointSet) -> Result<String> {
    let report = HullReport {
        count: hull.len(),
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
        doubled_area: enclosed_doubled_area(hull.as_slice()),
    };
    let mut out = serde_json::to_string_pretty(&report).context("serializing hull")?;
    out.push('\n');
    Ok(out)
}

/// Twice the hull area, whatever order the vertices come in.
fn enclosed_doubled_area(vertices: &[Point]) -> i128 {
    let mut boundary = vertices.to_vec();
    if let Some(&lowest) = boundary.iter().min() {
        boundary.sort_by(polar_order(lowest));
    }
    doubled_area(&boundary)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    provenance::ensure_parent(path)?;
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn hull_of(coords: &[(i32, i32)], order: HullOrder) -> PointSet {
        convex_hull(
            coords.iter().copied().map(Point::from),
            &ScanCfg { order },
        )
    }

    #[test]
    fn plain_output_has_header_and_lines() {
        let hull = hull_of(&[(0, 0), (0, 2), (2, 2), (2, 0), (1, 1)], HullOrder::Sorted);
        assert_eq!(render_plain(&hull), "result\n0,0\n0,2\n2,0\n2,2\n");
    }

    #[test]
    fn plain_output_for_empty_input() {
        assert_eq!(render_plain(&hull_of(&[], HullOrder::Sorted)), "result\n");
    }

    #[test]
    fn json_area_is_order_independent() {
        let coords = [(0, 0), (4, 0), (4, 3), (0, 3), (2, 1)];
        for order in [HullOrder::Sorted, HullOrder::CounterClockwise] {
            let parsed: Value =
                serde_json::from_str(&render_json(&hull_of(&coords, order)).unwrap()).unwrap();
            assert_eq!(parsed["count"], 4);
            assert_eq!(parsed["doubled_area"], 24);
        }
        let sorted: Value = serde_json::from_str(
            &render_json(&hull_of(&coords, HullOrder::Sorted)).unwrap(),
        )
        .unwrap();
        assert_eq!(sorted["hull"][0], json!([0, 0]));
        assert_eq!(sorted["hull"][3], json!([4, 3]));
    }

    #[test]
    fn degenerate_hulls_have_zero_area() {
        assert_eq!(enclosed_doubled_area(&[]), 0);
        assert_eq!(
            enclosed_doubled_area(&[Point::new(0, 0), Point::new(3, 0)]),
            0
        );
    }

    #[test]
    fn cli_parses_hull_flags() {
        let cmd = Cmd::try_parse_from(["graham", "hull", "--order", "ccw", "--format", "json"])
            .unwrap();
        match cmd.action {
            Action::Hull(args) => {
                assert!(matches!(args.order, OrderArg::Ccw));
                assert!(matches!(args.format, Format::Json));
                assert!(!args.strict);
                assert!(args.input.is_none());
            }
            _ => panic!("expected hull"),
        }
    }

    #[test]
    fn write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("hull.txt");
        write_output(&path, "result\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "result\n");
    }
}
