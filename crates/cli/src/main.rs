use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hullgeom::geom2::{
    orientation_eps, segments_intersect_cfg, simple_polygon_violation_cfg, IntersectCfg,
    Orientation, Segment2,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment-intersection checks for concave-hull boundaries")]
struct Cmd {
    /// Collinearity tolerance on the cross term (0 = exact)
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test one pair of segments given as `x1,y1,x2,y2`
    Check {
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        a: Segment2,
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        b: Segment2,
    },
    /// Annotate a CSV of segment pairs with an `intersects` column
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Check whether a closed ring (CSV with `x,y`) is simple
    Polygon {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = IntersectCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Check { a, b } => print_json(&check(a, b, cfg)),
        Action::Batch { input, out } => print_json(&batch(&input, &out, cfg)?),
        Action::Polygon { input } => print_json(&polygon(&input, cfg)?),
        Action::Report => report(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_segment(s: &str) -> Result<Segment2, String> {
    let coords: Vec<f64> = s
        .split(',')
        .map(|t| t.trim().parse::<f64>().map_err(|e| format!("`{t}`: {e}")))
        .collect::<Result<_, _>>()?;
    let &[px, py, qx, qy] = coords.as_slice() else {
        return Err(format!("expected 4 comma-separated numbers, got {}", coords.len()));
    };
    let seg = Segment2::from_coords(px, py, qx, qy);
    if !seg.is_finite() {
        return Err("coordinates must be finite".to_string());
    }
    Ok(seg)
}

fn orientation_label(o: Orientation) -> &'static str {
    match o {
        Orientation::Collinear => "collinear",
        Orientation::Clockwise => "clockwise",
        Orientation::CounterClockwise => "counterclockwise",
    }
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    intersects: bool,
    /// o1..o4 as used by the predicate.
    orientations: [&'static str; 4],
    eps: f64,
}

fn check(a: Segment2, b: Segment2, cfg: IntersectCfg) -> CheckOutput {
    let eps = cfg.eps_collinear;
    let orientations = [
        orientation_eps(a.p, a.q, b.p, eps),
        orientation_eps(a.p, a.q, b.q, eps),
        orientation_eps(b.p, b.q, a.p, eps),
        orientation_eps(b.p, b.q, a.q, eps),
    ]
    .map(orientation_label);
    let intersects = segments_intersect_cfg(a.p, a.q, b.p, b.q, cfg);
    tracing::info!(?a, ?b, intersects, eps, "check");
    CheckOutput {
        intersects,
        orientations,
        eps,
    }
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    rows: usize,
    hits: usize,
    provenance: PathBuf,
}

fn batch(input: &Path, out: &Path, cfg: IntersectCfg) -> Result<BatchSummary> {
    tracing::info!(input = %input.display(), out = %out.display(), eps = cfg.eps_collinear, "batch");
    let mut df = table::read_csv(input)?;
    let rows = df.height();
    let hits = table::annotate_pairs(&mut df, cfg)?;
    table::write_csv(&mut df, out)?;
    tracing::info!(rows, hits, "batch_done");

    let payload = provenance::Payload::new(serde_json::json!({
        "eps": cfg.eps_collinear,
        "rows": rows,
        "hits": hits
    }))
    .with_input(input);
    let provenance = provenance::write_sidecar(out, payload)?;
    Ok(BatchSummary {
        rows,
        hits,
        provenance,
    })
}

#[derive(Debug, Serialize)]
struct PolygonOutput {
    vertices: usize,
    simple: bool,
    /// First offending edge pair; edge k runs from vertex k to vertex k+1 (mod n).
    violation: Option<(usize, usize)>,
}

fn polygon(input: &Path, cfg: IntersectCfg) -> Result<PolygonOutput> {
    let df = table::read_csv(input)?;
    let ring = table::ring(&df)?;
    if ring.len() < 3 {
        bail!("ring needs at least 3 vertices, got {}", ring.len());
    }
    let violation = simple_polygon_violation_cfg(&ring, cfg);
    tracing::info!(vertices = ring.len(), violation = ?violation, "polygon");
    Ok(PolygonOutput {
        vertices: ring.len(),
        simple: violation.is_none(),
        violation,
    })
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": hullgeom::VERSION,
        "params": {},
        "outputs": []
    });
    print_json(&obj)
}
