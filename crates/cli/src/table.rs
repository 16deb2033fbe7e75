//! CSV tables of segment pairs and polygon rings (polars).
//!
//! Pair tables carry `p1x,p1y,q1x,q1y,p2x,p2y,q2x,q2y`; ring tables carry
//! `x,y`. Extra columns are kept and passed through to the output.

use anyhow::{bail, Context, Result};
use hullgeom::geom2::{segments_intersect_cfg, IntersectCfg, Segment2};
use hullgeom::Vec2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const PAIR_COLUMNS: [&str; 8] = ["p1x", "p1y", "q1x", "q1y", "p2x", "p2y", "q2x", "q2y"];
pub const RING_COLUMNS: [&str; 2] = ["x", "y"];
pub const RESULT_COLUMN: &str = "intersects";

pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(df)
}

/// Pull `names` as f64 columns, rejecting nulls and non-finite values.
fn float_columns(df: &DataFrame, names: &[&str]) -> Result<Vec<Vec<f64>>> {
    names
        .iter()
        .map(|&name| {
            let col = df
                .column(name)
                .with_context(|| format!("missing column `{name}`"))?
                .cast(&DataType::Float64)
                .with_context(|| format!("column `{name}` is not numeric"))?;
            let values = col.f64()?;
            values
                .into_iter()
                .enumerate()
                .map(|(row, v)| match v {
                    Some(v) if v.is_finite() => Ok(v),
                    Some(v) => bail!("row {row}: non-finite `{name}` = {v}"),
                    None => bail!("row {row}: missing `{name}`"),
                })
                .collect()
        })
        .collect()
}

pub fn segment_pairs(df: &DataFrame) -> Result<Vec<(Segment2, Segment2)>> {
    let cols = float_columns(df, &PAIR_COLUMNS)?;
    let pairs = (0..df.height())
        .map(|i| {
            let a = Segment2::from_coords(cols[0][i], cols[1][i], cols[2][i], cols[3][i]);
            let b = Segment2::from_coords(cols[4][i], cols[5][i], cols[6][i], cols[7][i]);
            (a, b)
        })
        .collect();
    Ok(pairs)
}

pub fn ring(df: &DataFrame) -> Result<Vec<Vec2<f64>>> {
    let cols = float_columns(df, &RING_COLUMNS)?;
    Ok((0..df.height())
        .map(|i| Vec2::new(cols[0][i], cols[1][i]))
        .collect())
}

/// Evaluate every pair and append the `intersects` column.
pub fn annotate_pairs(df: &mut DataFrame, cfg: IntersectCfg) -> Result<usize> {
    let flags: Vec<bool> = segment_pairs(df)?
        .iter()
        .map(|(a, b)| segments_intersect_cfg(a.p, a.q, b.p, b.q, cfg))
        .collect();
    let hits = flags.iter().filter(|&&f| f).count();
    df.with_column(Series::new(RESULT_COLUMN.into(), flags))?;
    Ok(hits)
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
