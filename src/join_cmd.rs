//! The `join` subcommand: load a point table, run the self-join, write the
//! neighbor listing.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use pagejoin_knn::{EuclideanMetric, JoinConfig, JoinObserver, knn_join_with_observer};
use pagejoin_spatial::FixedPageView;

use crate::cli::JoinArgs;

/// Forwards join progress to tracing after each query page.
struct LogObserver;

impl JoinObserver for LogObserver {
    fn report(&mut self, processed: usize, total: usize) {
        info!(processed, total, "join progress");
    }
}

pub fn run(args: JoinArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let (points, dims) = parse_points(&text)?;
    info!(points = points.len() / dims, dims, "loaded point table");

    let view = FixedPageView::new(points.clone(), dims, args.page_size)?;
    let metric = EuclideanMetric::new(&points, dims)?;
    let config = JoinConfig::new(args.k).with_include_self(!args.exclude_self);

    let result = knn_join_with_observer(&view, &metric, &config, &mut LogObserver)
        .context("knn join failed")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    for id in 0..points.len() / dims {
        let neighbors = result
            .neighbors(id)
            .ok_or_else(|| anyhow!("missing object {id} in join result"))?;
        write!(out, "{id}:")?;
        for nb in neighbors {
            write!(out, " {}@{:.6}", nb.id, nb.distance)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Parses a whitespace- or comma-separated point table into a flat
/// row-major vector and its dimensionality.
fn parse_points(text: &str) -> Result<(Vec<f64>, usize)> {
    let mut points = Vec::new();
    let mut dims = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row: Vec<f64> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<f64>()
                    .with_context(|| format!("line {}: bad coordinate {t:?}", lineno + 1))
            })
            .collect::<Result<_>>()?;
        if dims == 0 {
            dims = row.len();
        } else if row.len() != dims {
            bail!(
                "line {}: expected {dims} coordinates, got {}",
                lineno + 1,
                row.len()
            );
        }
        points.extend(row);
    }
    if dims == 0 {
        bail!("input contains no points");
    }
    Ok((points, dims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators_and_comments() {
        let text = "# header\n1.0, 2.0\n3.0 4.0\n\n5.0,6.0\n";
        let (points, dims) = parse_points(text).unwrap();
        assert_eq!(dims, 2);
        assert_eq!(points, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let text = "1.0 2.0\n3.0\n";
        assert!(parse_points(text).is_err());
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(parse_points("1.0 abc\n").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_points("# only a comment\n").is_err());
    }
}
