// File: crates/demo/src/main.rs
// Summary: Demo loads (year, value) CSV or built-in sample data and renders a PNG.

use anyhow::{Context, Result};
use graph_core::{theme, Graph, GraphPoint, RenderOptions};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Usage: graph-demo [data.csv] [theme]
    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let theme_arg = args.next();

    let (data, stem) = match csv_arg.as_deref() {
        Some(raw) => {
            let path = Path::new(raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            let data = load_year_value_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if data.is_empty() {
                anyhow::bail!("no rows loaded - check headers/delimiter.");
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("graph")
                .to_string();
            (data, stem)
        }
        None => {
            println!("No input file given; using built-in sample data.");
            (sample_data(), "sample".to_string())
        }
    };
    println!("Loaded {} points", data.len());

    let max_value = data.iter().map(|p| p.value).max().unwrap_or(1).max(1);
    println!("Value ceiling: {max_value}");

    let mut graph = Graph::with_data(max_value, data);
    if let Some(name) = theme_arg.as_deref() {
        graph.theme = theme::find(name);
        println!("Theme: {}", graph.theme.name);
    }

    let opts = RenderOptions::default();
    let out = out_name(&stem, graph.theme.name);
    graph.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// The reference dataset: five years of values under a ceiling of 6.
fn sample_data() -> Vec<GraphPoint> {
    vec![
        GraphPoint::new(2022, 2),
        GraphPoint::new(2023, 3),
        GraphPoint::new(2024, 6),
        GraphPoint::new(2024, 0),
        GraphPoint::new(2025, 4),
    ]
}

/// Produce output file name like target/out/graph_<stem>_<theme>.png
fn out_name(stem: &str, theme: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("graph_{stem}_{theme}.png"));
    out
}

/// Load (year, value) rows from a headered CSV.
fn load_year_value_csv(path: &Path) -> Result<Vec<GraphPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_year = idx(&["year", "label", "x"]);
    let i_value = idx(&["value", "y", "count"]);
    if i_year.is_none() || i_value.is_none() {
        println!("Warning: Could not find year/value columns; expected headers like 'year,value'.");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<i32> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<i32>().ok())
        };
        if let (Some(year), Some(value)) = (parse(i_year), parse(i_value)) {
            out.push(GraphPoint::new(year, value));
        }
    }
    Ok(out)
}
