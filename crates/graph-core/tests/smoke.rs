// File: crates/graph-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, plus error paths.

use graph_core::{Graph, GraphPoint, RenderOptions};

fn reference_graph() -> Graph {
    Graph::with_data(
        6,
        vec![
            GraphPoint::new(2022, 2),
            GraphPoint::new(2023, 3),
            GraphPoint::new(2024, 6),
            GraphPoint::new(2024, 0),
            GraphPoint::new(2025, 4),
        ],
    )
}

#[test]
fn render_smoke_png() {
    let graph = reference_graph();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    graph.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = graph.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let graph = reference_graph();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = graph.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn empty_data_aborts_the_render() {
    let graph = Graph::new(6);
    let err = graph
        .render_to_png_bytes(&RenderOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("no data points"), "{err}");
}

#[test]
fn zero_ceiling_aborts_the_render() {
    let graph = Graph::with_data(0, vec![GraphPoint::new(2022, 2)]);
    let err = graph
        .render_to_png_bytes(&RenderOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("max value"), "{err}");
}
