use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_core::curve::{shadow_path, stroke_path};
use graph_core::{GraphPoint, GraphScale, GraphStyle};

fn build_data(n: usize) -> Vec<GraphPoint> {
    (0..n)
        .map(|i| GraphPoint::new(2000 + i as i32, (i % 7) as i32))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_and_curve");
    for &n in &[100usize, 10_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let data = build_data(n);
            let style = GraphStyle::default();
            let scale = GraphScale::new(1080.0, 900.0, &style, 6, data.len()).expect("scale");
            b.iter(|| {
                let points = scale.map_points(&data);
                let stroke = stroke_path(&points, scale.tail_anchor());
                let shadow = shadow_path(&points, scale.bottom);
                black_box((stroke, shadow));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
