// File: crates/graph-core/src/graph.rs
// Summary: Graph struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::curve;
use crate::error::GraphError;
use crate::geometry::{Path, PathVerb, PxPoint};
use crate::grid;
use crate::scale::GraphScale;
use crate::style::GraphStyle;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{GraphPoint, HEIGHT, WIDTH};

/// Left inset of the gridline value labels.
const ROW_LABEL_INSET: f32 = 20.0;
/// Baseline drop of the gridline value labels below their line.
const ROW_LABEL_DROP: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Disable for deterministic output (snapshots, benches): text rendering
    /// varies across platform font stacks.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            draw_labels: true,
        }
    }
}

/// Pure geometry of one render: the scale, the mapped point sequence
/// (lead anchor + one per datum), and both finished paths.
pub struct GraphLayout {
    pub scale: GraphScale,
    pub points: Vec<PxPoint>,
    pub stroke: Path,
    pub shadow: Path,
}

pub struct Graph {
    pub data: Vec<GraphPoint>,
    /// Vertical ceiling the value axis is normalized against. Values above
    /// it draw past the top gridline.
    pub max_value: i32,
    pub style: GraphStyle,
    pub theme: Theme,
}

impl Graph {
    pub fn new(max_value: i32) -> Self {
        Self {
            data: Vec::new(),
            max_value,
            style: GraphStyle::default(),
            theme: Theme::default(),
        }
    }

    pub fn with_data(max_value: i32, data: Vec<GraphPoint>) -> Self {
        let mut g = Self::new(max_value);
        g.data = data;
        g
    }

    pub fn add_point(&mut self, point: GraphPoint) {
        self.data.push(point);
    }

    /// Resolve all geometry for a `width` x `height` surface. Fails with a
    /// configuration error before any surface exists or drawing occurs.
    pub fn layout(&self, width: f32, height: f32) -> Result<GraphLayout, GraphError> {
        let scale = GraphScale::new(width, height, &self.style, self.max_value, self.data.len())?;
        let points = scale.map_points(&self.data);
        let stroke = curve::stroke_path(&points, scale.tail_anchor());
        let shadow = curve::shadow_path(&points, scale.bottom);
        Ok(GraphLayout {
            scale,
            points,
            stroke,
            shadow,
        })
    }

    /// Render the graph to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let layout = self.layout(opts.width as f32, opts.height as f32)?;
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), &layout, opts.draw_labels);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let layout = self.layout(opts.width as f32, opts.height as f32)?;
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), &layout, opts.draw_labels);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, layout: &GraphLayout, draw_labels: bool) {
        let scale = &layout.scale;

        canvas.clear(self.theme.background);

        draw_grid(canvas, scale, self.theme.grid_line, self.style.grid_line_width);

        if draw_labels {
            let shaper = TextShaper::new();
            draw_row_labels(canvas, &shaper, scale, &self.theme, self.style.label_size);
            draw_year_labels(
                canvas,
                &shaper,
                &layout.points[1..],
                &self.data,
                scale.height,
                &self.theme,
                self.style.label_size,
            );
        }

        draw_shadow(canvas, &layout.shadow, scale, &self.theme);
        draw_stroke(canvas, &layout.stroke, scale, &self.theme, self.style.stroke_width);

        // Dot sits on the last mapped data point, never the trailing anchor.
        if let Some(&dot) = layout.points.last() {
            draw_dot(canvas, dot, &self.theme, self.style.dot_radius);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for verb in &path.verbs {
        match *verb {
            PathVerb::MoveTo(p) => {
                out.move_to((p.x, p.y));
            }
            PathVerb::LineTo(p) => {
                out.line_to((p.x, p.y));
            }
            PathVerb::CubicTo { c1, c2, to } => {
                out.cubic_to((c1.x, c1.y), (c2.x, c2.y), (to.x, to.y));
            }
            PathVerb::Close => {
                out.close();
            }
        }
    }
    out
}

/// Vertical gradient from the canvas top down to the chart floor.
fn vertical_gradient(stops: &[skia::Color], bottom: f32) -> Option<skia::Shader> {
    skia::Shader::linear_gradient(
        (skia::Point::new(0.0, 0.0), skia::Point::new(0.0, bottom)),
        stops,
        None,
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn draw_grid(canvas: &skia::Canvas, scale: &GraphScale, color: skia::Color, line_width: f32) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint.set_stroke_width(line_width);

    for row in 0..=scale.max_value {
        let y = scale.grid_step * row as f32;
        canvas.draw_line((scale.start, y), (scale.width, y), &paint);
    }
}

fn draw_row_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    scale: &GraphScale,
    theme: &Theme,
    size: f32,
) {
    for row in 0..=scale.max_value {
        let y = scale.grid_step * row as f32;
        shaper.draw_left(
            canvas,
            &grid::row_label(row, scale.max_value),
            ROW_LABEL_INSET,
            y + ROW_LABEL_DROP,
            size,
            theme.label_text,
        );
    }
}

fn draw_year_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    points: &[PxPoint],
    data: &[GraphPoint],
    height: f32,
    theme: &Theme,
    size: f32,
) {
    for (point, datum) in points.iter().zip(data) {
        shaper.draw_centered(
            canvas,
            &datum.year.to_string(),
            point.x,
            height,
            size,
            theme.label_text,
        );
    }
}

/// Fill the chart area with the shadow gradient, clipped to the area under
/// the curve.
fn draw_shadow(canvas: &skia::Canvas, shadow: &Path, scale: &GraphScale, theme: &Theme) {
    let clip = to_skia_path(shadow);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_shader(vertical_gradient(&theme.shadow_stops, scale.bottom));

    canvas.save();
    canvas.clip_path(&clip, skia::ClipOp::Intersect, true);
    canvas.draw_rect(
        skia::Rect::from_xywh(0.0, 0.0, scale.width, scale.bottom),
        &paint,
    );
    canvas.restore();
}

fn draw_stroke(
    canvas: &skia::Canvas,
    stroke: &Path,
    scale: &GraphScale,
    theme: &Theme,
    stroke_width: f32,
) {
    let path = to_skia_path(stroke);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke_width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_shader(vertical_gradient(&theme.line_stops, scale.bottom));

    canvas.draw_path(&path, &paint);
}

fn draw_dot(canvas: &skia::Canvas, center: PxPoint, theme: &Theme, radius: f32) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(theme.dot);
    canvas.draw_circle((center.x, center.y), radius, &paint);
}
