// File: crates/graph-core/src/theme.rs
// Summary: Color themes for graph rendering, including gradient stop sequences.

use skia_safe as skia;

/// Color roles for one graph render. The two stop sequences feed vertical
/// gradients: `line_stops` strokes the curve, `shadow_stops` fills the area
/// beneath it (top stop first).
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid_line: skia::Color,
    pub label_text: skia::Color,
    pub line_stops: Vec<skia::Color>,
    pub shadow_stops: Vec<skia::Color>,
    pub dot: skia::Color,
}

impl Theme {
    /// Steel-blue dusk theme; the crate default.
    pub fn dusk() -> Self {
        Self {
            name: "dusk",
            background: skia::Color::from_argb(255, 0x2e, 0x3d, 0x4c),
            grid_line: skia::Color::from_argb(255, 0, 0, 0),
            label_text: skia::Color::from_argb(255, 255, 255, 255),
            line_stops: vec![
                skia::Color::from_argb(255, 255, 255, 0),
                skia::Color::from_argb(255, 255, 0, 255),
            ],
            shadow_stops: vec![
                skia::Color::from_argb(51, 255, 255, 0),
                skia::Color::from_argb(26, 255, 0, 255),
                skia::Color::from_argb(0, 0, 0, 0),
            ],
            dot: skia::Color::from_argb(255, 255, 0, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid_line: skia::Color::from_argb(255, 210, 210, 218),
            label_text: skia::Color::from_argb(255, 30, 30, 40),
            line_stops: vec![
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 90, 60, 220),
            ],
            shadow_stops: vec![
                skia::Color::from_argb(60, 32, 120, 200),
                skia::Color::from_argb(30, 90, 60, 220),
                skia::Color::from_argb(0, 0, 0, 0),
            ],
            dot: skia::Color::from_argb(255, 90, 60, 220),
        }
    }

    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid_line: skia::Color::from_argb(255, 40, 40, 45),
            label_text: skia::Color::from_argb(255, 235, 235, 245),
            line_stops: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
            ],
            shadow_stops: vec![
                skia::Color::from_argb(70, 64, 160, 255),
                skia::Color::from_argb(35, 40, 200, 120),
                skia::Color::from_argb(0, 0, 0, 0),
            ],
            dot: skia::Color::from_argb(255, 40, 200, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dusk()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dusk(), Theme::light(), Theme::midnight()]
}

/// Find a theme by its `name`, falling back to dusk.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dusk()
}
