// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports public API for graph construction and rendering.

pub mod curve;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod scale;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;

pub use error::GraphError;
pub use geometry::{Path, PathVerb, PxPoint};
pub use graph::{Graph, GraphLayout, RenderOptions};
pub use scale::GraphScale;
pub use style::GraphStyle;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::GraphPoint;
