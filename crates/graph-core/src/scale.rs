// File: crates/graph-core/src/scale.rs
// Summary: Coordinate mapper: data-space (index, value) to pixel offsets.

use crate::error::GraphError;
use crate::geometry::PxPoint;
use crate::style::GraphStyle;
use crate::types::GraphPoint;

/// Fixed anchor injected ahead of the mapped points; gives the curve its
/// entry near the top-left.
pub const LEAD_ANCHOR: PxPoint = PxPoint::new(0.0, 200.0);

/// Y of the fixed anchor the curve exits through at the right canvas edge.
pub const TAIL_ANCHOR_Y: f32 = 600.0;

/// Gap between the grid's left edge and the first data column.
pub const SIDE_OFFSET: f32 = 60.0;

/// Precomputed pixel transforms for one render. All fields are derived from
/// the canvas size, the style paddings, the value ceiling, and the point
/// count; construction fails if either divisor would be zero.
#[derive(Clone, Copy, Debug)]
pub struct GraphScale {
    pub width: f32,
    pub height: f32,
    /// Chart floor: height minus stroke width and bottom padding.
    pub bottom: f32,
    /// Left edge of the grid: start padding plus stroke width.
    pub start: f32,
    /// X of the first data column.
    pub first_column: f32,
    /// Uniform horizontal gap between consecutive data columns.
    pub column_width: f32,
    /// Vertical pixels per value unit.
    pub grid_step: f32,
    pub max_value: i32,
}

impl GraphScale {
    pub fn new(
        width: f32,
        height: f32,
        style: &GraphStyle,
        max_value: i32,
        point_count: usize,
    ) -> Result<Self, GraphError> {
        if max_value < 1 {
            return Err(GraphError::InvalidMaxValue(max_value));
        }
        if point_count == 0 {
            return Err(GraphError::EmptyData);
        }

        let bottom = height - style.stroke_width - style.padding_bottom;
        let start = style.padding_start + style.stroke_width;
        let first_column = start + SIDE_OFFSET;
        let column_width = (width - first_column) / point_count as f32;
        let grid_step = bottom / max_value as f32;

        Ok(Self {
            width,
            height,
            bottom,
            start,
            first_column,
            column_width,
            grid_step,
            max_value,
        })
    }

    /// X pixel offset of the data column at `index`.
    #[inline]
    pub fn x_at(&self, index: usize) -> f32 {
        self.first_column + self.column_width * index as f32
    }

    /// Y pixel offset for `value`. Larger values sit closer to the top;
    /// values above `max_value` land above the chart's top edge unclamped.
    #[inline]
    pub fn y_at(&self, value: i32) -> f32 {
        self.bottom - self.grid_step * value as f32
    }

    /// Map the data into pixel space: the lead anchor followed by one point
    /// per datum. Returns a fresh vector; the trailing anchor is never part
    /// of this sequence.
    pub fn map_points(&self, data: &[GraphPoint]) -> Vec<PxPoint> {
        let mut out = Vec::with_capacity(data.len() + 1);
        out.push(LEAD_ANCHOR);
        for (index, point) in data.iter().enumerate() {
            out.push(PxPoint::new(self.x_at(index), self.y_at(point.value)));
        }
        out
    }

    /// The fixed exit anchor at the right canvas edge. Consumed only by the
    /// curve builder's stroke path.
    pub fn tail_anchor(&self) -> PxPoint {
        PxPoint::new(self.width, TAIL_ANCHOR_Y)
    }
}
