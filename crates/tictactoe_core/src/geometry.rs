//! Strike-through placement for a completed line.

use crate::layout::Layout;
use crate::line::Line;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Transform for the line drawn over a winning row, column or diagonal.
///
/// The line sprite is vertical at zero rotation; `scale` is
/// `(thickness, length, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct LineGeometry {
    /// Centre of the line in world space.
    position: [f32; 3],
    /// Rotation about the view axis, in degrees.
    rotation_degrees: f32,
    /// Scale of the line sprite.
    scale: [f32; 3],
}

impl LineGeometry {
    /// Computes the strike-through for `line` under `layout`.
    #[instrument(skip(layout))]
    pub fn for_line(line: Line, layout: &Layout) -> Self {
        let offset = *layout.tile_offset();
        let depth = *layout.depth();
        let straight = [*layout.line_thickness(), *layout.straight_length(), 1.0];
        let diagonal = [*layout.line_thickness(), *layout.diagonal_length(), 1.0];

        match line {
            Line::Column(c) => Self {
                position: [(c.get() as f32 - 1.0) * offset, 0.0, depth],
                rotation_degrees: 0.0,
                scale: straight,
            },
            Line::Row(r) => Self {
                position: [0.0, (1.0 - r.get() as f32) * offset, depth],
                rotation_degrees: 90.0,
                scale: straight,
            },
            Line::MainDiagonal => Self {
                position: [0.0, 0.0, depth],
                rotation_degrees: 45.0,
                scale: diagonal,
            },
            Line::AntiDiagonal => Self {
                position: [0.0, 0.0, depth],
                rotation_degrees: 135.0,
                scale: diagonal,
            },
        }
    }
}
