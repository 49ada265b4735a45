//! Arrow glyph rasterization.
//!
//! The glyph is a fixed 7-vertex silhouette anchored at its tip. It is
//! drawn with a uniform scale transform while stroke widths are divided by
//! the same scale, so outlines keep their on-screen thickness at any size.

use resvg::tiny_skia::{
    Color, FillRule, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use super::types::DrawState;
use crate::error::{BigCursorError, BigCursorResult};

/// Arrow silhouette in glyph units, y pointing down, tip at the origin.
pub const ARROW_VERTICES: [(f32, f32); 7] = [
    (0.0, 0.0),
    (0.0, 17.0),
    (4.0, 13.0),
    (9.0, 22.0),
    (12.0, 20.0),
    (7.0, 11.0),
    (12.0, 11.0),
];

/// Outline width in screen pixels; half of it is covered by the fill.
pub const OUTLINE_WIDTH: f32 = 3.0;

/// Hairline drawn over the fill edge, in screen pixels.
pub const DETAIL_WIDTH: f32 = 0.5;

/// Draws the arrow glyph onto a surface canvas.
pub struct CursorRenderer {
    path: Path,
}

impl CursorRenderer {
    pub fn new() -> BigCursorResult<Self> {
        let mut builder = PathBuilder::new();
        let (first, rest) = ARROW_VERTICES.split_first().ok_or_else(|| {
            BigCursorError::Canvas("arrow glyph has no vertices".to_string())
        })?;
        builder.move_to(first.0, first.1);
        for &(x, y) in rest {
            builder.line_to(x, y);
        }
        builder.close();

        let path = builder
            .finish()
            .ok_or_else(|| BigCursorError::Canvas("arrow glyph path is empty".to_string()))?;
        Ok(Self { path })
    }

    /// Clear `canvas` and, if `state.visible`, paint the glyph.
    pub fn render(&self, canvas: &mut Pixmap, state: &DrawState) {
        canvas.fill(Color::TRANSPARENT);
        if !state.visible {
            return;
        }

        let scale = state.scale.max(1.0) as f32;
        let (x, y) = state.local_position.as_f32();
        let transform = Transform::from_translate(x, y).pre_scale(scale, scale);

        let mut paint = Paint::default();
        paint.anti_alias = true;

        paint.set_color(state.color_mode.stroke());
        let outline = Stroke {
            width: OUTLINE_WIDTH / scale,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        canvas.stroke_path(&self.path, &paint, &outline, transform, None);

        paint.set_color(state.color_mode.fill());
        canvas.fill_path(&self.path, &paint, FillRule::Winding, transform, None);

        paint.set_color(state.color_mode.stroke());
        let detail = Stroke {
            width: DETAIL_WIDTH / scale,
            ..Stroke::default()
        };
        canvas.stroke_path(&self.path, &paint, &detail, transform, None);
    }
}
