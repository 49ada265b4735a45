//! Overlay rendering.
//!
//! - `animator`: per-tick scale easing and visibility edges
//! - `arrow`: glyph rasterization onto a surface canvas
//! - `coord`: screen/surface coordinate spaces
//! - `types`: draw state and color modes

pub mod animator;
pub mod arrow;
pub mod coord;
pub mod types;

pub use animator::{AnimationState, ScaleAnimator, VisibilityEdge};
pub use arrow::CursorRenderer;
pub use coord::{Coord, Rect, ScreenSpace, Size, SurfaceSpace};
pub use types::{ColorMode, DrawState};
