//! Shared rendering types.

use resvg::tiny_skia::Color;
use serde::{Deserialize, Serialize};

use super::coord::{Coord, SurfaceSpace};

/// Fill/stroke scheme for the enlarged glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Black fill, white outline.
    #[default]
    Dark,
    /// White fill, black outline.
    Light,
}

impl ColorMode {
    pub fn fill(&self) -> Color {
        match self {
            ColorMode::Dark => Color::BLACK,
            ColorMode::Light => Color::WHITE,
        }
    }

    pub fn stroke(&self) -> Color {
        match self {
            ColorMode::Dark => Color::WHITE,
            ColorMode::Light => Color::BLACK,
        }
    }

    pub fn toggled(&self) -> ColorMode {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }
}

/// What one surface should show for one frame.
///
/// Derived per surface per tick and discarded after the paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    /// Pointer position relative to the surface origin.
    pub local_position: Coord<SurfaceSpace>,
    pub scale: f64,
    /// False when the overlay is at rest or the pointer is on another surface.
    pub visible: bool,
    pub color_mode: ColorMode,
}

impl DrawState {
    /// A frame that only clears the canvas.
    pub fn hidden(color_mode: ColorMode) -> Self {
        Self {
            local_position: Coord::new(0.0, 0.0),
            scale: 1.0,
            visible: false,
            color_mode,
        }
    }
}
