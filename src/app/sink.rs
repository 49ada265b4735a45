//! Outbound frame delivery.
//!
//! The overlay pushes one [`DrawState`] per surface per tick into an
//! [`OverlaySink`]. [`PixmapSink`] keeps one raster canvas per surface and
//! paints the glyph with [`CursorRenderer`].
//!
//! Nothing here puts pixels on screen. The `bigcursor` binary runs the full
//! gesture, animation and system-pointer pipeline but shows no enlarged glyph
//! until a sink that presents these canvases in transparent, click-through
//! windows is plugged in.

use resvg::tiny_skia::Pixmap;

use crate::display::{DisplaySurfaceSet, SurfaceId};
use crate::error::{BigCursorError, BigCursorResult};
use crate::rendering::{CursorRenderer, DrawState};

/// Receives per-surface frames from the overlay.
pub trait OverlaySink {
    /// The surface set was rebuilt; drop everything tied to old surfaces.
    fn rebuild(&mut self, surfaces: &DisplaySurfaceSet) -> BigCursorResult<()>;

    /// Paint one frame on one surface.
    fn render_frame(&mut self, surface: SurfaceId, state: &DrawState) -> BigCursorResult<()>;
}

struct SurfaceCanvas {
    pixmap: Pixmap,
    /// The glyph was painted and has not been cleared since.
    dirty: bool,
}

/// One `tiny_skia` canvas per surface.
pub struct PixmapSink {
    renderer: CursorRenderer,
    canvases: Vec<SurfaceCanvas>,
}

impl PixmapSink {
    pub fn new() -> BigCursorResult<Self> {
        Ok(Self {
            renderer: CursorRenderer::new()?,
            canvases: Vec::new(),
        })
    }

    pub fn canvas(&self, surface: SurfaceId) -> Option<&Pixmap> {
        self.canvases.get(surface.0).map(|c| &c.pixmap)
    }

    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}

impl OverlaySink for PixmapSink {
    fn rebuild(&mut self, surfaces: &DisplaySurfaceSet) -> BigCursorResult<()> {
        let mut canvases = Vec::with_capacity(surfaces.len());
        for (id, surface) in surfaces.iter() {
            let (width, height) = surface.canvas_size.as_pixels();
            let pixmap = Pixmap::new(width, height).ok_or_else(|| {
                BigCursorError::Canvas(format!(
                    "cannot allocate {}x{} canvas for surface {}",
                    width, height, id.0
                ))
            })?;
            canvases.push(SurfaceCanvas {
                pixmap,
                dirty: false,
            });
        }
        self.canvases = canvases;
        Ok(())
    }

    fn render_frame(&mut self, surface: SurfaceId, state: &DrawState) -> BigCursorResult<()> {
        let canvas = self
            .canvases
            .get_mut(surface.0)
            .ok_or_else(|| BigCursorError::Canvas(format!("unknown surface {}", surface.0)))?;

        // Already clear
        if !state.visible && !canvas.dirty {
            return Ok(());
        }

        self.renderer.render(&mut canvas.pixmap, state);
        canvas.dirty = state.visible;
        Ok(())
    }
}
