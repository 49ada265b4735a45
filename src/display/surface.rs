//! Per-display overlay surfaces and pointer routing.
//!
//! One surface exists per attached display. A global pointer position is
//! re-expressed in each surface's local space; only the surface containing
//! it draws the glyph, every other surface is told to clear.

use crate::rendering::coord::{Coord, Rect, ScreenSpace, Size, SurfaceSpace};
use crate::rendering::types::{ColorMode, DrawState};

/// Index of a surface within the current [`DisplaySurfaceSet`].
///
/// Ids are reassigned on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub usize);

/// Geometry of one attached display.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDescriptor {
    pub name: String,
    /// Display frame in global desktop coordinates.
    pub screen_frame: Rect<ScreenSpace>,
    /// Size of the overlay canvas covering the display.
    pub canvas_size: Size<SurfaceSpace>,
    pub is_primary: bool,
}

impl SurfaceDescriptor {
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            screen_frame: Rect::from_coords(x, y, width, height),
            canvas_size: Size::new(width, height),
            is_primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Local position of a global point, and whether it lies on this surface.
    pub fn locate(&self, global: Coord<ScreenSpace>) -> (Coord<SurfaceSpace>, bool) {
        let local = global.to_surface_space(&self.screen_frame);
        let size = Size::new(self.screen_frame.size.width, self.screen_frame.size.height);
        (local, local.is_within(size))
    }
}

/// All overlay surfaces, rebuilt wholesale whenever the display layout changes.
#[derive(Debug, Clone, Default)]
pub struct DisplaySurfaceSet {
    surfaces: Vec<SurfaceDescriptor>,
}

impl DisplaySurfaceSet {
    pub fn new(surfaces: Vec<SurfaceDescriptor>) -> Self {
        Self { surfaces }
    }

    /// Replace every surface. No state is carried over.
    pub fn rebuild(&mut self, surfaces: Vec<SurfaceDescriptor>) {
        log::info!(
            "[DISPLAY] Rebuilding surface set: {} -> {} surface(s)",
            self.surfaces.len(),
            surfaces.len()
        );
        for (idx, surface) in surfaces.iter().enumerate() {
            log::debug!(
                "[DISPLAY]   #{} {} at ({}, {}) {}x{}{}",
                idx,
                surface.name,
                surface.screen_frame.origin.x,
                surface.screen_frame.origin.y,
                surface.screen_frame.size.width,
                surface.screen_frame.size.height,
                if surface.is_primary { " (primary)" } else { "" }
            );
        }
        self.surfaces = surfaces;
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn get(&self, id: SurfaceId) -> Option<&SurfaceDescriptor> {
        self.surfaces.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &SurfaceDescriptor)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(idx, surface)| (SurfaceId(idx), surface))
    }

    /// The surface that renders the glyph for `global`.
    ///
    /// Edges are inclusive, so a point on a shared edge belongs to the first
    /// surface in enumeration order.
    pub fn active_surface(&self, global: Coord<ScreenSpace>) -> Option<SurfaceId> {
        self.iter()
            .find(|(_, surface)| surface.locate(global).1)
            .map(|(id, _)| id)
    }

    /// Per-surface draw states for one frame.
    pub fn draw_states(
        &self,
        global: Coord<ScreenSpace>,
        scale: f64,
        visible: bool,
        color_mode: ColorMode,
    ) -> Vec<(SurfaceId, DrawState)> {
        let active = self.active_surface(global);
        self.iter()
            .map(|(id, surface)| {
                let (local_position, _) = surface.locate(global);
                let state = DrawState {
                    local_position,
                    scale,
                    visible: visible && active == Some(id),
                    color_mode,
                };
                (id, state)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side() -> DisplaySurfaceSet {
        DisplaySurfaceSet::new(vec![
            SurfaceDescriptor::new("left", 0.0, 0.0, 1000.0, 1000.0).primary(),
            SurfaceDescriptor::new("right", 1000.0, 0.0, 1000.0, 1000.0),
        ])
    }

    fn visible_ids(states: &[(SurfaceId, DrawState)]) -> Vec<usize> {
        states
            .iter()
            .filter(|(_, s)| s.visible)
            .map(|(id, _)| id.0)
            .collect()
    }

    #[test]
    fn test_routes_to_first_surface() {
        let set = side_by_side();
        let states = set.draw_states(Coord::new(500.0, 500.0), 3.0, true, ColorMode::Dark);
        assert_eq!(states.len(), 2);
        assert_eq!(visible_ids(&states), vec![0]);
        assert_eq!(states[0].1.local_position, Coord::new(500.0, 500.0));
    }

    #[test]
    fn test_routes_to_second_surface() {
        let set = side_by_side();
        let states = set.draw_states(Coord::new(1500.0, 500.0), 3.0, true, ColorMode::Dark);
        assert_eq!(visible_ids(&states), vec![1]);
        assert_eq!(states[1].1.local_position, Coord::new(500.0, 500.0));
        assert_eq!(states[1].1.scale, 3.0);
    }

    #[test]
    fn test_outside_all_surfaces() {
        let set = side_by_side();
        let states = set.draw_states(Coord::new(2500.0, 500.0), 3.0, true, ColorMode::Dark);
        assert!(visible_ids(&states).is_empty());
        let states = set.draw_states(Coord::new(500.0, -1.0), 3.0, true, ColorMode::Dark);
        assert!(visible_ids(&states).is_empty());
    }

    #[test]
    fn test_shared_edge_renders_once() {
        let set = side_by_side();
        let states = set.draw_states(Coord::new(1000.0, 500.0), 3.0, true, ColorMode::Dark);
        assert_eq!(visible_ids(&states), vec![0]);
    }

    #[test]
    fn test_invisible_overlay_hides_everywhere() {
        let set = side_by_side();
        let states = set.draw_states(Coord::new(500.0, 500.0), 1.0, false, ColorMode::Light);
        assert!(visible_ids(&states).is_empty());
        assert!(states.iter().all(|(_, s)| s.color_mode == ColorMode::Light));
    }

    #[test]
    fn test_empty_set_is_noop() {
        let set = DisplaySurfaceSet::default();
        assert!(set.is_empty());
        assert_eq!(set.active_surface(Coord::new(0.0, 0.0)), None);
        assert!(set
            .draw_states(Coord::new(0.0, 0.0), 2.0, true, ColorMode::Dark)
            .is_empty());
    }

    #[test]
    fn test_rebuild_replaces_everything() {
        let mut set = side_by_side();
        set.rebuild(vec![SurfaceDescriptor::new("only", -500.0, 0.0, 500.0, 800.0)]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(SurfaceId(0)).unwrap().name, "only");
        assert_eq!(set.get(SurfaceId(1)), None);
        assert_eq!(set.active_surface(Coord::new(-100.0, 10.0)), Some(SurfaceId(0)));
    }
}
