//! Type-safe coordinate system for the overlay pipeline.
//!
//! Two coordinate spaces are in play:
//!
//! ```text
//! ScreenSpace (global desktop) → SurfaceSpace (one display's canvas)
//! ```
//!
//! Each coordinate space is a phantom type that prevents mixing coordinates
//! from different spaces at compile time.

/// Global desktop coordinates.
/// `(0, 0)` is the top-left of the primary monitor; other monitors may sit at
/// negative offsets. Pointer positions from the OS arrive in this space.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSpace;

/// Coordinates local to one display surface.
/// `(0, 0)` is the top-left of that display's canvas.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpace;

/// A 2D coordinate with an associated coordinate space.
///
/// The phantom type `TSpace` ensures coordinates from different spaces
/// cannot be mixed without explicit conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: std::marker::PhantomData<TSpace>,
}

impl<TSpace: Default> Coord<TSpace> {
    /// Create a new coordinate in the specified space.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: std::marker::PhantomData,
        }
    }

    /// Create a coordinate from i32 values.
    pub fn from_i32(x: i32, y: i32) -> Self {
        Self::new(x as f64, y as f64)
    }

    /// Convert to f32 tuple.
    pub fn as_f32(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }

    /// Get the distance to another coordinate.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size in a specific coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size<TSpace> {
    pub width: f64,
    pub height: f64,
    _space: std::marker::PhantomData<TSpace>,
}

impl<TSpace: Default> Size<TSpace> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            _space: std::marker::PhantomData,
        }
    }

    /// Whole-pixel dimensions, rounding up and never below one pixel.
    pub fn as_pixels(&self) -> (u32, u32) {
        (
            self.width.ceil().max(1.0) as u32,
            self.height.ceil().max(1.0) as u32,
        )
    }
}

/// A rectangular region in a specific coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<TSpace> {
    pub origin: Coord<TSpace>,
    pub size: Size<TSpace>,
}

impl<TSpace: Default + Copy> Rect<TSpace> {
    pub fn new(origin: Coord<TSpace>, size: Size<TSpace>) -> Self {
        Self { origin, size }
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Coord::new(x, y), Size::new(width, height))
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Coord<TSpace>) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

// ============================================================================
// Coordinate Space Conversions
// ============================================================================

impl Coord<ScreenSpace> {
    /// Re-express a global position relative to a display frame's origin.
    pub fn to_surface_space(&self, frame: &Rect<ScreenSpace>) -> Coord<SurfaceSpace> {
        Coord::new(self.x - frame.origin.x, self.y - frame.origin.y)
    }
}

impl Coord<SurfaceSpace> {
    /// `0 ≤ x ≤ width` and `0 ≤ y ≤ height`.
    pub fn is_within(&self, size: Size<SurfaceSpace>) -> bool {
        Rect::new(Coord::new(0.0, 0.0), size).contains(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_surface_space() {
        let frame = Rect::<ScreenSpace>::from_coords(1920.0, 0.0, 2560.0, 1440.0);
        let global = Coord::<ScreenSpace>::new(2000.0, 300.0);

        let local = global.to_surface_space(&frame);
        assert_eq!(local.x, 80.0);
        assert_eq!(local.y, 300.0);
    }

    #[test]
    fn test_negative_origin_monitor() {
        // Secondary monitor placed left of the primary one
        let frame = Rect::<ScreenSpace>::from_coords(-1280.0, 0.0, 1280.0, 1024.0);
        let local = Coord::<ScreenSpace>::new(-10.0, 10.0).to_surface_space(&frame);
        assert_eq!(local.x, 1270.0);
        assert!(local.is_within(Size::new(1280.0, 1024.0)));
    }

    #[test]
    fn test_is_within_edges_inclusive() {
        let size = Size::<SurfaceSpace>::new(1000.0, 1000.0);
        assert!(Coord::<SurfaceSpace>::new(0.0, 0.0).is_within(size));
        assert!(Coord::<SurfaceSpace>::new(1000.0, 1000.0).is_within(size));
        assert!(!Coord::<SurfaceSpace>::new(-0.5, 10.0).is_within(size));
        assert!(!Coord::<SurfaceSpace>::new(10.0, 1000.5).is_within(size));
    }

    #[test]
    fn test_distance() {
        let a = Coord::<ScreenSpace>::new(3.0, 4.0);
        assert_eq!(a.distance(&Coord::new(0.0, 0.0)), 5.0);
        assert_eq!(Coord::<ScreenSpace>::from_i32(-3, -4).distance(&a), 10.0);
    }

    #[test]
    fn test_size_as_pixels() {
        assert_eq!(Size::<SurfaceSpace>::new(1919.5, 1080.0).as_pixels(), (1920, 1080));
        assert_eq!(Size::<SurfaceSpace>::new(0.0, 0.0).as_pixels(), (1, 1));
    }
}
