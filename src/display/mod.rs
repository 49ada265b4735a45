//! Display surfaces.
//!
//! - `surface`: per-display geometry and pointer routing
//! - `monitors`: OS monitor enumeration and layout change watching

pub mod monitors;
pub mod surface;

pub use monitors::{enumerate_displays, layout_changed, spawn_display_watcher, DisplayWatcher};
pub use surface::{DisplaySurfaceSet, SurfaceDescriptor, SurfaceId};
