//! Pointer motion subsystem for BigCursor.
//!
//! - `position`: raw positions and timestamped motion samples
//! - `velocity`: smoothed pointer speed over a bounded window
//! - `gesture`: shake detection, warm-up and growth targets
//! - `poller`: background task producing motion samples
//! - `visibility`: guarded hide/show of the system pointer

pub mod gesture;
pub mod poller;
pub mod position;
pub mod velocity;
pub mod visibility;

// Re-export commonly used types
pub use gesture::{GesturePhase, GestureState, GestureTransition, ShakeGestureDetector};
pub use poller::{spawn_pointer_poller, PointerPoller};
pub use position::{MotionSample, RawCursorPosition};
pub use velocity::{VelocityTracker, VelocityWindow};
pub use visibility::{NativeSystemCursor, SystemCursor, VisibilityCoordinator};
