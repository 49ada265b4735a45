//! Application lifecycle and platform integration.
//!
//! - `overlay`: the owned state object that handles inbound host events
//! - `sink`: outbound per-surface frames and the raster canvas implementation
//! - `runtime`: the tokio event loop driving the overlay

pub mod overlay;
pub mod runtime;
pub mod sink;


pub use overlay::Overlay;
pub use sink::{OverlaySink, PixmapSink};
