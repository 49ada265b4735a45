//! Pointer position types.
//!
//! - RawCursorPosition: integer desktop coordinates as reported by the OS
//! - MotionSample: a position stamped with the instant it was observed

use std::time::Instant;

use device_query::{DeviceQuery, DeviceState};

use crate::rendering::coord::{Coord, ScreenSpace};

/// Raw cursor position in global desktop coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawCursorPosition {
    x: i32,
    y: i32,
}

impl RawCursorPosition {
    /// Read the position through an existing device handle.
    pub fn query(device_state: &DeviceState) -> Self {
        let (x, y) = device_state.get_mouse().coords;
        Self { x, y }
    }

    /// Create from explicit coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn to_coord(&self) -> Coord<ScreenSpace> {
        Coord::from_i32(self.x, self.y)
    }

    /// Stamp this position with the instant it was read.
    pub fn sample_at(&self, timestamp: Instant) -> MotionSample {
        MotionSample {
            position: self.to_coord(),
            timestamp,
        }
    }
}

/// One observed pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub position: Coord<ScreenSpace>,
    pub timestamp: Instant,
}

impl MotionSample {
    pub fn new(x: f64, y: f64, timestamp: Instant) -> Self {
        Self {
            position: Coord::new(x, y),
            timestamp,
        }
    }
}
