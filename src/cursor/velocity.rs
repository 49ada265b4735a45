//! Smoothed pointer speed.
//!
//! Each sample's instantaneous speed (distance / elapsed time) is pushed into
//! a bounded FIFO window; the tracker reports the window's arithmetic mean.

use std::collections::VecDeque;
use std::time::Instant;

use crate::rendering::coord::{Coord, ScreenSpace};

/// Bounded FIFO of recent speeds. The oldest entry is evicted first.
#[derive(Debug, Clone)]
pub struct VelocityWindow {
    velocities: VecDeque<f64>,
    capacity: usize,
    average: f64,
}

impl VelocityWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            velocities: VecDeque::with_capacity(capacity + 1),
            capacity,
            average: 0.0,
        }
    }

    /// Append a speed, evict past capacity, and return the new mean.
    pub fn push(&mut self, velocity: f64) -> f64 {
        self.velocities.push_back(velocity);
        while self.velocities.len() > self.capacity {
            self.velocities.pop_front();
        }
        self.average = self.velocities.iter().sum::<f64>() / self.velocities.len() as f64;
        self.average
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.velocities.iter()
    }
}

/// Converts positions and timestamps into a smoothed average speed.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window: VelocityWindow,
    previous: Option<(Coord<ScreenSpace>, Instant)>,
}

impl VelocityTracker {
    pub fn new(window_size: usize) -> Self {
        Self {
            window: VelocityWindow::new(window_size),
            previous: None,
        }
    }

    /// Feed one sample and return the average speed in units per second.
    ///
    /// The first sample only primes the tracker. A sample whose timestamp is
    /// not after the previous one is ignored and the previous average is
    /// returned. The stored previous position/time is replaced in every case.
    pub fn observe(&mut self, position: Coord<ScreenSpace>, timestamp: Instant) -> f64 {
        let previous = self.previous.replace((position, timestamp));

        let Some((previous_position, previous_timestamp)) = previous else {
            return self.window.average();
        };

        let time_delta = match timestamp.checked_duration_since(previous_timestamp) {
            Some(delta) if !delta.is_zero() => delta.as_secs_f64(),
            _ => {
                log::trace!("[CURSOR] Ignoring sample with non-positive time delta");
                return self.window.average();
            },
        };

        let velocity = position.distance(&previous_position) / time_delta;
        if !velocity.is_finite() {
            return self.window.average();
        }
        self.window.push(velocity)
    }

    pub fn average(&self) -> f64 {
        self.window.average()
    }

    pub fn window(&self) -> &VelocityWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_window_fifo_eviction() {
        let mut window = VelocityWindow::new(10);
        for v in 1..=12 {
            window.push(v as f64);
        }
        assert_eq!(window.len(), 10);
        let kept: Vec<f64> = window.iter().copied().collect();
        assert_eq!(kept.first(), Some(&3.0));
        assert_eq!(kept.last(), Some(&12.0));
        assert!((window.average() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut window = VelocityWindow::new(10);
        for v in 0..1000 {
            window.push(v as f64);
            assert!(window.len() <= window.capacity());
        }
    }

    #[test]
    fn test_first_sample_primes() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new(10);
        assert_eq!(tracker.observe(Coord::new(500.0, 500.0), base), 0.0);
        assert!(tracker.window().is_empty());
    }

    #[test]
    fn test_velocity_is_distance_over_time() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new(10);
        tracker.observe(Coord::new(0.0, 0.0), base);

        // 30-40-50 triangle over 10ms = 5000 units/s
        let avg = tracker.observe(Coord::new(30.0, 40.0), at(base, 10));
        assert!((avg - 5000.0).abs() < 1e-6);

        // Standing still halves the average
        let avg = tracker.observe(Coord::new(30.0, 40.0), at(base, 20));
        assert!((avg - 2500.0).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_timestamp_is_ignored() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new(10);
        tracker.observe(Coord::new(0.0, 0.0), base);
        let avg = tracker.observe(Coord::new(10.0, 0.0), at(base, 10));

        let same = tracker.observe(Coord::new(500.0, 0.0), at(base, 10));
        assert_eq!(same, avg);
        assert_eq!(tracker.window().len(), 1);
        assert!(same.is_finite());
    }

    #[test]
    fn test_ignored_sample_still_moves_reference_point() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new(10);
        tracker.observe(Coord::new(0.0, 0.0), at(base, 10));
        // Out-of-order timestamp: ignored, but becomes the new reference
        tracker.observe(Coord::new(100.0, 0.0), at(base, 5));

        let avg = tracker.observe(Coord::new(110.0, 0.0), at(base, 15));
        // Measured from (100, 0) at 5ms: 10 units over 10ms
        assert!((avg - 1000.0).abs() < 1e-6);
    }
}
