//! Shake gesture state machine.
//!
//! ```text
//!           avg > threshold                 held for warm-up
//!   Idle ───────────────────────▶ Warmup ─────────────────────▶ Growing
//!    ▲                              │                              │
//!    └──────────────────────────────┴──────────────────────────────┘
//!        avg <= threshold and no qualifying sample for > debounce
//! ```
//!
//! While growing, each qualifying sample raises the target scale by
//! `growth_rate * velocity_multiplier * duration_multiplier`. Leaving the
//! shake pins the target back to the minimum scale.

use std::time::{Duration, Instant};

use crate::config::ShakeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// Shaking, but growth is not authorized yet.
    Warmup,
    Growing,
}

/// Snapshot of the detector's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub is_shaking: bool,
    pub is_growing: bool,
    pub shake_start_time: Option<Instant>,
    pub last_shake_activity_time: Option<Instant>,
}

/// Phase change caused by one sample or expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTransition {
    None,
    Started,
    GrowthAuthorized,
    Ended,
}

/// Decides when shaking begins and ends and how large the glyph should get.
#[derive(Debug, Clone)]
pub struct ShakeGestureDetector {
    velocity_threshold: f64,
    warmup: Duration,
    debounce: Duration,
    growth_rate: f64,
    max_velocity_multiplier: f64,
    duration_growth_factor: f64,
    min_scale: f64,
    max_scale: f64,

    phase: GesturePhase,
    shake_start_time: Option<Instant>,
    last_shake_activity_time: Option<Instant>,
    target_scale: f64,
}

impl ShakeGestureDetector {
    pub fn new(config: &ShakeConfig) -> Self {
        Self {
            velocity_threshold: config.velocity_threshold,
            warmup: config.warmup(),
            debounce: config.debounce(),
            growth_rate: config.growth_rate,
            max_velocity_multiplier: config.max_velocity_multiplier,
            duration_growth_factor: config.duration_growth_factor,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            phase: GesturePhase::Idle,
            shake_start_time: None,
            last_shake_activity_time: None,
            target_scale: config.min_scale,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_shaking(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    pub fn is_growing(&self) -> bool {
        self.phase == GesturePhase::Growing
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    pub fn state(&self) -> GestureState {
        GestureState {
            is_shaking: self.is_shaking(),
            is_growing: self.is_growing(),
            shake_start_time: self.shake_start_time,
            last_shake_activity_time: self.last_shake_activity_time,
        }
    }

    /// Feed one smoothed velocity.
    ///
    /// `current_scale` is the scale currently on screen; growth is measured
    /// from it so the target never runs far ahead of the animation.
    pub fn observe(
        &mut self,
        average_velocity: f64,
        now: Instant,
        current_scale: f64,
    ) -> GestureTransition {
        if average_velocity <= self.velocity_threshold {
            return self.expire(now);
        }

        self.last_shake_activity_time = Some(now);
        let mut transition = GestureTransition::None;

        if self.phase == GesturePhase::Idle {
            self.phase = GesturePhase::Warmup;
            self.shake_start_time = Some(now);
            transition = GestureTransition::Started;
            log::debug!(
                "[GESTURE] Shake started at {:.0} units/s",
                average_velocity
            );
        }

        // An unrepresentable end means the warm-up never completes
        let shake_start = self.shake_start_time.unwrap_or(now);
        let warmup_end = shake_start.checked_add(self.warmup);

        if self.phase == GesturePhase::Warmup && warmup_end.is_some_and(|end| now >= end) {
            self.phase = GesturePhase::Growing;
            transition = GestureTransition::GrowthAuthorized;
            log::info!("[GESTURE] Warm-up complete, growth authorized");
        }

        if let (GesturePhase::Growing, Some(warmup_end)) = (self.phase, warmup_end) {
            let velocity_multiplier =
                (average_velocity / self.velocity_threshold).min(self.max_velocity_multiplier);
            let time_growing = now.saturating_duration_since(warmup_end).as_secs_f64();
            let duration_multiplier = 1.0 + time_growing * self.duration_growth_factor;

            let candidate = (current_scale
                + self.growth_rate * velocity_multiplier * duration_multiplier)
                .min(self.max_scale);
            self.target_scale = self.target_scale.max(candidate);
            log::trace!(
                "[GESTURE] target={:.3} (v×{:.2}, t×{:.2})",
                self.target_scale,
                velocity_multiplier,
                duration_multiplier
            );
        }

        transition
    }

    /// End the shake if nothing qualifying happened within the debounce window.
    ///
    /// Called for below-threshold samples and on every animation tick, since
    /// a pointer at rest produces no samples at all.
    pub fn expire(&mut self, now: Instant) -> GestureTransition {
        if self.phase == GesturePhase::Idle {
            return GestureTransition::None;
        }

        let quiet_for = self
            .last_shake_activity_time
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::MAX);
        if quiet_for <= self.debounce {
            return GestureTransition::None;
        }

        log::debug!(
            "[GESTURE] Shake ended after {:?} without activity",
            quiet_for
        );
        self.phase = GesturePhase::Idle;
        self.shake_start_time = None;
        self.target_scale = self.min_scale;
        GestureTransition::Ended
    }
}
