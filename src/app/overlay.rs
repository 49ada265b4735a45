//! The overlay controller.
//!
//! Owns every piece of mutable gesture and animation state and exposes the
//! inbound events of the host as plain methods. All methods take `&mut self`,
//! so whoever drives the overlay (the event loop in `runtime`, or a test)
//! serializes pointer samples and animation ticks by construction.

use std::time::Instant;

use crate::config::ShakeConfig;
use crate::cursor::{
    GestureState, GestureTransition, MotionSample, ShakeGestureDetector, SystemCursor,
    VelocityTracker, VisibilityCoordinator,
};
use crate::display::{DisplaySurfaceSet, SurfaceDescriptor};
use crate::error::BigCursorResult;
use crate::rendering::{AnimationState, ColorMode, Coord, ScaleAnimator, ScreenSpace, VisibilityEdge};

use super::sink::OverlaySink;

pub struct Overlay<C: SystemCursor, S: OverlaySink> {
    tracker: VelocityTracker,
    detector: ShakeGestureDetector,
    animator: ScaleAnimator,
    visibility: VisibilityCoordinator<C>,
    surfaces: DisplaySurfaceSet,
    sink: S,
    pointer: Coord<ScreenSpace>,
    color_mode: ColorMode,
}

impl<C: SystemCursor, S: OverlaySink> Overlay<C, S> {
    pub fn new(
        config: &ShakeConfig,
        displays: Vec<SurfaceDescriptor>,
        system_cursor: C,
        mut sink: S,
    ) -> BigCursorResult<Self> {
        config.validate()?;

        let surfaces = DisplaySurfaceSet::new(displays);
        sink.rebuild(&surfaces)?;

        Ok(Self {
            tracker: VelocityTracker::new(config.velocity_window),
            detector: ShakeGestureDetector::new(config),
            animator: ScaleAnimator::new(config),
            visibility: VisibilityCoordinator::new(system_cursor),
            surfaces,
            sink,
            pointer: Coord::new(0.0, 0.0),
            color_mode: ColorMode::default(),
        })
    }

    /// Inbound pointer move.
    pub fn on_pointer_moved(&mut self, sample: MotionSample) -> GestureTransition {
        self.pointer = sample.position;
        let average = self.tracker.observe(sample.position, sample.timestamp);
        self.detector
            .observe(average, sample.timestamp, self.animator.current_scale())
    }

    /// Inbound animation tick: settle the gesture, animate, then render.
    pub fn on_animation_tick(&mut self, now: Instant) -> AnimationState {
        self.detector.expire(now);

        let edge = self
            .animator
            .tick(self.detector.is_growing(), self.detector.target_scale());
        match edge {
            VisibilityEdge::Rising => self.visibility.hide(),
            VisibilityEdge::Falling => self.visibility.show(),
            VisibilityEdge::Steady => {},
        }

        let state = self.animator.state();
        self.render(&state);
        state
    }

    /// Inbound display-configuration change: rebuild every surface.
    ///
    /// If the sink cannot rebuild, the previous surfaces stay in effect.
    pub fn on_display_configuration_changed(
        &mut self,
        displays: Vec<SurfaceDescriptor>,
    ) -> BigCursorResult<()> {
        let mut surfaces = self.surfaces.clone();
        surfaces.rebuild(displays);
        self.sink.rebuild(&surfaces)?;
        self.surfaces = surfaces;
        Ok(())
    }

    /// Applies to frames rendered after this call.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if self.color_mode != mode {
            log::debug!("[OVERLAY] Color mode -> {:?}", mode);
            self.color_mode = mode;
        }
    }

    /// Restore the system pointer before the process exits.
    pub fn shutdown(&mut self) {
        self.visibility.shutdown();
    }

    pub fn gesture_state(&self) -> GestureState {
        self.detector.state()
    }

    pub fn target_scale(&self) -> f64 {
        self.detector.target_scale()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn average_velocity(&self) -> f64 {
        self.tracker.average()
    }

    pub fn surfaces(&self) -> &DisplaySurfaceSet {
        &self.surfaces
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn visibility(&self) -> &VisibilityCoordinator<C> {
        &self.visibility
    }

    fn render(&mut self, state: &AnimationState) {
        let frames = self.surfaces.draw_states(
            self.pointer,
            state.current_scale,
            state.is_visible,
            self.color_mode,
        );
        for (surface, draw_state) in frames {
            if let Err(e) = self.sink.render_frame(surface, &draw_state) {
                log::warn!("[OVERLAY] Render failed on surface {}: {}", surface.0, e);
            }
        }
    }
}
