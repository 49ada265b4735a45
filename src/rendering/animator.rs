//! Per-tick scale animation.
//!
//! Growth eases toward the target (`current += (target - current) * k`), which
//! approaches without overshoot. Without growth the scale decays
//! multiplicatively toward the floor and the target is pinned there.

use crate::config::ShakeConfig;

/// Animated glyph scale and the overlay visibility derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub current_scale: f64,
    pub target_scale: f64,
    pub is_visible: bool,
}

/// Change in overlay visibility between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEdge {
    Rising,
    Falling,
    Steady,
}

/// Eases the displayed scale toward the gesture's target once per tick.
#[derive(Debug, Clone)]
pub struct ScaleAnimator {
    state: AnimationState,
    min_scale: f64,
    max_scale: f64,
    grow_lerp_factor: f64,
    shrink_factor: f64,
    visibility_epsilon: f64,
}

impl ScaleAnimator {
    pub fn new(config: &ShakeConfig) -> Self {
        Self {
            state: AnimationState {
                current_scale: config.min_scale,
                target_scale: config.min_scale,
                is_visible: false,
            },
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            grow_lerp_factor: config.grow_lerp_factor,
            shrink_factor: config.shrink_factor,
            visibility_epsilon: config.visibility_epsilon,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn current_scale(&self) -> f64 {
        self.state.current_scale
    }

    /// Advance one tick.
    ///
    /// `target_scale` is only consulted while growing. The returned edge is
    /// measured against the visibility computed on the previous tick.
    pub fn tick(&mut self, is_growing: bool, target_scale: f64) -> VisibilityEdge {
        let state = &mut self.state;

        if is_growing {
            state.target_scale = target_scale.clamp(self.min_scale, self.max_scale);
            state.current_scale +=
                (state.target_scale - state.current_scale) * self.grow_lerp_factor;
        } else {
            state.current_scale = (state.current_scale * self.shrink_factor).max(self.min_scale);
            state.target_scale = self.min_scale;
        }
        state.current_scale = state.current_scale.clamp(self.min_scale, self.max_scale);

        let was_visible = state.is_visible;
        state.is_visible = state.current_scale > self.min_scale + self.visibility_epsilon;

        match (was_visible, state.is_visible) {
            (false, true) => VisibilityEdge::Rising,
            (true, false) => VisibilityEdge::Falling,
            _ => VisibilityEdge::Steady,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> ScaleAnimator {
        ScaleAnimator::new(&ShakeConfig::default())
    }

    #[test]
    fn test_starts_at_rest() {
        let animator = animator();
        let state = animator.state();
        assert_eq!(state.current_scale, 1.0);
        assert_eq!(state.target_scale, 1.0);
        assert!(!state.is_visible);
    }

    #[test]
    fn test_growth_lerps_without_overshoot() {
        let mut animator = animator();
        animator.tick(true, 11.0);
        assert!((animator.current_scale() - 4.0).abs() < 1e-9);

        let mut previous = animator.current_scale();
        for _ in 0..200 {
            animator.tick(true, 11.0);
            let current = animator.current_scale();
            assert!(current >= previous);
            assert!(current <= 11.0);
            previous = current;
        }
        assert!((animator.current_scale() - 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_decay_pins_target_and_floors() {
        let mut animator = animator();
        for _ in 0..30 {
            animator.tick(true, 20.0);
        }
        let before = animator.current_scale();
        animator.tick(false, 20.0);
        assert!((animator.current_scale() - before * 0.92).abs() < 1e-9);
        assert_eq!(animator.state().target_scale, 1.0);

        for _ in 0..2000 {
            animator.tick(false, 20.0);
        }
        assert_eq!(animator.current_scale(), 1.0);
    }

    #[test]
    fn test_target_clamped_to_max_scale() {
        let mut animator = animator();
        for _ in 0..500 {
            animator.tick(true, 1_000.0);
            assert!(animator.current_scale() <= 50.0);
        }
        assert_eq!(animator.state().target_scale, 50.0);
    }

    #[test]
    fn test_visibility_edges() {
        let mut animator = animator();
        assert_eq!(animator.tick(false, 1.0), VisibilityEdge::Steady);

        assert_eq!(animator.tick(true, 2.0), VisibilityEdge::Rising);
        assert_eq!(animator.tick(true, 2.0), VisibilityEdge::Steady);

        let mut falling = 0;
        for _ in 0..200 {
            if animator.tick(false, 1.0) == VisibilityEdge::Falling {
                falling += 1;
            }
        }
        assert_eq!(falling, 1);
        assert!(!animator.state().is_visible);
    }

    #[test]
    fn test_epsilon_keeps_near_floor_invisible() {
        let mut animator = animator();
        // 1.0 + (1.02 - 1.0) * 0.3 = 1.006, still inside the epsilon band
        assert_eq!(animator.tick(true, 1.02), VisibilityEdge::Steady);
        assert!(!animator.state().is_visible);
    }
}
