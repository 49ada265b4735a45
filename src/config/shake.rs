//! Gesture and animation tuning.
//!
//! Every constant of the shake-to-grow pipeline lives here so the detector,
//! the velocity window and the animator agree on thresholds and limits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BigCursorError, BigCursorResult};

/// Longest accepted warm-up or debounce period, in seconds.
pub const MAX_PERIOD_SECS: f64 = 3600.0;

/// Fastest accepted animation timer.
pub const MAX_TICK_HZ: u32 = 1000;

/// Tuning for velocity smoothing, shake detection and scale animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShakeConfig {
    /// Average velocity (position units per second) above which the pointer is shaking.
    pub velocity_threshold: f64,
    /// Number of velocities averaged by the tracker.
    pub velocity_window: usize,
    /// Sustained shaking required before growth starts.
    pub warmup_secs: f64,
    /// Grace period after the last qualifying sample before the shake ends.
    pub debounce_secs: f64,
    /// Base scale increment per qualifying sample while growing.
    pub growth_rate: f64,
    /// Cap on `avg_velocity / velocity_threshold`.
    pub max_velocity_multiplier: f64,
    /// Extra growth per second spent growing.
    pub duration_growth_factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of the remaining distance covered per tick while growing.
    pub grow_lerp_factor: f64,
    /// Per-tick multiplicative decay while not growing.
    pub shrink_factor: f64,
    /// Margin above `min_scale` before the overlay counts as visible.
    pub visibility_epsilon: f64,
    /// Animation timer frequency.
    pub tick_hz: u32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: 800.0,
            velocity_window: 10,
            warmup_secs: 1.5,
            debounce_secs: 0.1,
            growth_rate: 0.15,
            max_velocity_multiplier: 5.0,
            duration_growth_factor: 0.5,
            min_scale: 1.0,
            max_scale: 50.0,
            grow_lerp_factor: 0.3,
            shrink_factor: 0.92,
            visibility_epsilon: 0.01,
            tick_hz: 120,
        }
    }
}

impl ShakeConfig {
    /// Saturates at `Duration::MAX` for values no `Duration` can hold.
    pub fn warmup(&self) -> Duration {
        Duration::try_from_secs_f64(self.warmup_secs).unwrap_or(Duration::MAX)
    }

    /// Saturates like [`ShakeConfig::warmup`].
    pub fn debounce(&self) -> Duration {
        Duration::try_from_secs_f64(self.debounce_secs).unwrap_or(Duration::MAX)
    }

    /// Nominal period of the animation timer, never shorter than 1ms.
    pub fn tick_interval(&self) -> Duration {
        let hz = self.tick_hz.clamp(1, MAX_TICK_HZ);
        Duration::from_secs_f64(1.0 / hz as f64)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> BigCursorResult<()> {
        fn positive(name: &str, value: f64) -> BigCursorResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(BigCursorError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )))
            }
        }

        fn unit_interval(name: &str, value: f64) -> BigCursorResult<()> {
            if value.is_finite() && value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(BigCursorError::Config(format!(
                    "{} must be between 0 and 1 (exclusive), got {}",
                    name, value
                )))
            }
        }

        fn at_most(name: &str, value: f64, max: f64) -> BigCursorResult<()> {
            if value <= max {
                Ok(())
            } else {
                Err(BigCursorError::Config(format!(
                    "{} must be at most {}, got {}",
                    name, max, value
                )))
            }
        }

        positive("velocityThreshold", self.velocity_threshold)?;
        positive("warmupSecs", self.warmup_secs)?;
        positive("debounceSecs", self.debounce_secs)?;
        at_most("warmupSecs", self.warmup_secs, MAX_PERIOD_SECS)?;
        at_most("debounceSecs", self.debounce_secs, MAX_PERIOD_SECS)?;
        positive("growthRate", self.growth_rate)?;
        positive("maxVelocityMultiplier", self.max_velocity_multiplier)?;
        positive("durationGrowthFactor", self.duration_growth_factor)?;
        positive("visibilityEpsilon", self.visibility_epsilon)?;
        unit_interval("growLerpFactor", self.grow_lerp_factor)?;
        unit_interval("shrinkFactor", self.shrink_factor)?;

        if self.velocity_window == 0 {
            return Err(BigCursorError::Config(
                "velocityWindow must hold at least one sample".to_string(),
            ));
        }
        if self.tick_hz == 0 || self.tick_hz > MAX_TICK_HZ {
            return Err(BigCursorError::Config(format!(
                "tickHz must be between 1 and {}, got {}",
                MAX_TICK_HZ, self.tick_hz
            )));
        }
        if !self.min_scale.is_finite() || self.min_scale < 1.0 {
            return Err(BigCursorError::Config(format!(
                "minScale must be at least 1.0, got {}",
                self.min_scale
            )));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(BigCursorError::Config(format!(
                "maxScale ({}) must be >= minScale ({})",
                self.max_scale, self.min_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ShakeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.warmup(), Duration::from_millis(1500));
        assert_eq!(config.debounce(), Duration::from_millis(100));
    }

    #[test]
    fn test_tick_interval() {
        let config = ShakeConfig::default();
        let interval = config.tick_interval();
        assert!((interval.as_secs_f64() - 1.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_inverted_scale_range() {
        let config = ShakeConfig {
            min_scale: 4.0,
            max_scale: 2.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("maxScale"));
    }

    #[test]
    fn test_rejects_bad_factors() {
        let config = ShakeConfig {
            shrink_factor: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ShakeConfig {
            velocity_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ShakeConfig {
            velocity_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_periods_past_an_hour() {
        let config = ShakeConfig {
            warmup_secs: 1e19,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("warmupSecs"));

        let config = ShakeConfig {
            debounce_secs: 1e30,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("debounceSecs"));

        let config = ShakeConfig {
            warmup_secs: MAX_PERIOD_SECS,
            debounce_secs: MAX_PERIOD_SECS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tick_rate_past_limit() {
        let config = ShakeConfig {
            tick_hz: 4_000_000_000,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("tickHz"));

        let config = ShakeConfig {
            tick_hz: MAX_TICK_HZ,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_durations_saturate_instead_of_panicking() {
        let config = ShakeConfig {
            warmup_secs: 1e30,
            debounce_secs: f64::INFINITY,
            tick_hz: u32::MAX,
            ..Default::default()
        };
        assert_eq!(config.warmup(), Duration::MAX);
        assert_eq!(config.debounce(), Duration::MAX);
        assert!(!config.tick_interval().is_zero());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ShakeConfig =
            serde_json::from_str(r#"{"velocityThreshold": 1200, "maxScale": 8}"#).unwrap();
        assert_eq!(config.velocity_threshold, 1200.0);
        assert_eq!(config.max_scale, 8.0);
        assert_eq!(config.velocity_window, 10);
        assert_eq!(config.tick_hz, 120);
    }
}
