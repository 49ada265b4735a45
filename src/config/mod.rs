//! Application configuration management.
//!
//! There is no configuration file. Defaults are compiled in and may be
//! overridden once at startup from the `BIGCURSOR_CONFIG` environment
//! variable; the color mode can change at any time afterwards.
//!
//! ## Architecture
//!
//! - `AppConfig`: process-wide preferences behind a `parking_lot::RwLock`
//! - `ShakeConfig`: thresholds and rates for the motion-to-animation pipeline

pub mod app;
pub mod shake;

pub use app::{
    color_mode, load_from_env, set_app_config, set_color_mode, shake_config, toggle_color_mode,
    AppConfig, APP_CONFIG,
};
pub use shake::ShakeConfig;
