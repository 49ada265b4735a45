//! Application-level configuration.
//!
//! Contains the user preferences that affect the whole overlay:
//! - Glyph color mode (toggled from the status-bar affordance)
//! - Gesture and animation tuning
//!
//! Uses `parking_lot::RwLock` for fast, non-poisoning access from both the
//! event loop and UI glue.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::shake::ShakeConfig;
use crate::error::BigCursorResult;
use crate::rendering::ColorMode;

/// Environment variable holding an optional JSON `AppConfig` document.
pub const CONFIG_ENV_VAR: &str = "BIGCURSOR_CONFIG";

lazy_static! {
    /// Global app configuration.
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

/// Application-wide user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Fill/stroke scheme for the enlarged glyph.
    pub color_mode: ColorMode,
    pub shake: ShakeConfig,
}

impl AppConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> BigCursorResult<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.shake.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Getters
// ============================================================================

/// Current glyph color mode.
pub fn color_mode() -> ColorMode {
    APP_CONFIG.read().color_mode
}

/// Snapshot of the gesture/animation tuning.
pub fn shake_config() -> ShakeConfig {
    APP_CONFIG.read().shake.clone()
}

// ============================================================================
// Setters
// ============================================================================

/// Switch the glyph color mode. Applies to subsequent frames only.
pub fn set_color_mode(mode: ColorMode) {
    log::debug!("[CONFIG] set_color_mode({:?})", mode);
    APP_CONFIG.write().color_mode = mode;
}

/// Flip between dark and light glyphs, returning the new mode.
pub fn toggle_color_mode() -> ColorMode {
    let mut config = APP_CONFIG.write();
    config.color_mode = config.color_mode.toggled();
    log::debug!("[CONFIG] toggle_color_mode -> {:?}", config.color_mode);
    config.color_mode
}

/// Replace the entire app configuration at once.
pub fn set_app_config(config: AppConfig) {
    log::debug!("[CONFIG] set_app_config({:?})", config);
    *APP_CONFIG.write() = config;
}

/// Install configuration from `BIGCURSOR_CONFIG`, if set.
///
/// Returns `Ok(false)` when the variable is absent and defaults stay in place.
pub fn load_from_env() -> BigCursorResult<bool> {
    let Ok(json) = std::env::var(CONFIG_ENV_VAR) else {
        return Ok(false);
    };
    let config = AppConfig::from_json(&json)?;
    log::info!("[CONFIG] Loaded configuration from {}", CONFIG_ENV_VAR);
    set_app_config(config);
    Ok(true)
}
