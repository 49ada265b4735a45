//! Enlarges the pointer while the user shakes the mouse.
//!
//! Pointer samples feed a rolling velocity window; a sustained burst above
//! the threshold becomes a shake gesture that, after a warm-up, raises a
//! target scale. An animator eases the drawn glyph toward that target on
//! every tick and decays it once the shake ends, hiding the system pointer
//! for as long as the enlarged glyph is on screen.

pub mod app;
pub mod config;
pub mod cursor;
pub mod display;
pub mod error;
pub mod rendering;

/// Process entry: logging, configuration, then the event loop.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match config::load_from_env() {
        Ok(true) => {},
        Ok(false) => log::debug!("[CONFIG] Using defaults"),
        Err(e) => log::error!("[CONFIG] {}; falling back to defaults", e),
    }

    if let Err(e) = app::runtime::run() {
        log::error!("[RUNTIME] {}", e);
        std::process::exit(1);
    }
}
