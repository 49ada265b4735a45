//! Event loop hosting the overlay.
//!
//! Three producers feed a single consumer on a current-thread runtime:
//! the pointer poller, the display watcher, and the animation interval.
//! The consumer handles one event at a time, so the overlay needs no locks.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::overlay::Overlay;
use super::sink::PixmapSink;
use crate::config;
use crate::cursor::{spawn_pointer_poller, NativeSystemCursor};
use crate::display::{enumerate_displays, spawn_display_watcher};
use crate::error::{BigCursorError, BigCursorResult};

/// Pending pointer samples before the poller starts dropping them.
const SAMPLE_CHANNEL_CAPACITY: usize = 256;

/// Build the runtime and block until Ctrl-C or SIGTERM.
pub fn run() -> BigCursorResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop())
}

async fn event_loop() -> BigCursorResult<()> {
    let shake = config::shake_config();

    let displays = match tokio::task::spawn_blocking(enumerate_displays).await {
        Ok(Ok(displays)) => displays,
        Ok(Err(e)) => {
            log::warn!("[RUNTIME] {}; starting without surfaces", e);
            Vec::new()
        },
        Err(e) => {
            return Err(BigCursorError::Runtime(format!(
                "display enumeration task failed: {}",
                e
            )))
        },
    };
    if displays.is_empty() {
        log::warn!("[RUNTIME] No displays attached, rendering is disabled until one appears");
    }

    let mut overlay = Overlay::new(
        &shake,
        displays.clone(),
        NativeSystemCursor,
        PixmapSink::new()?,
    )?;
    overlay.set_color_mode(config::color_mode());

    let (sample_tx, mut sample_rx) = mpsc::channel(SAMPLE_CHANNEL_CAPACITY);
    let (display_tx, mut display_rx) = mpsc::channel(4);
    let mut poller = spawn_pointer_poller(sample_tx);
    let mut watcher = spawn_display_watcher(displays, display_tx);

    let mut ticker = tokio::time::interval(shake.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = shutdown_signal()?;
    tokio::pin!(shutdown);

    log::info!(
        "[RUNTIME] Tracking pointer on {} surface(s) at {} Hz",
        overlay.surfaces().len(),
        shake.tick_hz
    );

    loop {
        tokio::select! {
            biased;

            signal = &mut shutdown => {
                log::info!("[RUNTIME] Received {}", signal);
                break;
            }

            Some(sample) = sample_rx.recv() => {
                overlay.on_pointer_moved(sample);
            }

            Some(layout) = display_rx.recv() => {
                if let Err(e) = overlay.on_display_configuration_changed(layout) {
                    log::error!("[RUNTIME] Surface rebuild failed: {}", e);
                }
            }

            tick = ticker.tick() => {
                overlay.set_color_mode(config::color_mode());
                overlay.on_animation_tick(tick.into_std());
            }
        }
    }

    log::info!("[RUNTIME] Shutting down");
    poller.stop();
    watcher.stop();
    overlay.shutdown();
    Ok(())
}

/// Resolves with the name of the first termination request.
///
/// The SIGTERM handler is installed before this returns, so a signal sent
/// before the future is first polled is not lost.
fn shutdown_signal() -> BigCursorResult<impl Future<Output = &'static str>> {
    #[cfg(unix)]
    let mut terminate =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    Ok(async move {
        #[cfg(unix)]
        let terminated = terminate.recv();
        #[cfg(not(unix))]
        let terminated = std::future::pending::<Option<()>>();

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    log::error!("[RUNTIME] Failed to listen for Ctrl-C: {}", e);
                }
                "Ctrl-C"
            }
            _ = terminated => "SIGTERM",
        }
    })
}
