//! Monitor enumeration and layout change detection.
//!
//! There is no portable display-configuration notification, so a watcher
//! task re-enumerates monitors periodically and reports a new layout only
//! when any frame differs from the previous enumeration.

use std::pin::pin;
use std::time::Duration;

use futures::future::Either;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use xcap::Monitor;

use super::surface::SurfaceDescriptor;
use crate::error::{BigCursorError, BigCursorResult};

/// How often the watcher re-enumerates monitors.
pub const DISPLAY_POLL_INTERVAL_SECS: u64 = 2;

/// Enumerate attached monitors as surface descriptors.
pub fn enumerate_displays() -> BigCursorResult<Vec<SurfaceDescriptor>> {
    let monitors = Monitor::all()
        .map_err(|e| BigCursorError::DisplayEnumeration(format!("Failed to get monitors: {}", e)))?;

    let descriptors = monitors
        .iter()
        .enumerate()
        .map(|(idx, monitor)| {
            let name = monitor
                .name()
                .unwrap_or_else(|_| format!("Monitor {}", idx));
            let mut descriptor = SurfaceDescriptor::new(
                name,
                monitor.x().unwrap_or(0) as f64,
                monitor.y().unwrap_or(0) as f64,
                monitor.width().unwrap_or(1920) as f64,
                monitor.height().unwrap_or(1080) as f64,
            );
            descriptor.is_primary = monitor.is_primary().unwrap_or(false);
            descriptor
        })
        .collect();

    Ok(descriptors)
}

/// Whether two enumerations describe different layouts.
pub fn layout_changed(previous: &[SurfaceDescriptor], current: &[SurfaceDescriptor]) -> bool {
    previous.len() != current.len()
        || previous
            .iter()
            .zip(current)
            .any(|(a, b)| a.screen_frame != b.screen_frame)
}

/// Handle to the display watcher task. Dropping it stops the task.
pub struct DisplayWatcher {
    stop: Option<DropGuard>,
    pub handle: JoinHandle<()>,
}

impl DisplayWatcher {
    pub fn stop(&mut self) {
        drop(self.stop.take());
    }
}

/// Spawn a task that sends the full new layout whenever it changes.
pub fn spawn_display_watcher(
    initial: Vec<SurfaceDescriptor>,
    tx: mpsc::Sender<Vec<SurfaceDescriptor>>,
) -> DisplayWatcher {
    let stop_token = CancellationToken::new();
    let stop_token_child = stop_token.child_token();

    let handle = tokio::spawn(async move {
        let mut known = initial;

        loop {
            let sleep = tokio::time::sleep(Duration::from_secs(DISPLAY_POLL_INTERVAL_SECS));
            let Either::Right(_) =
                futures::future::select(pin!(stop_token_child.cancelled()), pin!(sleep)).await
            else {
                break;
            };

            let current = match tokio::task::spawn_blocking(enumerate_displays).await {
                Ok(Ok(current)) => current,
                Ok(Err(e)) => {
                    log::warn!("[DISPLAY] {}", e);
                    continue;
                },
                Err(e) => {
                    log::error!("[DISPLAY] Enumeration task failed: {}", e);
                    continue;
                },
            };

            if !layout_changed(&known, &current) {
                continue;
            }

            log::info!("[DISPLAY] Display configuration changed");
            known = current.clone();
            if tx.send(current).await.is_err() {
                break;
            }
        }

        log::info!("[DISPLAY] Display watcher done");
    });

    DisplayWatcher {
        stop: Some(stop_token.drop_guard()),
        handle,
    }
}
