//! Pointer polling task.
//!
//! Spawns a background task that reads the global pointer position at a
//! fixed rate and forwards a timestamped sample whenever it changes. Moves
//! and drags are indistinguishable here, so both feed the gesture detector.

use std::pin::pin;
use std::time::{Duration, Instant};

use device_query::DeviceState;
use futures::future::Either;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::position::{MotionSample, RawCursorPosition};

/// Polling interval for the pointer position (250Hz).
pub const POINTER_POLL_INTERVAL_MS: u64 = 4;

/// Handle to the pointer polling task. Dropping it stops the task.
pub struct PointerPoller {
    stop: Option<DropGuard>,
    pub handle: JoinHandle<()>,
}

impl PointerPoller {
    /// Stop the polling task.
    pub fn stop(&mut self) {
        drop(self.stop.take());
    }
}

/// Spawn the pointer polling task on the current tokio runtime.
///
/// Samples that do not fit into `tx` are dropped; the velocity tracker only
/// needs a representative stream, not every reading.
pub fn spawn_pointer_poller(tx: mpsc::Sender<MotionSample>) -> PointerPoller {
    let stop_token = CancellationToken::new();
    let stop_token_child = stop_token.child_token();

    let handle = tokio::spawn(async move {
        let device_state = DeviceState::new();
        let mut last_position = RawCursorPosition::query(&device_state);
        let mut dropped: u64 = 0;

        loop {
            let sleep = tokio::time::sleep(Duration::from_millis(POINTER_POLL_INTERVAL_MS));
            let Either::Right(_) =
                futures::future::select(pin!(stop_token_child.cancelled()), pin!(sleep)).await
            else {
                break;
            };

            let position = RawCursorPosition::query(&device_state);
            if position == last_position {
                continue;
            }
            last_position = position;

            match tx.try_send(position.sample_at(Instant::now())) {
                Ok(()) => {},
                Err(mpsc::error::TrySendError::Full(_)) => dropped += 1,
                Err(mpsc::error::TrySendError::Closed(_)) => break,
            }
        }

        log::info!("[CURSOR] Pointer poller done ({} samples dropped)", dropped);
    });

    PointerPoller {
        stop: Some(stop_token.drop_guard()),
        handle,
    }
}
