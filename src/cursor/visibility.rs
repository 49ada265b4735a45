//! System pointer visibility.
//!
//! While the enlarged glyph is on screen the real pointer is hidden, and it
//! is restored when the glyph returns to rest. OS hide/show calls are
//! counted rather than idempotent on some platforms, so every call goes
//! through a guard that drops redundant requests.

use crate::error::BigCursorResult;

/// Outbound hook that shows or hides the OS pointer.
pub trait SystemCursor {
    fn set_visible(&mut self, visible: bool) -> BigCursorResult<()>;
}

/// Guards a [`SystemCursor`] so it only sees actual state changes.
pub struct VisibilityCoordinator<C: SystemCursor> {
    backend: C,
    system_cursor_visible: bool,
    shut_down: bool,
}

impl<C: SystemCursor> VisibilityCoordinator<C> {
    /// The system pointer is assumed visible at startup.
    pub fn new(backend: C) -> Self {
        Self {
            backend,
            system_cursor_visible: true,
            shut_down: false,
        }
    }

    pub fn is_system_cursor_visible(&self) -> bool {
        self.system_cursor_visible
    }

    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Hide the system pointer unless it is already hidden.
    pub fn hide(&mut self) {
        if self.system_cursor_visible {
            self.apply(false);
        }
    }

    /// Show the system pointer unless it is already shown.
    pub fn show(&mut self) {
        if !self.system_cursor_visible {
            self.apply(true);
        }
    }

    /// Show the system pointer regardless of the tracked state.
    ///
    /// Called on termination so the real pointer is never left hidden.
    pub fn shutdown(&mut self) {
        log::debug!("[CURSOR] Restoring system cursor on shutdown");
        self.apply(true);
        self.shut_down = true;
    }

    fn apply(&mut self, visible: bool) {
        if let Err(e) = self.backend.set_visible(visible) {
            log::warn!("[CURSOR] Failed to set system cursor visible={}: {}", visible, e);
        }
        self.system_cursor_visible = visible;
    }
}

impl<C: SystemCursor> Drop for VisibilityCoordinator<C> {
    fn drop(&mut self) {
        if !self.shut_down {
            self.shutdown();
        }
    }
}

/// The platform's own pointer.
#[derive(Debug, Default)]
pub struct NativeSystemCursor;

#[cfg(target_os = "windows")]
impl SystemCursor for NativeSystemCursor {
    fn set_visible(&mut self, visible: bool) -> BigCursorResult<()> {
        use windows::Win32::Foundation::BOOL;
        use windows::Win32::UI::WindowsAndMessaging::ShowCursor;

        // ShowCursor adjusts a display counter; the pointer shows at >= 0.
        let counter = unsafe { ShowCursor(BOOL::from(visible)) };
        log::debug!(
            "[CURSOR] ShowCursor({}) -> display counter {}",
            visible,
            counter
        );
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
impl SystemCursor for NativeSystemCursor {
    fn set_visible(&mut self, visible: bool) -> BigCursorResult<()> {
        log::debug!(
            "[CURSOR] System cursor visible={} (no native hook on this platform)",
            visible
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BigCursorError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingCursor {
        calls: Rc<RefCell<Vec<bool>>>,
        fail: bool,
    }

    impl SystemCursor for RecordingCursor {
        fn set_visible(&mut self, visible: bool) -> BigCursorResult<()> {
            self.calls.borrow_mut().push(visible);
            if self.fail {
                Err(BigCursorError::SystemCursor("denied".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_redundant_calls_are_dropped() {
        let cursor = RecordingCursor::default();
        let calls = cursor.calls.clone();
        let mut coordinator = VisibilityCoordinator::new(cursor);

        coordinator.show();
        coordinator.hide();
        coordinator.hide();
        coordinator.show();
        coordinator.show();

        assert_eq!(*calls.borrow(), vec![false, true]);
    }

    #[test]
    fn test_shutdown_always_shows() {
        let cursor = RecordingCursor::default();
        let calls = cursor.calls.clone();
        let mut coordinator = VisibilityCoordinator::new(cursor);

        // Already visible, but termination still forces the call
        coordinator.shutdown();
        assert_eq!(*calls.borrow(), vec![true]);

        // No second restore from Drop
        drop(coordinator);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_drop_restores_hidden_cursor() {
        let cursor = RecordingCursor::default();
        let calls = cursor.calls.clone();
        {
            let mut coordinator = VisibilityCoordinator::new(cursor);
            coordinator.hide();
        }
        assert_eq!(*calls.borrow(), vec![false, true]);
    }

    #[test]
    fn test_backend_failure_does_not_repeat() {
        let cursor = RecordingCursor {
            fail: true,
            ..Default::default()
        };
        let calls = cursor.calls.clone();
        let mut coordinator = VisibilityCoordinator::new(cursor);

        coordinator.hide();
        coordinator.hide();
        assert!(!coordinator.is_system_cursor_visible());
        assert_eq!(calls.borrow().len(), 1);
        coordinator.shutdown();
    }
}
