//! Two-state window visibility with close-to-hide semantics.

use crate::{WindowHandle, WindowVisibilityState};

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, instrument};

/// Owns the shown/hidden state of the main window.
///
/// The window is expected to be created hidden. Toggling and close
/// interception both go through the same two-state model, and neither ever
/// destroys the window. The state is behind a mutex so callbacks from more
/// than one thread cannot lose a transition.
pub struct VisibilityController<W> {
    window: W,
    state: Mutex<WindowVisibilityState>,
}

impl<W: WindowHandle> VisibilityController<W> {
    /// Take control of a window that is currently hidden.
    pub fn new(window: W) -> Self {
        Self {
            window,
            state: Mutex::new(WindowVisibilityState::Hidden),
        }
    }

    /// Current visibility.
    pub fn state(&self) -> WindowVisibilityState {
        *self.lock_state()
    }

    /// Flip visibility and return the new state.
    ///
    /// Hiding leaves focus alone; showing also requests focus.
    #[instrument(skip(self))]
    pub fn toggle(&self) -> WindowVisibilityState {
        let mut state = self.lock_state();

        *state = match *state {
            WindowVisibilityState::Visible => {
                self.window.hide();
                WindowVisibilityState::Hidden
            }
            WindowVisibilityState::Hidden => {
                self.window.show();
                self.window.focus();
                WindowVisibilityState::Visible
            }
        };

        debug!(state = ?*state, "Visibility toggled");
        *state
    }

    /// Handle a platform close request by hiding instead.
    ///
    /// Always returns `true`: the close is suppressed and the host must keep
    /// the window alive.
    #[instrument(skip(self))]
    pub fn intercept_close(&self) -> bool {
        let mut state = self.lock_state();

        self.window.hide();
        if *state == WindowVisibilityState::Visible {
            debug!("Close request redirected to hide");
        }
        *state = WindowVisibilityState::Hidden;

        true
    }

    /// The controlled window.
    pub fn window(&self) -> &W {
        &self.window
    }

    fn lock_state(&self) -> MutexGuard<'_, WindowVisibilityState> {
        // The guarded value is a plain enum, so a poisoned lock still holds a valid state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
