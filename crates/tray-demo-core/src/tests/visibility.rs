use crate::{
    VisibilityController, WindowHandle, WindowVisibilityState,
    tests::fakes::{FakeWindow, WindowCall},
};

use std::{
    rc::Rc,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

/// WHAT: Controller starts Hidden
/// WHY: The window is created hidden and only shown from the tray
#[test]
fn given_new_controller_when_reading_state_then_hidden() {
    // Given/When: A fresh controller
    let controller = VisibilityController::new(FakeWindow::default());

    // Then: State is Hidden and the window was not touched
    assert_eq!(controller.state(), WindowVisibilityState::Hidden);
    assert!(controller.window().calls().is_empty());
}

/// WHAT: Toggle parity decides the final state
/// WHY: Odd toggle counts from Hidden end Visible, even counts end Hidden
#[test]
fn given_hidden_when_toggling_n_times_then_state_follows_parity() {
    for count in 0..10 {
        // Given: A hidden window
        let controller = VisibilityController::new(FakeWindow::default());

        // When: Toggling `count` times
        for _ in 0..count {
            controller.toggle();
        }

        // Then: Parity determines the state
        let expected = if count % 2 == 1 {
            WindowVisibilityState::Visible
        } else {
            WindowVisibilityState::Hidden
        };
        assert_eq!(controller.state(), expected, "after {} toggles", count);
    }
}

/// WHAT: Showing requests focus, hiding does not
/// WHY: A shown window should receive input immediately
#[test]
fn given_hidden_when_toggled_twice_then_show_focus_then_hide() {
    // Given: A hidden window
    let controller = VisibilityController::new(FakeWindow::default());

    // When: Toggling on and off
    assert_eq!(controller.toggle(), WindowVisibilityState::Visible);
    assert_eq!(controller.toggle(), WindowVisibilityState::Hidden);

    // Then: Show and focus happen together, hide stands alone
    assert_eq!(
        controller.window().calls(),
        vec![WindowCall::Show, WindowCall::Focus, WindowCall::Hide]
    );
}

/// WHAT: Close while visible hides and keeps the window
/// WHY: Closing must never destroy the window or end the process
#[test]
fn given_visible_when_close_intercepted_then_hidden_and_window_kept() {
    // Given: A visible window shared with the test
    let window = Rc::new(FakeWindow::default());
    let controller = VisibilityController::new(Rc::clone(&window));
    controller.toggle();

    // When: The platform requests a close
    let suppressed = controller.intercept_close();

    // Then: Close is suppressed, state is Hidden, window still alive
    assert!(suppressed);
    assert_eq!(controller.state(), WindowVisibilityState::Hidden);
    assert!(!window.is_destroyed());

    // And: A later toggle shows the very same window again
    assert_eq!(controller.toggle(), WindowVisibilityState::Visible);
    assert!(Rc::ptr_eq(controller.window(), &window));
    assert_eq!(
        window.calls(),
        vec![
            WindowCall::Show,
            WindowCall::Focus,
            WindowCall::Hide,
            WindowCall::Show,
            WindowCall::Focus
        ]
    );
}

/// WHAT: Every close attempt is intercepted
/// WHY: The hook stays active for the lifetime of the window
#[test]
fn given_repeated_closes_when_intercepted_then_each_suppressed() {
    // Given: A controller
    let controller = VisibilityController::new(FakeWindow::default());

    for _ in 0..3 {
        // When: Showing then closing
        controller.toggle();
        let suppressed = controller.intercept_close();

        // Then: Each close is suppressed and ends Hidden
        assert!(suppressed);
        assert_eq!(controller.state(), WindowVisibilityState::Hidden);
    }
}

/// WHAT: Close while already hidden is still suppressed
/// WHY: The intercept is total and must not flip the state to Visible
#[test]
fn given_hidden_when_close_intercepted_then_stays_hidden() {
    // Given: A hidden window
    let controller = VisibilityController::new(FakeWindow::default());

    // When: A close request arrives
    let suppressed = controller.intercept_close();

    // Then: Still hidden, close suppressed
    assert!(suppressed);
    assert_eq!(controller.state(), WindowVisibilityState::Hidden);
}

#[derive(Default)]
struct CountingWindow {
    shows: AtomicUsize,
    hides: AtomicUsize,
}

impl WindowHandle for CountingWindow {
    fn show(&self) {
        self.shows.fetch_add(1, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }

    fn focus(&self) {}
}

/// WHAT: Concurrent toggles never lose a transition
/// WHY: Callbacks may arrive on more than one thread on some platforms
#[test]
#[allow(clippy::unwrap_used)]
fn given_many_threads_when_toggling_then_no_updates_lost() {
    // Given: A controller shared across threads
    let controller = Arc::new(VisibilityController::new(CountingWindow::default()));

    // When: 8 threads toggle 125 times each (1000 total)
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let controller = Arc::clone(&controller);
            thread::spawn(move || {
                for _ in 0..125 {
                    controller.toggle();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Then: Even count ends Hidden with matched show/hide calls
    assert_eq!(controller.state(), WindowVisibilityState::Hidden);
    assert_eq!(controller.window().shows.load(Ordering::SeqCst), 500);
    assert_eq!(controller.window().hides.load(Ordering::SeqCst), 500);
}
