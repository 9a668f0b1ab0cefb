//! Main-thread UI: window, tray icon and the menu binder that ties them together.

use crate::{
    AppResult, EventLoopQuitter, LoopEvent, MainWindow, TrayManager,
    config::{APP_NAME, Config},
};

use std::rc::Rc;

use tao::{
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    window::WindowId,
};
use tracing::{debug, info, instrument};
use tray_demo_core::{TrayMenuBinder, VisibilityController};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};

/// Everything that must live on the UI thread.
///
/// `TrayIcon` and the webview are `!Send`, so this is created inside the
/// event loop and never leaves it.
pub struct Ui {
    tray: TrayManager,
    binder: TrayMenuBinder<MainWindow, EventLoopQuitter>,
    attach_window: bool,
    window_offset: u32,
}

impl Ui {
    /// Create the hidden window and the tray icon, and bind the menu.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(
        target: &EventLoopWindowTarget<LoopEvent>,
        proxy: EventLoopProxy<LoopEvent>,
        config: &Config,
        url: &str,
    ) -> AppResult<Self> {
        let window = MainWindow::new(target, &config.window, url)?;
        let controller = Rc::new(VisibilityController::new(window));

        let tray = TrayManager::new(APP_NAME, &config.tray)?;
        let mut binder = TrayMenuBinder::new(controller, EventLoopQuitter::new(proxy));
        tray.bind(&mut binder);

        info!(url = %url, "UI ready");

        Ok(Self {
            tray,
            binder,
            attach_window: config.tray.attach_window,
            window_offset: config.tray.window_offset,
        })
    }

    /// Whether `id` is the main window.
    pub fn owns_window(&self, id: WindowId) -> bool {
        self.binder.controller().window().id() == id
    }

    /// Platform close request on the main window. Returns `true` when the
    /// close was turned into a hide and the window must be kept.
    pub fn handle_close_requested(&self) -> bool {
        self.binder.controller().intercept_close()
    }

    /// Tray menu selection.
    pub fn handle_menu_event(&self, event: &MenuEvent) {
        self.binder.handle_menu_event(event.id.as_ref());
    }

    /// Tray icon click. Only acts when the window is attached to the tray.
    pub fn handle_tray_icon_event(&self, event: &TrayIconEvent) {
        if !self.attach_window || self.binder.is_quitting() {
            return;
        }

        if let TrayIconEvent::Click {
            id,
            rect,
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            if id != self.tray.icon_id() {
                return;
            }

            let controller = self.binder.controller();
            controller.window().move_near(rect, self.window_offset);
            let state = controller.toggle();
            debug!(state = ?state, "Window toggled from tray icon click");
        }
    }
}
