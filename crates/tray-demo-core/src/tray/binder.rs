//! Maps tray menu selections onto window and process actions.

use crate::{ProcessControl, TrayCommand, VisibilityController, WindowHandle};

use std::{
    collections::HashMap,
    rc::Rc,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::{debug, info, instrument};

/// Dispatches tray menu commands on the event-dispatch thread.
///
/// Menu item ids are supplied by the host toolkit through [`bind`](Self::bind).
/// After `Quit` has been dispatched every further command is ignored.
pub struct TrayMenuBinder<W, P> {
    controller: Rc<VisibilityController<W>>,
    process: P,
    bindings: HashMap<String, TrayCommand>,
    quitting: AtomicBool,
}

impl<W: WindowHandle, P: ProcessControl> TrayMenuBinder<W, P> {
    /// Create a binder with no menu ids bound yet.
    pub fn new(controller: Rc<VisibilityController<W>>, process: P) -> Self {
        Self {
            controller,
            process,
            bindings: HashMap::new(),
            quitting: AtomicBool::new(false),
        }
    }

    /// Associate a host menu item id with a command.
    pub fn bind(&mut self, command: TrayCommand, id: impl Into<String>) {
        self.bindings.insert(id.into(), command);
    }

    /// Look up the command bound to a menu item id.
    pub fn resolve(&self, id: &str) -> Option<TrayCommand> {
        self.bindings.get(id).copied()
    }

    /// Execute a command synchronously.
    ///
    /// Returns `false` if the command was ignored because quit is underway.
    #[instrument(skip(self))]
    pub fn dispatch(&self, command: TrayCommand) -> bool {
        if self.quitting.load(Ordering::SeqCst) {
            debug!("Ignoring tray command after quit");
            return false;
        }

        match command {
            TrayCommand::ToggleVisibility => {
                let state = self.controller.toggle();
                info!(state = ?state, "Window visibility toggled from tray");
            }
            TrayCommand::Quit => {
                self.quitting.store(true, Ordering::SeqCst);
                info!("Quit requested from tray menu");
                self.process.quit();
            }
        }

        true
    }

    /// Resolve a menu item id and dispatch its command. Unknown ids are ignored.
    pub fn handle_menu_event(&self, id: &str) -> bool {
        match self.resolve(id) {
            Some(command) => self.dispatch(command),
            None => {
                debug!(menu_id = id, "Unbound menu item selected");
                false
            }
        }
    }

    /// Whether `Quit` has been dispatched.
    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }

    /// The visibility controller the menu drives.
    pub fn controller(&self) -> &Rc<VisibilityController<W>> {
        &self.controller
    }
}
