use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events delivered to the main-thread event loop.
///
/// Menu and tray icon events arrive on toolkit threads and are forwarded
/// here so that every window and tray mutation happens on the UI thread.
#[derive(Debug)]
pub enum LoopEvent {
    /// A tray menu item was selected.
    Menu(MenuEvent),
    /// The tray icon itself was clicked or hovered.
    TrayIcon(TrayIconEvent),
    /// Leave the event loop with exit status 0.
    Quit,
    /// The background runtime failed. Leave the event loop with exit status 1.
    Fatal,
}

impl LoopEvent {
    /// Exit status this event ends the loop with, if it ends the loop at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Quit => Some(0),
            Self::Fatal => Some(1),
            Self::Menu(_) | Self::TrayIcon(_) => None,
        }
    }
}
