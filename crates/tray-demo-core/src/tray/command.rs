/// Commands selectable from the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrayCommand {
    /// Show the window if hidden, hide it if shown.
    ToggleVisibility,
    /// Terminate the process.
    Quit,
}

impl TrayCommand {
    /// Menu items in display order. The host places one separator between them.
    pub const MENU_ORDER: [TrayCommand; 2] = [TrayCommand::ToggleVisibility, TrayCommand::Quit];

    /// Menu label for the command.
    pub fn label(self) -> &'static str {
        match self {
            TrayCommand::ToggleVisibility => "Show / Hide",
            TrayCommand::Quit => "Quit",
        }
    }
}
