/// Whether the main window is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowVisibilityState {
    /// Window is on screen.
    Visible,
    /// Window is hidden but still allocated. The state at process start.
    #[default]
    Hidden,
}
