use crate::config::default_window_offset;

use serde::{Deserialize, Serialize};

/// System tray configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Use the light-on-dark icon (for dark taskbars). Ignored on macOS.
    #[serde(default)]
    pub dark_icon: bool,
    /// Left click on the tray icon toggles the window, positioned next to the icon.
    #[serde(default)]
    pub attach_window: bool,
    /// Gap in pixels between the tray icon and an attached window.
    #[serde(default = "default_window_offset")]
    pub window_offset: u32,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            dark_icon: false,
            attach_window: false,
            window_offset: default_window_offset(),
        }
    }
}
