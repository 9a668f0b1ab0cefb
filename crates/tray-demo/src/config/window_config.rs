use crate::config::{default_height, default_title, default_true, default_width};

use serde::{Deserialize, Serialize};

/// Main window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Inner width in logical pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Inner height in logical pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Keep the window above other windows.
    #[serde(default = "default_true")]
    pub always_on_top: bool,
    /// Allow the user to resize the window.
    #[serde(default = "default_true")]
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            always_on_top: true,
            resizable: true,
        }
    }
}
