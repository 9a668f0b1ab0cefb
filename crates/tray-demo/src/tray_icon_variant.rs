use crate::config::TrayConfig;

/// Which embedded tray icon to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconVariant {
    /// Dark glyph for light taskbars.
    Light,
    /// Light glyph for dark taskbars.
    Dark,
    /// Monochrome template the macOS menu bar tints itself.
    MacTemplate,
}

impl TrayIconVariant {
    /// Pick the icon for the current platform and configuration.
    pub fn for_platform(config: &TrayConfig) -> Self {
        if cfg!(target_os = "macos") {
            TrayIconVariant::MacTemplate
        } else if config.dark_icon {
            TrayIconVariant::Dark
        } else {
            TrayIconVariant::Light
        }
    }

    /// Whether the icon should be handed to the OS as a template image.
    pub fn is_template(self) -> bool {
        self == TrayIconVariant::MacTemplate
    }
}
