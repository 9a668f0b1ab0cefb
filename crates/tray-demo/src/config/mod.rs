mod clock_config;
#[allow(clippy::module_inception)]
mod config;
mod server_config;
mod tray_config;
mod window_config;

pub(crate) use {
    clock_config::ClockConfig, config::Config, server_config::ServerConfig,
    tray_config::TrayConfig, window_config::WindowConfig,
};

pub(crate) const APP_NAME: &str = "Tray Demo";
pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 400;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub(crate) const DEFAULT_WINDOW_OFFSET: u32 = 5;
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
/// Port 0 lets the OS pick a free port.
pub(crate) const DEFAULT_PORT: u16 = 0;

pub(crate) fn default_title() -> String {
    APP_NAME.to_string()
}

pub(crate) fn default_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

pub(crate) fn default_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_window_offset() -> u32 {
    DEFAULT_WINDOW_OFFSET
}

pub(crate) fn default_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

pub(crate) fn default_event_name() -> String {
    tray_demo_core::TIME_EVENT.to_string()
}

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}
