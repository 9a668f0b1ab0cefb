//! The webview window toggled from the tray.
//!
//! Created hidden, always on top and kept out of the taskbar. The webview
//! renders the front-end served by the embedded web server.

use crate::{AppError, AppResult, LoopEvent, config::WindowConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    dpi::{LogicalSize, PhysicalPosition},
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::{debug, info, instrument};
use tray_demo_core::WindowHandle;
use wry::{WebView, WebViewBuilder};

/// Main application window with its webview.
pub struct MainWindow {
    window: Window,
    // Dropping the webview tears down the page, so it lives as long as the window.
    _webview: WebView,
}

impl MainWindow {
    /// Build the hidden window and load `url` into it.
    #[track_caller]
    #[instrument(skip(target, config))]
    pub fn new(
        target: &EventLoopWindowTarget<LoopEvent>,
        config: &WindowConfig,
        url: &str,
    ) -> AppResult<Self> {
        let window = Self::window_builder(config)
            .build(target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let builder = WebViewBuilder::new().with_url(url);

        #[cfg(any(target_os = "windows", target_os = "macos"))]
        let webview = builder.build(&window);

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;

            let vbox = window.default_vbox().ok_or_else(|| AppError::WebviewError {
                reason: "Window has no GTK container".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
            builder.build_gtk(vbox)
        };

        let webview = webview.map_err(|e| AppError::WebviewError {
            reason: format!("Failed to create webview: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(width = config.width, height = config.height, "Main window created (hidden)");

        Ok(Self {
            window,
            _webview: webview,
        })
    }

    fn window_builder(config: &WindowConfig) -> WindowBuilder {
        let builder = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_always_on_top(config.always_on_top)
            .with_resizable(config.resizable)
            .with_decorations(true)
            .with_minimizable(false)
            .with_maximizable(false)
            .with_closable(true)
            .with_visible(false);

        #[cfg(target_os = "windows")]
        let builder = {
            use tao::platform::windows::WindowBuilderExtWindows;
            builder.with_skip_taskbar(true)
        };

        #[cfg(target_os = "macos")]
        let builder = {
            use tao::platform::macos::WindowBuilderExtMacOS;
            builder
                .with_titlebar_transparent(true)
                .with_fullsize_content_view(true)
                .with_title_hidden(true)
        };

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let builder = {
            use tao::platform::unix::WindowBuilderExtUnix;
            builder.with_skip_taskbar(true)
        };

        builder
    }

    /// Id used to route window events.
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Move the window next to a tray icon occupying `anchor`.
    pub fn move_near(&self, anchor: &tray_icon::Rect, offset: u32) {
        let size = self.window.outer_size();
        let (x, y) = position_near_anchor(
            (anchor.position.x, anchor.position.y),
            (anchor.size.width, anchor.size.height),
            (size.width, size.height),
            offset,
        );

        debug!(x, y, "Positioning window at tray icon");
        self.window.set_outer_position(PhysicalPosition::new(x, y));
    }
}

impl WindowHandle for MainWindow {
    fn show(&self) {
        self.window.set_visible(true);
    }

    fn hide(&self) {
        self.window.set_visible(false);
    }

    fn focus(&self) {
        self.window.set_focus();
    }
}

/// Top-left corner for a window centred on a tray icon.
///
/// The window opens below the icon when there is no room above it (menu bar
/// or top panel), otherwise above it (bottom taskbar). The x coordinate is
/// clamped to the screen origin. All values are physical pixels.
pub(crate) fn position_near_anchor(
    anchor_position: (f64, f64),
    anchor_size: (u32, u32),
    window_size: (u32, u32),
    offset: u32,
) -> (i32, i32) {
    let (anchor_x, anchor_y) = (anchor_position.0 as i32, anchor_position.1 as i32);
    let (anchor_w, anchor_h) = (anchor_size.0 as i32, anchor_size.1 as i32);
    let (window_w, window_h) = (window_size.0 as i32, window_size.1 as i32);
    let offset = offset as i32;

    let x = (anchor_x + anchor_w / 2 - window_w / 2).max(0);

    let above = anchor_y - window_h - offset;
    let y = if above < 0 {
        anchor_y + anchor_h + offset
    } else {
        above
    };

    (x, y)
}
