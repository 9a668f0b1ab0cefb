//! System tray icon and its context menu.
//!
//! Builds the "Show / Hide" and "Quit" items with a separator between them
//! and hands their ids to the [`TrayMenuBinder`].

use crate::{AppError, AppResult, TrayIconVariant, config::TrayConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_demo_core::{ProcessControl, TrayCommand, TrayMenuBinder, WindowHandle};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
///
/// Must live on the main thread: `TrayIcon` is `!Send` on all platforms.
pub struct TrayManager {
    tray_icon: TrayIcon,
    toggle_item_id: MenuId,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon with its menu.
    #[track_caller]
    #[instrument(skip(config))]
    pub fn new(tooltip: &str, config: &TrayConfig) -> AppResult<Self> {
        let menu = Menu::new();

        let toggle_item = MenuItem::new(TrayCommand::ToggleVisibility.label(), true, None);
        let separator = PredefinedMenuItem::separator();
        let quit_item = MenuItem::new(TrayCommand::Quit.label(), true, None);

        let toggle_id = toggle_item.id().clone();
        let quit_id = quit_item.id().clone();

        menu.append_items(&[&toggle_item, &separator, &quit_item])
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to build tray menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let variant = TrayIconVariant::for_platform(config);
        let icon = Self::load_icon(variant)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(tooltip)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .with_icon_as_template(variant.is_template())
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(variant = ?variant, "System tray icon initialized");

        Ok(Self {
            tray_icon,
            toggle_item_id: toggle_id,
            quit_item_id: quit_id,
        })
    }

    /// Register this menu's item ids with `binder`.
    pub fn bind<W: WindowHandle, P: ProcessControl>(&self, binder: &mut TrayMenuBinder<W, P>) {
        binder.bind(TrayCommand::ToggleVisibility, self.toggle_item_id.as_ref());
        binder.bind(TrayCommand::Quit, self.quit_item_id.as_ref());
    }

    /// Id of the tray icon, for matching icon click events.
    pub fn icon_id(&self) -> &tray_icon::TrayIconId {
        self.tray_icon.id()
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(variant: TrayIconVariant) -> AppResult<Icon> {
        let png_bytes: &[u8] = match variant {
            TrayIconVariant::Light => include_bytes!("../resources/icons/systray-light.png"),
            TrayIconVariant::Dark => include_bytes!("../resources/icons/systray-dark.png"),
            TrayIconVariant::MacTemplate => {
                include_bytes!("../resources/icons/systray-mac-template.png")
            }
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
