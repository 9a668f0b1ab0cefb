mod binder;
mod command;
mod process_control;

pub use {binder::TrayMenuBinder, command::TrayCommand, process_control::ProcessControl};
