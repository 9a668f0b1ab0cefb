mod controller;
mod state;
mod window_handle;

pub use {
    controller::VisibilityController, state::WindowVisibilityState, window_handle::WindowHandle,
};
