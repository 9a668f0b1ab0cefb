mod app_event;
mod bus;

pub use {
    app_event::AppEvent,
    bus::{DEFAULT_EVENT_CAPACITY, EventBus},
};
