mod emitter;
mod timestamp;

pub use {
    emitter::{ClockEmitter, DEFAULT_TICK_INTERVAL, TIME_EVENT},
    timestamp::format_timestamp,
};
