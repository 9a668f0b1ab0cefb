mod service;
mod sink;

pub use {
    service::GreetService,
    sink::{DiagnosticSink, TracingSink},
};
