use crate::{DiagnosticSink, TracingSink};

use std::{fmt, sync::Arc};

/// Sample request/response service exposed to the front-end.
///
/// Holds no mutable state, so a single instance can serve concurrent calls.
#[derive(Clone)]
pub struct GreetService {
    sink: Arc<dyn DiagnosticSink>,
}

impl GreetService {
    /// Service that records diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Service that records diagnostics to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Build a greeting for `name`. No validation: an empty name yields `"Hello !"`.
    pub fn greet(&self, name: &str) -> String {
        format!("Hello {}!", name)
    }

    /// Record a client heartbeat timestamp. Exactly one record per call.
    pub fn sync_check(&self, timestamp: &str) {
        self.sink.record(&format!("SyncCheck: {}", timestamp));
    }
}

impl Default for GreetService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GreetService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetService").finish_non_exhaustive()
    }
}
