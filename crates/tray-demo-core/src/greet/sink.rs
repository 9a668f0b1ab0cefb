use tracing::info;

/// Destination for diagnostic records produced by service calls.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic line.
    fn record(&self, message: &str);
}

/// Writes diagnostic records to the `tracing` subscriber at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        info!(target: "tray_demo_core::diagnostics", "{}", message);
    }
}
