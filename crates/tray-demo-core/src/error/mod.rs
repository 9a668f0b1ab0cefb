use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the behavioral core, with source location tracking.
///
/// The visibility, tray and greet operations are total; only encoding an
/// event envelope for delivery over the wire can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An event envelope could not be encoded as JSON.
    #[error("Failed to serialize event '{name}': {source} {location}")]
    Serialization {
        /// Name of the event channel.
        name: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
