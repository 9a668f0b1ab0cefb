use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named event delivered to every current subscriber.
///
/// Serializes as `{"name": "...", "data": ...}` so front-end listeners read
/// the payload from `event.data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppEvent {
    /// Channel name, e.g. `"time"`.
    pub name: String,
    /// Event payload.
    pub data: Value,
}

impl AppEvent {
    /// Create an event on the given channel.
    pub fn new(name: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Encode the event as a JSON text frame.
    #[track_caller]
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|source| CoreError::Serialization {
            name: self.name.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
