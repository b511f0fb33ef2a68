//! Event types and wire payloads for the `PagerDuty` integration API.

use std::backtrace::Backtrace;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EventError;

/// Event type understood by the integration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Open a new incident or append to an open one with the same key
    Trigger,
    /// Mark an incident as being worked
    Acknowledge,
    /// Close an incident
    Resolve,
}

impl EventType {
    /// Get the wire name for this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Acknowledge => "acknowledge",
            Self::Resolve => "resolve",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = EventError;

    /// Parse an event type, rejecting anything outside the recognized set
    /// before any request is built or sent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigger" => Ok(Self::Trigger),
            "acknowledge" => Ok(Self::Acknowledge),
            "resolve" => Ok(Self::Resolve),
            other => Err(EventError::InvalidEventType(other.to_string())),
        }
    }
}

/// Request body for the events endpoint.
///
/// The API expects exactly these five fields on every event. Absent
/// optional values are serialized as `null`, never omitted.
#[derive(Debug, Clone, Serialize)]
pub struct EventRequest {
    /// Service key aka. integration key, travels in the body
    pub service_key: String,
    /// One of trigger, acknowledge, resolve
    pub event_type: EventType,
    /// Incident to apply the event to; `None` on trigger asks the
    /// server to create a new incident
    pub incident_key: Option<String>,
    /// Short description of the event
    pub description: Option<String>,
    /// Arbitrary metadata included in the incident log
    pub details: Value,
}

impl EventRequest {
    /// Build a request body. A `Null` details value is normalized to an
    /// empty object, matching the API's expectation of a JSON mapping.
    #[must_use]
    pub fn new(
        service_key: impl Into<String>,
        event_type: EventType,
        incident_key: Option<&str>,
        description: Option<&str>,
        details: Value,
    ) -> Self {
        let details = match details {
            Value::Null => Value::Object(Map::new()),
            value => value,
        };

        Self {
            service_key: service_key.into(),
            event_type,
            incident_key: incident_key.map(str::to_string),
            description: description.map(str::to_string),
            details,
        }
    }
}

/// Structured details extracted from an error value.
///
/// Error types are not directly serializable, so the interesting fields
/// are copied into a plain struct before being embedded in an event body.
/// Fields absent on the source value are left out of the serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    /// The error's display message
    pub message: String,
    /// Arguments the error was raised with, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Value>>,
    /// Fully qualified type of the error
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Short name of the error type
    pub name: String,
    /// Backtrace captured where the details were extracted
    pub stack: String,
}

impl ErrorDetails {
    /// Extract message, type names, and a backtrace from an error so it
    /// can be attached to an event as plain metadata.
    #[must_use]
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let type_name = std::any::type_name::<E>();
        let name = type_name.rsplit("::").next().unwrap_or(type_name);

        Self {
            message: err.to_string(),
            arguments: None,
            type_name: Some(type_name.to_string()),
            name: name.to_string(),
            stack: Backtrace::force_capture().to_string(),
        }
    }
}

impl From<ErrorDetails> for Value {
    fn from(details: ErrorDetails) -> Self {
        serde_json::to_value(&details).unwrap_or(Self::Null)
    }
}
