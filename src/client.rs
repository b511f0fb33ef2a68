//! Client for the `PagerDuty` integration (events) API.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::EventError;
use crate::event::{EventRequest, EventType};

/// `PagerDuty` integration API endpoint.
const EVENTS_API_URL: &str = "https://events.pagerduty.com/generic/2010-04-15/create_event.json";

/// Client for sending trigger, acknowledge, and resolve events.
///
/// Holds a fixed endpoint and service key; immutable after construction.
/// Each call issues one independent request, so a client can be shared
/// and called concurrently.
#[derive(Debug, Clone)]
pub struct EventsClient {
    endpoint: String,
    service_key: String,
    client: reqwest::Client,
}

impl EventsClient {
    /// Create a client with a service key aka. integration key.
    ///
    /// The key is treated as opaque and never validated.
    #[must_use]
    pub fn new(service_key: impl Into<String>) -> Self {
        Self::with_endpoint(service_key, EVENTS_API_URL)
    }

    /// Create a client pointed at a specific endpoint instead of the
    /// production API. Useful for tests and proxies.
    #[must_use]
    pub fn with_endpoint(service_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service_key: service_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint this client sends events to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Trigger an incident.
    ///
    /// If there is no open incident with `incident_key`, the server
    /// creates one; passing `None` always creates a new incident. The
    /// description (or a truncated version) is what shows up in pages
    /// and the incident table.
    ///
    /// Returns the incident key reported by the server, which may differ
    /// from the supplied key when a new incident is created.
    ///
    /// # Errors
    /// Returns error if the request fails, the API responds with a
    /// non-200 status, or the response carries no incident key.
    pub async fn trigger(
        &self,
        incident_key: Option<&str>,
        description: &str,
        details: impl Into<Value>,
    ) -> Result<String, EventError> {
        let request = EventRequest::new(
            &self.service_key,
            EventType::Trigger,
            incident_key,
            Some(description),
            details.into(),
        );

        let data = self.send(&request).await?;
        let response: TriggerResponse = serde_json::from_value(data)?;
        Ok(response.incident_key)
    }

    /// Acknowledge an incident.
    ///
    /// Returns the full parsed response body on success.
    ///
    /// # Errors
    /// Returns error if the request fails or the API responds with a
    /// non-200 status.
    pub async fn acknowledge(
        &self,
        incident_key: &str,
        description: Option<&str>,
        details: impl Into<Value>,
    ) -> Result<Value, EventError> {
        let request = EventRequest::new(
            &self.service_key,
            EventType::Acknowledge,
            Some(incident_key),
            description,
            details.into(),
        );

        self.send(&request).await
    }

    /// Resolve an incident.
    ///
    /// Returns the full parsed response body on success.
    ///
    /// # Errors
    /// Returns error if the request fails or the API responds with a
    /// non-200 status.
    pub async fn resolve(
        &self,
        incident_key: &str,
        description: Option<&str>,
        details: impl Into<Value>,
    ) -> Result<Value, EventError> {
        let request = EventRequest::new(
            &self.service_key,
            EventType::Resolve,
            Some(incident_key),
            description,
            details.into(),
        );

        self.send(&request).await
    }

    /// Send an event request and parse the response.
    ///
    /// Status 200 is the only success path. Any other status fails with
    /// the status named in the error; the raw body is logged for
    /// diagnostics but never parsed as the success payload.
    async fn send(&self, request: &EventRequest) -> Result<Value, EventError> {
        debug!(
            event_type = %request.event_type,
            incident_key = ?request.incident_key,
            "Sending PagerDuty event"
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();

            warn!(
                status = %status,
                body = %body,
                "PagerDuty API request failed"
            );

            return Err(EventError::UnexpectedStatus(status));
        }

        let data = response.json::<Value>().await?;
        debug!(event_type = %request.event_type, "PagerDuty event accepted");
        Ok(data)
    }
}

/// Success body for trigger events.
#[derive(Debug, Deserialize)]
struct TriggerResponse {
    incident_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_production_endpoint() {
        let client = EventsClient::new("asd");
        assert_eq!(client.endpoint(), EVENTS_API_URL);
        assert!(!client.endpoint().is_empty());
    }

    #[test]
    fn test_with_endpoint_overrides_url() {
        let client = EventsClient::with_endpoint("asd", "http://localhost:9999/events");
        assert_eq!(client.endpoint(), "http://localhost:9999/events");
    }
}
