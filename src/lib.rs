//! Minimal client for the `PagerDuty` integration (events) API.
//!
//! This crate sends `trigger`, `acknowledge`, and `resolve` events for an
//! incident identified by a key, attaching a description and arbitrary
//! JSON metadata. Every operation is a single POST that completes with
//! one success-or-failure outcome; there is no retry policy, batching, or
//! state kept between calls.
//!
//! # Usage
//!
//! ```no_run
//! use pagerduty_events::{ErrorDetails, EventsClient};
//!
//! # async fn example() -> Result<(), pagerduty_events::EventError> {
//! let client = EventsClient::new("my-service-key");
//!
//! // Trigger an incident; the server reports the incident key in use
//! let incident_key = client
//!     .trigger(Some("db-conn-prod"), "Database connection failed", serde_json::json!({}))
//!     .await?;
//!
//! // Attach error metadata without flattening the error by hand
//! let err = std::io::Error::other("connection reset");
//! client
//!     .trigger(Some(incident_key.as_str()), "Still failing", ErrorDetails::from_error(&err))
//!     .await?;
//!
//! // Acknowledge and resolve return the full response body
//! client.acknowledge(&incident_key, Some("on it"), serde_json::json!({})).await?;
//! client.resolve(&incident_key, None, serde_json::json!({})).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The client is configured with a single service key (aka. integration
//! key), passed at construction. The key travels inside the JSON body,
//! not in a header.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod event;

pub use client::EventsClient;
pub use error::EventError;
pub use event::{ErrorDetails, EventRequest, EventType};
