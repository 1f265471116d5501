//! Event service
//!
//! Event delivery settings of a service and its subscriptions.

use super::EventDestination;
use crate::common::{impl_resource, list_referenced, Entity, Link, OData, Resource, Status};
use crate::error::Result;
use serde::Deserialize;

/// Content type of events delivered to a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventFormatType {
    /// JSON bodies of resource type Event.
    Event,
    /// JSON bodies of resource type MetricReport.
    MetricReport,
    #[serde(other)]
    Unknown,
}

/// Properties usable in the `$filter` query of the server-sent event URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SseFilterPropertiesSupported {
    pub event_format_type: bool,
    #[serde(rename = "MessageId")]
    pub message_id: bool,
    pub metric_report_definition: bool,
    pub origin_resource: bool,
    pub registry_prefix: bool,
    pub resource_type: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EventService {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    /// Delivery attempts before a subscription is terminated.
    pub delivery_retry_attempts: Option<u32>,
    pub delivery_retry_interval_seconds: Option<u32>,
    pub description: String,
    /// Absent means only `Event` is supported.
    pub event_format_types: Vec<EventFormatType>,
    pub registry_prefixes: Vec<String>,
    pub resource_types: Vec<String>,
    #[serde(rename = "SSEFilterPropertiesSupported")]
    pub sse_filter_properties_supported: SseFilterPropertiesSupported,
    #[serde(rename = "ServerSentEventUri")]
    pub server_sent_event_uri: String,
    pub service_enabled: bool,
    pub status: Status,
    pub subordinate_resources_supported: bool,

    subscriptions: Link,
}

impl_resource!(EventService);

impl EventService {
    /// Event destinations subscribed to this service.
    pub async fn subscriptions(&self) -> Result<Vec<EventDestination>> {
        list_referenced(self.transport()?, self.subscriptions.as_str()).await
    }
}
