//! Event destination (subscription)

use super::EventFormatType;
use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

/// A subscriber the event service delivers events to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EventDestination {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub context: String,
    pub description: String,
    pub destination: String,
    pub event_format_type: Option<EventFormatType>,
    pub event_types: Vec<String>,
    pub protocol: String,
    pub registry_prefixes: Vec<String>,
    pub resource_types: Vec<String>,
    pub status: Status,
    pub subscription_type: String,
}

impl_resource!(EventDestination);
