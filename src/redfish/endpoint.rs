//! Endpoint
//!
//! A fabric entity that can send or receive protocol traffic.

use crate::common::{impl_resource, Entity, Identifier, OData, Protocol, Status};
use serde::Deserialize;

/// Role an entity connected to an endpoint plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EntityRole {
    Initiator,
    Target,
    Both,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConnectedEntity {
    pub entity_role: Option<EntityRole>,
    pub entity_type: String,
    pub identifiers: Vec<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Endpoint {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub connected_entities: Vec<ConnectedEntity>,
    pub description: String,
    pub endpoint_protocol: Option<Protocol>,
    pub host_reservation_memory_bytes: Option<u64>,
    pub identifiers: Vec<Identifier>,
    pub status: Status,
}

impl_resource!(Endpoint);
