//! Service root
//!
//! Entry point of a Redfish service, served at `/redfish/v1/`.

use super::{AccountService, Chassis, ComputerSystem, EventService, Manager};
use crate::common::{get_object, get_optional, impl_resource, list_referenced, Entity, Link, OData, Resource};
use crate::error::Result;
use crate::service::Transport;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceRoot {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub product: String,
    pub redfish_version: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
    pub vendor: String,

    account_service: Link,
    chassis: Link,
    event_service: Link,
    managers: Link,
    systems: Link,
}

impl_resource!(ServiceRoot);

impl ServiceRoot {
    /// Fetch the root of the service behind `transport`.
    pub async fn connect(transport: &Transport) -> Result<Self> {
        get_object(transport, "").await
    }

    pub async fn systems(&self) -> Result<Vec<ComputerSystem>> {
        list_referenced(self.transport()?, self.systems.as_str()).await
    }

    pub async fn managers(&self) -> Result<Vec<Manager>> {
        list_referenced(self.transport()?, self.managers.as_str()).await
    }

    pub async fn chassis(&self) -> Result<Vec<Chassis>> {
        list_referenced(self.transport()?, self.chassis.as_str()).await
    }

    pub async fn event_service(&self) -> Result<Option<EventService>> {
        get_optional(self.transport()?, self.event_service.as_str()).await
    }

    pub async fn account_service(&self) -> Result<Option<AccountService>> {
        get_optional(self.transport()?, self.account_service.as_str()).await
    }

    /// Address of the systems collection, empty when not advertised.
    pub fn systems_link(&self) -> &str {
        self.systems.as_str()
    }

    pub fn managers_link(&self) -> &str {
        self.managers.as_str()
    }

    pub fn chassis_link(&self) -> &str {
        self.chassis.as_str()
    }
}
