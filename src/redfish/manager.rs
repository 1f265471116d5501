//! Manager
//!
//! A management subsystem such as a BMC, enclosure manager or rack manager.

use super::{
    AccountService, Chassis, ComputerSystem, EthernetInterface, HostInterface, LogService,
    ManagerNetworkProtocol, SerialInterface, Switch, VirtualMedia,
};
use crate::common::{
    get_objects, get_optional, impl_resource, list_referenced, Entity, Link, Links, OData,
    PowerState, Resource, Status,
};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CommandConnectTypesSupported {
    #[serde(rename = "SSH")]
    Ssh,
    Telnet,
    #[serde(rename = "IPMI")]
    Ipmi,
    Oem,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GraphicalConnectTypesSupported {
    #[serde(rename = "KVMIP")]
    KvmIp,
    Oem,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SerialConnectTypesSupported {
    #[serde(rename = "SSH")]
    Ssh,
    Telnet,
    #[serde(rename = "IPMI")]
    Ipmi,
    Oem,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ManagerType {
    ManagementController,
    EnclosureManager,
    #[serde(rename = "BMC")]
    Bmc,
    RackManager,
    AuxiliaryController,
    Service,
    #[serde(other)]
    Unknown,
}

/// Command shell service offered by a manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommandShell {
    pub connect_types_supported: Vec<CommandConnectTypesSupported>,
    pub max_concurrent_sessions: u32,
    pub service_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GraphicalConsole {
    pub connect_types_supported: Vec<GraphicalConnectTypesSupported>,
    pub max_concurrent_sessions: u32,
    pub service_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SerialConsole {
    pub connect_types_supported: Vec<SerialConnectTypesSupported>,
    pub max_concurrent_sessions: u32,
    pub service_enabled: bool,
}

/// A management subsystem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Manager {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    #[serde(rename = "AutoDSTEnabled")]
    pub auto_dst_enabled: bool,
    pub command_shell: CommandShell,
    pub date_time: String,
    /// Offset from UTC, e.g. `+06:00`.
    pub date_time_local_offset: String,
    pub description: String,
    pub firmware_version: String,
    pub graphical_console: GraphicalConsole,
    pub manager_type: Option<ManagerType>,
    pub model: String,
    pub power_state: Option<PowerState>,
    pub redundancy: Vec<serde_json::Value>,
    #[serde(rename = "Redundancy@odata.count")]
    pub redundancy_count: usize,
    #[serde(rename = "RemoteRedfishServiceUri")]
    pub remote_redfish_service_uri: String,
    pub serial_console: SerialConsole,
    #[serde(rename = "ServiceEntryPointUUID")]
    pub service_entry_point_uuid: String,
    pub status: Status,
    #[serde(rename = "UUID")]
    pub uuid: String,

    ethernet_interfaces: Link,
    host_interfaces: Link,
    log_services: Link,
    network_protocol: Link,
    remote_account_service: Link,
    serial_interfaces: Link,
    virtual_media: Link,
    links: ManagerLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ManagerLinks {
    manager_for_chassis: Links,
    #[serde(rename = "ManagerForChassis@odata.count")]
    manager_for_chassis_count: usize,
    manager_for_servers: Links,
    #[serde(rename = "ManagerForServers@odata.count")]
    manager_for_servers_count: usize,
    manager_for_switches: Links,
    #[serde(rename = "ManagerForSwitches@odata.count")]
    manager_for_switches_count: usize,
    manager_in_chassis: Link,
}

impl_resource!(Manager);

impl Manager {
    pub fn manager_for_chassis_count(&self) -> usize {
        self.links.manager_for_chassis_count
    }

    pub fn manager_for_servers_count(&self) -> usize {
        self.links.manager_for_servers_count
    }

    pub fn manager_for_switches_count(&self) -> usize {
        self.links.manager_for_switches_count
    }

    pub async fn ethernet_interfaces(&self) -> Result<Vec<EthernetInterface>> {
        list_referenced(self.transport()?, self.ethernet_interfaces.as_str()).await
    }

    pub async fn host_interfaces(&self) -> Result<Vec<HostInterface>> {
        list_referenced(self.transport()?, self.host_interfaces.as_str()).await
    }

    pub async fn log_services(&self) -> Result<Vec<LogService>> {
        list_referenced(self.transport()?, self.log_services.as_str()).await
    }

    /// Network protocol settings of this manager.
    pub async fn network_protocol(&self) -> Result<Option<ManagerNetworkProtocol>> {
        get_optional(self.transport()?, self.network_protocol.as_str()).await
    }

    /// Account service for a remote Redfish service this manager fronts.
    pub async fn remote_account_service(&self) -> Result<Option<AccountService>> {
        get_optional(self.transport()?, self.remote_account_service.as_str()).await
    }

    pub async fn serial_interfaces(&self) -> Result<Vec<SerialInterface>> {
        list_referenced(self.transport()?, self.serial_interfaces.as_str()).await
    }

    pub async fn virtual_media(&self) -> Result<Vec<VirtualMedia>> {
        list_referenced(self.transport()?, self.virtual_media.as_str()).await
    }

    /// Chassis this manager controls.
    pub async fn manager_for_chassis(&self) -> Result<Vec<Chassis>> {
        get_objects(self.transport()?, self.links.manager_for_chassis.as_slice()).await
    }

    /// Systems this manager controls.
    pub async fn manager_for_servers(&self) -> Result<Vec<ComputerSystem>> {
        get_objects(self.transport()?, self.links.manager_for_servers.as_slice()).await
    }

    pub async fn manager_for_switches(&self) -> Result<Vec<Switch>> {
        get_objects(self.transport()?, self.links.manager_for_switches.as_slice()).await
    }

    /// Chassis this manager is physically located in.
    pub async fn manager_in_chassis(&self) -> Result<Option<Chassis>> {
        get_optional(self.transport()?, self.links.manager_in_chassis.as_str()).await
    }
}
