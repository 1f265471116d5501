//! Computer system
//!
//! A server, blade, partition or other computing system, and the entry
//! point to most of its components.

use super::{
    Bios, Chassis, EthernetInterface, LogService, Manager, Memory, MemoryDomain,
    NetworkInterface, PcieDevice, PcieFunction, Processor, SecureBoot, SimpleStorage, Storage,
};
use crate::common::{
    get_objects, get_optional, impl_resource, list_referenced, Entity, IndicatorLed, Link, Links,
    OData, PowerState, Resource, Status,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Boot order property in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BootOrderTypes {
    BootOrder,
    AliasBootOrder,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BootSourceOverrideEnabled {
    Disabled,
    /// Boot to the override target once, then revert to `Disabled`.
    Once,
    Continuous,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BootSourceOverrideMode {
    Legacy,
    #[serde(rename = "UEFI")]
    Uefi,
    #[serde(other)]
    Unknown,
}

/// Features a hosting system supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HostingRole {
    ApplicationServer,
    StorageServer,
    Switch,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InterfaceType {
    #[serde(rename = "TPM1_2")]
    Tpm1_2,
    #[serde(rename = "TPM2_0")]
    Tpm2_0,
    #[serde(rename = "TCM1_0")]
    Tcm1_0,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MemoryMirroring {
    System,
    #[serde(rename = "DIMM")]
    Dimm,
    Hybrid,
    None,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PowerRestorePolicyTypes {
    AlwaysOn,
    AlwaysOff,
    LastState,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SystemType {
    Physical,
    Virtual,
    #[serde(rename = "OS")]
    Os,
    PhysicallyPartitioned,
    VirtuallyPartitioned,
    Composed,
    #[serde(other)]
    Unknown,
}

/// Reset requested through the `#ComputerSystem.Reset` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulShutdown,
    GracefulRestart,
    ForceRestart,
    Nmi,
    ForceOn,
    PushPowerButton,
    PowerCycle,
    Suspend,
    Pause,
    Resume,
    #[serde(other)]
    Unknown,
}

/// Boot configuration of a system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Boot {
    pub alias_boot_order: Vec<String>,
    pub boot_next: String,
    pub boot_order: Vec<String>,
    pub boot_order_property_selection: Option<BootOrderTypes>,
    pub boot_source_override_enabled: Option<BootSourceOverrideEnabled>,
    pub boot_source_override_mode: Option<BootSourceOverrideMode>,
    pub boot_source_override_target: String,
    pub uefi_target_boot_source_override: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MemorySummary {
    pub memory_mirroring: Option<MemoryMirroring>,
    pub status: Status,
    #[serde(rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: Option<f32>,
    #[serde(rename = "TotalSystemPersistentMemoryGiB")]
    pub total_system_persistent_memory_gib: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProcessorSummary {
    pub count: Option<u32>,
    pub logical_processor_count: Option<u32>,
    pub model: String,
    pub status: Status,
}

/// Trusted modules (TPM and the like) installed in a system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrustedModules {
    pub firmware_version: String,
    pub firmware_version2: String,
    pub interface_type: Option<InterfaceType>,
    pub interface_type_selection: String,
    pub status: Status,
}

/// Host watchdog timer settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WatchdogTimer {
    /// Whether the function is enabled, not whether a countdown is running.
    pub function_enabled: bool,
    pub status: Status,
    pub timeout_action: String,
    pub warning_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResetAction {
    #[serde(rename = "target", alias = "Target")]
    pub target: String,
    #[serde(rename = "ResetType@Redfish.AllowableValues")]
    pub allowed_reset_types: Vec<ResetType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComputerSystemActions {
    #[serde(rename = "#ComputerSystem.Reset")]
    pub reset: ResetAction,
}

/// A computing system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ComputerSystem {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub actions: ComputerSystemActions,
    pub asset_tag: String,
    pub bios_version: String,
    pub boot: Boot,
    pub description: String,
    /// DNS host name, without any domain information.
    pub host_name: String,
    pub host_watchdog_timer: WatchdogTimer,
    pub hosting_roles: Vec<HostingRole>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub manufacturer: String,
    pub memory_summary: MemorySummary,
    pub model: String,
    pub part_number: String,
    pub power_restore_policy: Option<PowerRestorePolicyTypes>,
    pub power_state: Option<PowerState>,
    pub processor_summary: ProcessorSummary,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub status: Status,
    pub sub_model: String,
    pub system_type: Option<SystemType>,
    pub trusted_modules: Vec<TrustedModules>,
    #[serde(rename = "UUID")]
    pub uuid: String,

    bios: Link,
    ethernet_interfaces: Link,
    log_services: Link,
    memory: Link,
    memory_domains: Link,
    network_interfaces: Link,
    processors: Link,
    secure_boot: Link,
    simple_storage: Link,
    storage: Link,
    #[serde(rename = "PCIeDevices")]
    pcie_devices: Links,
    #[serde(rename = "PCIeDevices@odata.count")]
    pcie_devices_count: usize,
    #[serde(rename = "PCIeFunctions")]
    pcie_functions: Links,
    #[serde(rename = "PCIeFunctions@odata.count")]
    pcie_functions_count: usize,
    links: ComputerSystemLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ComputerSystemLinks {
    chassis: Links,
    #[serde(rename = "Chassis@odata.count")]
    chassis_count: usize,
    managed_by: Links,
    #[serde(rename = "ManagedBy@odata.count")]
    managed_by_count: usize,
}

impl_resource!(ComputerSystem);

impl ComputerSystem {
    pub fn pcie_devices_count(&self) -> usize {
        self.pcie_devices_count
    }

    pub fn pcie_functions_count(&self) -> usize {
        self.pcie_functions_count
    }

    pub fn chassis_count(&self) -> usize {
        self.links.chassis_count
    }

    pub fn managed_by_count(&self) -> usize {
        self.links.managed_by_count
    }

    /// BIOS settings of this system.
    pub async fn bios(&self) -> Result<Option<Bios>> {
        get_optional(self.transport()?, self.bios.as_str()).await
    }

    pub async fn secure_boot(&self) -> Result<Option<SecureBoot>> {
        get_optional(self.transport()?, self.secure_boot.as_str()).await
    }

    pub async fn ethernet_interfaces(&self) -> Result<Vec<EthernetInterface>> {
        list_referenced(self.transport()?, self.ethernet_interfaces.as_str()).await
    }

    pub async fn log_services(&self) -> Result<Vec<LogService>> {
        list_referenced(self.transport()?, self.log_services.as_str()).await
    }

    pub async fn memory(&self) -> Result<Vec<Memory>> {
        list_referenced(self.transport()?, self.memory.as_str()).await
    }

    pub async fn memory_domains(&self) -> Result<Vec<MemoryDomain>> {
        list_referenced(self.transport()?, self.memory_domains.as_str()).await
    }

    pub async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        list_referenced(self.transport()?, self.network_interfaces.as_str()).await
    }

    pub async fn processors(&self) -> Result<Vec<Processor>> {
        list_referenced(self.transport()?, self.processors.as_str()).await
    }

    pub async fn simple_storages(&self) -> Result<Vec<SimpleStorage>> {
        list_referenced(self.transport()?, self.simple_storage.as_str()).await
    }

    /// Storage subsystems of this system.
    pub async fn storage(&self) -> Result<Vec<Storage>> {
        list_referenced(self.transport()?, self.storage.as_str()).await
    }

    pub async fn pcie_devices(&self) -> Result<Vec<PcieDevice>> {
        get_objects(self.transport()?, self.pcie_devices.as_slice()).await
    }

    pub async fn pcie_functions(&self) -> Result<Vec<PcieFunction>> {
        get_objects(self.transport()?, self.pcie_functions.as_slice()).await
    }

    /// Chassis containing this system.
    pub async fn chassis(&self) -> Result<Vec<Chassis>> {
        get_objects(self.transport()?, self.links.chassis.as_slice()).await
    }

    /// Managers responsible for this system.
    pub async fn managed_by(&self) -> Result<Vec<Manager>> {
        get_objects(self.transport()?, self.links.managed_by.as_slice()).await
    }

    /// Whether the service advertises `reset_type`. Services that publish no
    /// allowable values are assumed to accept any.
    pub fn supports_reset(&self, reset_type: ResetType) -> bool {
        let allowed = &self.actions.reset.allowed_reset_types;
        allowed.is_empty() || allowed.contains(&reset_type)
    }

    /// Invoke the `#ComputerSystem.Reset` action.
    ///
    /// Posts to the advertised action target, or to the conventional
    /// `<system>/Actions/ComputerSystem.Reset` path when none is advertised.
    /// `ResetType::Unknown` is refused without sending anything.
    pub async fn reset(&self, reset_type: ResetType) -> Result<()> {
        if reset_type == ResetType::Unknown {
            return Err(Error::InvalidRequest(
                "reset type Unknown has no wire value".to_string(),
            ));
        }
        let transport = self.transport()?;
        let target = if self.actions.reset.target.is_empty() {
            format!(
                "{}/Actions/ComputerSystem.Reset",
                self.odata.id.trim_end_matches('/')
            )
        } else {
            self.actions.reset.target.clone()
        };

        tracing::info!("reset {} -> {:?}", self.entity.id, reset_type);
        let body = serde_json::json!({ "ResetType": reset_type });
        transport.post(&target, Some(&body)).await?;
        Ok(())
    }
}
