//! Memory modules and memory domains

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Memory {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    #[serde(rename = "CapacityMiB")]
    pub capacity_mib: Option<u64>,
    pub data_width_bits: Option<u32>,
    pub description: String,
    pub device_locator: String,
    pub manufacturer: String,
    pub memory_device_type: String,
    pub memory_type: String,
    pub operating_speed_mhz: Option<u32>,
    pub part_number: String,
    pub serial_number: String,
    pub status: Status,
}

impl_resource!(Memory);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MemoryDomain {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub allows_block_provisioning: bool,
    pub allows_memory_chunk_creation: bool,
    pub allows_mirroring: bool,
    pub allows_sparing: bool,
    pub description: String,
}

impl_resource!(MemoryDomain);
