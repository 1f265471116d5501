//! PCIe devices and functions

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PcieDevice {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub asset_tag: String,
    pub description: String,
    pub device_type: String,
    pub firmware_version: String,
    pub manufacturer: String,
    pub model: String,
    pub part_number: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub status: Status,
}

impl_resource!(PcieDevice);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PcieFunction {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub class_code: String,
    pub description: String,
    pub device_class: String,
    #[serde(rename = "DeviceId")]
    pub device_id: String,
    pub function_id: Option<u32>,
    pub function_type: String,
    pub revision_id: String,
    pub status: Status,
    #[serde(rename = "SubsystemId")]
    pub subsystem_id: String,
    #[serde(rename = "SubsystemVendorId")]
    pub subsystem_vendor_id: String,
    #[serde(rename = "VendorId")]
    pub vendor_id: String,
}

impl_resource!(PcieFunction);
