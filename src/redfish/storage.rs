//! Storage
//!
//! Storage subsystems, their volumes, and simple storage controllers.

use super::Drive;
use crate::common::{
    get_objects, impl_resource, list_referenced, Entity, Identifier, Link, Links, OData,
    Protocol, Resource, Status,
};
use crate::error::Result;
use serde::Deserialize;

/// A storage controller, inline in its [`Storage`] resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StorageController {
    #[serde(rename = "MemberId")]
    pub member_id: String,
    pub name: String,
    pub firmware_version: String,
    pub identifiers: Vec<Identifier>,
    pub manufacturer: String,
    pub model: String,
    pub part_number: String,
    pub serial_number: String,
    pub speed_gbps: Option<f32>,
    pub status: Status,
    pub supported_controller_protocols: Vec<Protocol>,
    pub supported_device_protocols: Vec<Protocol>,
}

/// A storage subsystem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Storage {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub status: Status,
    pub storage_controllers: Vec<StorageController>,
    #[serde(rename = "StorageControllers@odata.count")]
    pub storage_controllers_count: usize,

    drives: Links,
    #[serde(rename = "Drives@odata.count")]
    drives_count: usize,
    volumes: Link,
}

impl_resource!(Storage);

impl Storage {
    pub fn drives_count(&self) -> usize {
        self.drives_count
    }

    /// Drives attached to this storage subsystem.
    pub async fn drives(&self) -> Result<Vec<Drive>> {
        get_objects(self.transport()?, self.drives.as_slice()).await
    }

    /// Volumes in this storage subsystem's volume collection.
    pub async fn volumes(&self) -> Result<Vec<Volume>> {
        list_referenced(self.transport()?, self.volumes.as_str()).await
    }
}

/// A logical volume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Volume {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub block_size_bytes: Option<u64>,
    pub capacity_bytes: Option<u64>,
    pub description: String,
    pub encrypted: bool,
    pub identifiers: Vec<Identifier>,
    #[serde(rename = "RAIDType")]
    pub raid_type: String,
    pub status: Status,
    pub volume_type: String,
}

impl_resource!(Volume);

/// A device attached to a simple storage controller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Device {
    pub capacity_bytes: Option<u64>,
    pub manufacturer: String,
    pub model: String,
    pub name: String,
    pub status: Status,
}

/// A storage controller and its directly attached devices.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SimpleStorage {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub devices: Vec<Device>,
    pub status: Status,
    #[serde(rename = "UefiDevicePath")]
    pub uefi_device_path: String,
}

impl_resource!(SimpleStorage);
