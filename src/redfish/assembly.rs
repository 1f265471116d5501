//! Assembly
//!
//! Assembly (FRU) records attached to a component.

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Assembly {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    /// Assembly records, inline.
    pub assemblies: Vec<AssemblyData>,
    #[serde(rename = "Assemblies@odata.count")]
    pub assemblies_count: usize,
    pub description: String,
}

impl_resource!(Assembly);

/// A single assembly record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssemblyData {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
    /// Where the OEM binary image of this assembly can be downloaded.
    #[serde(rename = "BinaryDataURI")]
    pub binary_data_uri: String,
    pub description: String,
    pub engineering_change_level: String,
    #[serde(rename = "MemberId")]
    pub member_id: String,
    pub model: String,
    pub name: String,
    pub part_number: String,
    pub physical_context: String,
    pub producer: String,
    pub production_date: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub spare_part_number: String,
    pub status: Status,
    pub vendor: String,
    pub version: String,
}
