//! Processor

use crate::common::{impl_resource, Entity, OData, Status};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Processor {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub instruction_set: String,
    pub manufacturer: String,
    #[serde(rename = "MaxSpeedMHz")]
    pub max_speed_mhz: Option<u32>,
    pub model: String,
    pub processor_architecture: String,
    pub processor_type: String,
    pub socket: String,
    pub status: Status,
    pub total_cores: Option<u32>,
    pub total_threads: Option<u32>,
}

impl_resource!(Processor);
