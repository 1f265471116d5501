//! Virtual media

use crate::common::{impl_resource, Entity, OData};
use serde::Deserialize;

/// Removable media a manager can present to its host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VirtualMedia {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub connected_via: String,
    pub description: String,
    pub image: String,
    pub image_name: String,
    pub inserted: bool,
    pub media_types: Vec<String>,
    pub write_protected: bool,
}

impl_resource!(VirtualMedia);
