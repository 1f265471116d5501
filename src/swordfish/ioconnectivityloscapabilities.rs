//! IO connectivity line of service capabilities

use crate::common::{impl_resource, Entity, Identifier, OData, Protocol};
use serde::Deserialize;

/// An IO connectivity line of service, carried inline by its capabilities
/// resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IoConnectivityLineOfService {
    #[serde(flatten)]
    pub odata: OData,
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub access_protocols: Vec<Protocol>,
    pub max_bytes_per_second: Option<i64>,
    #[serde(rename = "MaxIOPS")]
    pub max_iops: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IoConnectivityLoSCapabilities {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub identifier: Identifier,
    pub max_supported_bytes_per_second: Option<i64>,
    #[serde(rename = "MaxSupportedIOPS")]
    pub max_supported_iops: Option<i64>,
    pub supported_access_protocols: Vec<Protocol>,
    pub supported_lines_of_service: Vec<IoConnectivityLineOfService>,
    #[serde(rename = "SupportedLinesOfService@odata.count")]
    pub supported_lines_of_service_count: usize,
}

impl_resource!(IoConnectivityLoSCapabilities);
