//! Data storage line of service capabilities

use crate::common::{impl_resource, Entity, Identifier, OData};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProvisioningPolicy {
    /// Storage fully allocated up front.
    Fixed,
    /// Storage allocated as it is written.
    Thin,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StorageAccessCapability {
    Read,
    Write,
    WriteOnce,
    Append,
    Streaming,
    Execute,
    #[serde(other)]
    Unknown,
}

/// How quickly data becomes accessible again after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RecoveryAccessScope {
    OnlineActive,
    OnlinePassive,
    Nearline,
    Offline,
    #[serde(other)]
    Unknown,
}

/// A data storage line of service, carried inline by its capabilities resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DataStorageLineOfService {
    #[serde(flatten)]
    pub odata: OData,
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub access_capabilities: Vec<StorageAccessCapability>,
    pub is_space_efficient: bool,
    pub provisioning_policy: Option<ProvisioningPolicy>,
    pub recoverable_capacity_source_count: Option<u32>,
    pub recovery_time_objectives: Option<RecoveryAccessScope>,
}

/// Data storage capabilities a service can provision.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DataStorageLoSCapabilities {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub identifier: Identifier,
    pub maximum_recoverable_capacity_source_count: Option<u32>,
    pub supported_access_capabilities: Vec<StorageAccessCapability>,
    pub supported_lines_of_service: Vec<DataStorageLineOfService>,
    #[serde(rename = "SupportedLinesOfService@odata.count")]
    pub supported_lines_of_service_count: usize,
    pub supported_provisioning_policies: Vec<ProvisioningPolicy>,
    pub supported_recovery_time_objectives: Vec<RecoveryAccessScope>,
    pub supports_space_efficiency: bool,
}

impl_resource!(DataStorageLoSCapabilities);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_storage_capabilities_decode() {
        let capabilities: DataStorageLoSCapabilities = serde_json::from_str(
            r##"{
                "@odata.type": "#DataStorageLoSCapabilities.v1_1_2.DataStorageLoSCapabilities",
                "@odata.id": "/redfish/v1/StorageServices/1/DataStorageLoSCapabilities",
                "Id": "DataStorageLoSCapabilities-1",
                "Name": "DataStorageLoSCapabilitiesOne",
                "MaximumRecoverableCapacitySourceCount": 3,
                "SupportedAccessCapabilities": ["Read", "Write", "WriteOnce"],
                "SupportedProvisioningPolicies": ["Thin"],
                "SupportedRecoveryTimeObjectives": ["OnlineActive", "Nearline"],
                "SupportsSpaceEfficiency": true,
                "SupportedLinesOfService": [
                    {
                        "Id": "Gold",
                        "Name": "Gold",
                        "AccessCapabilities": ["Read", "Write"],
                        "IsSpaceEfficient": true,
                        "ProvisioningPolicy": "Thin",
                        "RecoverableCapacitySourceCount": 2,
                        "RecoveryTimeObjectives": "OnlineActive"
                    }
                ],
                "SupportedLinesOfService@odata.count": 1
            }"##,
        )
        .unwrap();

        assert_eq!(capabilities.entity.id, "DataStorageLoSCapabilities-1");
        assert_eq!(capabilities.maximum_recoverable_capacity_source_count, Some(3));
        assert_eq!(
            capabilities.supported_access_capabilities,
            vec![
                StorageAccessCapability::Read,
                StorageAccessCapability::Write,
                StorageAccessCapability::WriteOnce
            ]
        );
        assert_eq!(capabilities.supported_provisioning_policies, vec![ProvisioningPolicy::Thin]);
        assert!(capabilities.supports_space_efficiency);
        assert_eq!(capabilities.supported_lines_of_service_count, 1);

        let gold = &capabilities.supported_lines_of_service[0];
        assert_eq!(gold.id, "Gold");
        assert_eq!(gold.recovery_time_objectives, Some(RecoveryAccessScope::OnlineActive));
        assert_eq!(gold.recoverable_capacity_source_count, Some(2));
    }
}
