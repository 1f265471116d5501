//! Drive
//!
//! A disk drive or other physical storage medium.

use super::{Assembly, Chassis, Endpoint, PcieFunction, Volume};
use crate::common::{
    get_objects, get_optional, impl_resource, Entity, Identifier, IndicatorLed, Link, Links,
    Location, OData, Protocol, Resource, Status,
};
use crate::error::Result;
use serde::Deserialize;

/// Encryption ability of a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EncryptionAbility {
    None,
    SelfEncryptingDrive,
    Other,
    #[serde(other)]
    Unknown,
}

/// Encryption state of a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EncryptionStatus {
    // Misspelled in early schema versions; both spellings appear in the wild.
    Unecrypted,
    Unencrypted,
    Unlocked,
    Locked,
    Foreign,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HotspareReplacementMode {
    Revertible,
    NonRevertible,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HotspareType {
    None,
    Global,
    Chassis,
    Dedicated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MediaType {
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "SMR")]
    Smr,
    #[serde(other)]
    Unknown,
}

/// Status indicator state of a drive bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StatusIndicator {
    #[serde(rename = "OK")]
    Ok,
    Fail,
    Rebuild,
    PredictiveFailureAnalysis,
    Hotspare,
    InACriticalArray,
    InAFailedArray,
    #[serde(other)]
    Unknown,
}

/// Operation currently running on a drive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Operation {
    pub operation_name: String,
    pub percentage_complete: Option<u32>,
}

/// A disk drive or other physical storage medium.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Drive {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub asset_tag: String,
    pub block_size_bytes: Option<u64>,
    pub capable_speed_gbs: Option<f32>,
    pub capacity_bytes: Option<u64>,
    pub description: String,
    pub encryption_ability: Option<EncryptionAbility>,
    pub encryption_status: Option<EncryptionStatus>,
    pub failure_predicted: bool,
    pub hotspare_replacement_mode: Option<HotspareReplacementMode>,
    pub hotspare_type: Option<HotspareType>,
    pub identifiers: Vec<Identifier>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub location: Vec<Location>,
    pub manufacturer: String,
    pub media_type: Option<MediaType>,
    pub model: String,
    pub negotiated_speed_gbs: Option<f32>,
    pub operations: Vec<Operation>,
    pub part_number: String,
    pub physical_location: Option<Location>,
    pub predicted_media_life_left_percent: Option<f32>,
    pub protocol: Option<Protocol>,
    pub revision: String,
    #[serde(rename = "RotationSpeedRPM")]
    pub rotation_speed_rpm: Option<f32>,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub status: Status,
    pub status_indicator: Option<StatusIndicator>,

    assembly: Link,
    links: DriveLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DriveLinks {
    chassis: Link,
    endpoints: Links,
    #[serde(rename = "Endpoints@odata.count")]
    endpoints_count: usize,
    volumes: Links,
    #[serde(rename = "Volumes@odata.count")]
    volumes_count: usize,
    #[serde(rename = "PCIeFunctions")]
    pcie_functions: Links,
    #[serde(rename = "PCIeFunctions@odata.count")]
    pcie_functions_count: usize,
}

impl_resource!(Drive);

impl Drive {
    /// Server-reported number of associated endpoints.
    pub fn endpoints_count(&self) -> usize {
        self.links.endpoints_count
    }

    pub fn volumes_count(&self) -> usize {
        self.links.volumes_count
    }

    pub fn pcie_functions_count(&self) -> usize {
        self.links.pcie_functions_count
    }

    /// Assembly data for this drive.
    pub async fn assembly(&self) -> Result<Option<Assembly>> {
        get_optional(self.transport()?, self.assembly.as_str()).await
    }

    /// Chassis containing this drive.
    pub async fn chassis(&self) -> Result<Option<Chassis>> {
        get_optional(self.transport()?, self.links.chassis.as_str()).await
    }

    /// Endpoints this drive is associated with.
    pub async fn endpoints(&self) -> Result<Vec<Endpoint>> {
        get_objects(self.transport()?, self.links.endpoints.as_slice()).await
    }

    /// Volumes this drive is associated with.
    pub async fn volumes(&self) -> Result<Vec<Volume>> {
        get_objects(self.transport()?, self.links.volumes.as_slice()).await
    }

    pub async fn pcie_functions(&self) -> Result<Vec<PcieFunction>> {
        get_objects(self.transport()?, self.links.pcie_functions.as_slice()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Health, State};
    use crate::error::Error;

    const DRIVE_BODY: &str = r##"{
        "@odata.context": "/redfish/v1/$metadata#Drive.Drive",
        "@odata.type": "#Drive.v1_4_0.Drive",
        "@odata.id": "/redfish/v1/Systems/1/Storage/1/Drives/Disk1",
        "Id": "Disk1",
        "Name": "Drive Sample",
        "Description": "Drive One",
        "Assembly": {"@odata.id": "/redfish/v1/Systems/1/Storage/1/Drives/Disk1/Assembly"},
        "AssetTag": "DRV-0001",
        "BlockSizeBytes": 512,
        "CapableSpeedGbs": 12,
        "CapacityBytes": 899527000000,
        "EncryptionAbility": "SelfEncryptingDrive",
        "EncryptionStatus": "Unlocked",
        "FailurePredicted": false,
        "HotspareType": "None",
        "Identifiers": [
            {"DurableNameFormat": "NAA", "DurableName": "500003942810D13A"}
        ],
        "IndicatorLED": "Lit",
        "Manufacturer": "Contoso",
        "MediaType": "HDD",
        "Model": "3000GT8",
        "NegotiatedSpeedGbs": 12,
        "PartNumber": "SG0GP8811253178M02GJA00",
        "Protocol": "SAS",
        "Revision": "100A",
        "RotationSpeedRPM": 15000,
        "SKU": "N9PF3",
        "SerialNumber": "72D0A037FRD26",
        "Status": {"State": "Enabled", "Health": "OK"},
        "StatusIndicator": "OK",
        "Links": {
            "Chassis": {"@odata.id": "/redfish/v1/Chassis/1"},
            "Endpoints": [
                {"@odata.id": "/redfish/v1/Fabrics/SAS/Endpoints/1"},
                {"@odata.id": "/redfish/v1/Fabrics/SAS/Endpoints/2"}
            ],
            "Endpoints@odata.count": 2,
            "Volumes": [
                {"@odata.id": "/redfish/v1/Systems/1/Storage/1/Volumes/1"}
            ],
            "Volumes@odata.count": 1,
            "PCIeFunctions": [],
            "PCIeFunctions@odata.count": 0
        }
    }"##;

    #[test]
    fn test_drive_decodes_typed_fields() {
        let drive: Drive = serde_json::from_str(DRIVE_BODY).unwrap();

        assert_eq!(drive.entity.id, "Disk1");
        assert_eq!(drive.entity.name, "Drive Sample");
        assert_eq!(drive.odata.id, "/redfish/v1/Systems/1/Storage/1/Drives/Disk1");
        assert_eq!(drive.capacity_bytes, Some(899_527_000_000));
        assert_eq!(drive.block_size_bytes, Some(512));
        assert_eq!(drive.encryption_ability, Some(EncryptionAbility::SelfEncryptingDrive));
        assert_eq!(drive.media_type, Some(MediaType::Hdd));
        assert_eq!(drive.protocol, Some(Protocol::Sas));
        assert_eq!(drive.rotation_speed_rpm, Some(15000.0));
        assert_eq!(drive.sku, "N9PF3");
        assert_eq!(drive.indicator_led, Some(IndicatorLed::Lit));
        assert_eq!(drive.status.state, Some(State::Enabled));
        assert_eq!(drive.status.health, Some(Health::Ok));
        assert_eq!(drive.identifiers[0].durable_name, "500003942810D13A");
    }

    #[test]
    fn test_drive_captures_links_without_resolving() {
        let drive: Drive = serde_json::from_str(DRIVE_BODY).unwrap();

        assert_eq!(
            drive.assembly.as_str(),
            "/redfish/v1/Systems/1/Storage/1/Drives/Disk1/Assembly"
        );
        assert_eq!(drive.links.chassis.as_str(), "/redfish/v1/Chassis/1");
        assert_eq!(
            drive.links.endpoints.as_slice(),
            &[
                "/redfish/v1/Fabrics/SAS/Endpoints/1".to_string(),
                "/redfish/v1/Fabrics/SAS/Endpoints/2".to_string()
            ]
        );
        assert_eq!(drive.endpoints_count(), 2);
        assert_eq!(drive.volumes_count(), 1);
        assert!(drive.links.pcie_functions.is_empty());
        assert!(!drive.entity.is_attached());
    }

    #[test]
    fn test_drive_count_is_passthrough() {
        let drive: Drive = serde_json::from_str(
            r#"{"Id": "d", "Links": {"Endpoints": [{"@odata.id": "/e/1"}], "Endpoints@odata.count": 5}}"#,
        )
        .unwrap();
        assert_eq!(drive.endpoints_count(), 5);
        assert_eq!(drive.links.endpoints.len(), 1);
    }

    #[test]
    fn test_drive_wrong_type_is_rejected() {
        let result = serde_json::from_str::<Drive>(r#"{"Id": "d", "CapacityBytes": "big"}"#);
        assert!(result.is_err());
        assert!(serde_json::from_str::<Drive>("[1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_accessors_on_detached_drive_fail() {
        let drive: Drive = serde_json::from_str(DRIVE_BODY).unwrap();

        assert!(matches!(
            drive.endpoints().await,
            Err(Error::DetachedEntity { ref id }) if id == "Disk1"
        ));
        assert!(matches!(drive.chassis().await, Err(Error::DetachedEntity { .. })));
    }

    #[test]
    fn test_null_description_and_links_read_as_defaults() {
        let drive: Drive =
            crate::common::decode(br#"{"Id": "1", "Description": null, "Links": null}"#).unwrap();
        assert_eq!(drive.entity.id, "1");
        assert_eq!(drive.description, "");
        assert_eq!(drive.endpoints_count(), 0);
        assert!(drive.links.chassis.is_empty());
    }
}
