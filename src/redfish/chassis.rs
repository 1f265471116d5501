//! Chassis
//!
//! Physical container of systems, drives and other components.

use super::Drive;
use crate::common::{
    get_objects, impl_resource, Entity, IndicatorLed, Links, Location, OData, PowerState,
    Resource, Status,
};
use crate::error::Result;
use serde::Deserialize;

/// Physical form of a chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChassisType {
    Rack,
    Blade,
    Enclosure,
    StandAlone,
    RackMount,
    Card,
    Cartridge,
    Row,
    Pod,
    Expansion,
    Sidecar,
    Zone,
    Sled,
    Shelf,
    Drawer,
    Module,
    Component,
    #[serde(rename = "IPBasedDrive")]
    IpBasedDrive,
    RackGroup,
    StorageEnclosure,
    Other,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Chassis {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub asset_tag: String,
    pub chassis_type: Option<ChassisType>,
    pub description: String,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<IndicatorLed>,
    pub location: Option<Location>,
    pub manufacturer: String,
    pub model: String,
    pub part_number: String,
    pub power_state: Option<PowerState>,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub serial_number: String,
    pub status: Status,

    links: ChassisLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ChassisLinks {
    drives: Links,
    #[serde(rename = "Drives@odata.count")]
    drives_count: usize,
}

impl_resource!(Chassis);

impl Chassis {
    pub fn drives_count(&self) -> usize {
        self.links.drives_count
    }

    /// Drives housed in this chassis.
    pub async fn drives(&self) -> Result<Vec<Drive>> {
        get_objects(self.transport()?, self.links.drives.as_slice()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chassis_decodes() {
        let chassis: Chassis = serde_json::from_str(
            r#"{
                "@odata.id": "/redfish/v1/Chassis/1U",
                "Id": "1U",
                "Name": "Computer System Chassis",
                "ChassisType": "RackMount",
                "Manufacturer": "Contoso",
                "PowerState": "On",
                "IndicatorLED": "Off",
                "Links": {
                    "Drives": [{"@odata.id": "/redfish/v1/Chassis/1U/Drives/0"}],
                    "Drives@odata.count": 1
                }
            }"#,
        )
        .unwrap();
        assert_eq!(chassis.chassis_type, Some(ChassisType::RackMount));
        assert_eq!(chassis.power_state, Some(PowerState::On));
        assert_eq!(chassis.drives_count(), 1);
        assert_eq!(chassis.links.drives.as_slice()[0], "/redfish/v1/Chassis/1U/Drives/0");
    }
}
