//! BIOS and Secure Boot

use crate::common::{impl_resource, Entity, OData};
use serde::Deserialize;
use serde_json::{Map, Value};

/// BIOS settings of a system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bios {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub attribute_registry: String,
    /// Vendor-defined attribute name/value pairs.
    pub attributes: Map<String, Value>,
    pub description: String,
}

impl_resource!(Bios);

impl Bios {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SecureBootCurrentBootType {
    Enabled,
    Disabled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SecureBootModeType {
    SetupMode,
    UserMode,
    AuditMode,
    DeployedMode,
    #[serde(other)]
    Unknown,
}

/// UEFI Secure Boot state of a system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SecureBoot {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(flatten)]
    pub odata: OData,
    pub description: String,
    pub secure_boot_current_boot: Option<SecureBootCurrentBootType>,
    pub secure_boot_enable: bool,
    pub secure_boot_mode: Option<SecureBootModeType>,
}

impl_resource!(SecureBoot);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bios_attributes_stay_untyped() {
        let bios: Bios = serde_json::from_str(
            r#"{
                "Id": "BIOS",
                "Name": "BIOS Configuration Current Settings",
                "AttributeRegistry": "BiosAttributeRegistryP89.v1_0_0",
                "Attributes": {"AdminPhone": "", "BootMode": "Uefi", "ProcCoreDisable": 0}
            }"#,
        )
        .unwrap();
        assert_eq!(bios.attribute("BootMode"), Some(&Value::from("Uefi")));
        assert_eq!(bios.attribute("ProcCoreDisable"), Some(&Value::from(0)));
        assert!(bios.attribute("Missing").is_none());
    }
}
